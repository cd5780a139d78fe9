use futures::executor::block_on;
use matrix_quest_game::{QuestCatalog, QuestStatus, Step};
use matrix_quest_web::components::code_block::{CodeBlock, CodeBlockProps};
use matrix_quest_web::components::header::{Header, Props as HeaderProps};
use matrix_quest_web::components::progress_bar::{ProgressBar, ProgressBarProps};
use matrix_quest_web::components::quest_card::{QuestCard, QuestCardProps};
use matrix_quest_web::components::quest_step::{QuestStep, QuestStepProps};
use matrix_quest_web::components::victory_banner::{VictoryBanner, VictoryBannerProps};
use yew::{Callback, LocalServerRenderer};

fn card_props(status: QuestStatus, checked: Vec<bool>) -> QuestCardProps {
    let catalog = QuestCatalog::builtin();
    let quest = catalog.quest("quest_1_1").cloned().unwrap();
    QuestCardProps {
        quest,
        status,
        progress: 0.0,
        checked,
        on_toggle: Callback::noop(),
    }
}

#[test]
fn header_renders_language_picker_and_snow_toggle() {
    matrix_quest_web::i18n::set_lang("en");
    let props = HeaderProps {
        snow_enabled: true,
        on_toggle_snow: Callback::noop(),
        on_lang_change: Callback::noop(),
        current_lang: "en".to_string(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("lang-select"));
    assert!(html.contains("Русский"));
    assert!(html.contains("Snow: on"));
    assert!(html.contains("aria-pressed=\"true\""));
}

#[test]
fn progress_bar_rounds_and_clamps() {
    let props = ProgressBarProps {
        value: 66.666,
        label: "progress".into(),
    };
    let html = block_on(LocalServerRenderer::<ProgressBar>::with_props(props).render());
    assert!(html.contains("aria-valuenow=\"67\""));
    assert!(html.contains("width:67%"));

    let props = ProgressBarProps {
        value: 140.0,
        label: "progress".into(),
    };
    let html = block_on(LocalServerRenderer::<ProgressBar>::with_props(props).render());
    assert!(html.contains("aria-valuenow=\"100\""));
}

#[test]
fn code_block_shows_command_and_copy_button() {
    matrix_quest_web::i18n::set_lang("en");
    let props = CodeBlockProps {
        command: "ufw allow 443/tcp".into(),
    };
    let html = block_on(LocalServerRenderer::<CodeBlock>::with_props(props).render());
    assert!(html.contains("ufw allow 443/tcp"));
    assert!(html.contains("Copy"));
    assert!(!html.contains("Copied!"));
}

#[test]
fn quest_step_renders_command_and_hint() {
    matrix_quest_web::i18n::set_lang("en");
    let props = QuestStepProps {
        quest_id: "quest_1_1".into(),
        step: Step {
            id: "step_5".into(),
            text: "Upgraded the system packages".into(),
            command: Some("apt update".into()),
            hint: Some("May take a while.".into()),
        },
        checked: true,
        on_toggle: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<QuestStep>::with_props(props).render());
    assert!(html.contains("quest_1_1_step_5"));
    assert!(html.contains("apt update"));
    assert!(html.contains("May take a while."));
    assert!(html.contains("done"));
}

#[test]
fn locked_quest_card_hides_its_steps() {
    matrix_quest_web::i18n::set_lang("en");
    let html = block_on(
        LocalServerRenderer::<QuestCard>::with_props(card_props(QuestStatus::Locked, vec![false; 6]))
            .render(),
    );
    assert!(html.contains("aria-disabled=\"true\""));
    assert!(html.contains("Finish the previous quest"));
    assert!(!html.contains("quest-steps"));
}

#[test]
fn completed_quest_card_shows_achievement() {
    matrix_quest_web::i18n::set_lang("en");
    let html = block_on(
        LocalServerRenderer::<QuestCard>::with_props(card_props(QuestStatus::Completed, vec![true; 6]))
            .render(),
    );
    assert!(html.contains("6 of 6 steps"));
    assert!(html.contains("Achievement unlocked: SSH Master"));
    assert!(html.contains("quest-steps"));
}

#[test]
fn available_quest_card_starts_collapsed() {
    matrix_quest_web::i18n::set_lang("en");
    let html = block_on(
        LocalServerRenderer::<QuestCard>::with_props(card_props(QuestStatus::Available, vec![false; 6]))
            .render(),
    );
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(html.contains("0 of 6 steps"));
    assert!(!html.contains("SSH Master"));
}

#[test]
fn victory_banner_names_the_new_rank() {
    matrix_quest_web::i18n::set_lang("en");
    let props = VictoryBannerProps {
        rank: "Digital Immortal".into(),
        on_next: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<VictoryBanner>::with_props(props).render());
    assert!(html.contains("New rank: Digital Immortal"));
    assert!(html.contains("Choose the next chapter"));
}
