use crate::components::progress_bar::ProgressBar;
use crate::components::quest_icon::glyph;
use crate::components::quest_step::QuestStep;
use crate::i18n::{t, tr};
use matrix_quest_game::{Quest, QuestStatus};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct QuestCardProps {
    pub quest: Quest,
    pub status: QuestStatus,
    pub progress: f64,
    /// One entry per step, in step order.
    pub checked: Vec<bool>,
    pub on_toggle: Callback<(String, String)>,
}

fn status_label(status: QuestStatus) -> String {
    match status {
        QuestStatus::Locked => t("quests.locked"),
        QuestStatus::Available => t("quests.status.available"),
        QuestStatus::InProgress => t("quests.status.in_progress"),
        QuestStatus::Completed => t("quests.status.completed"),
    }
}

#[function_component(QuestCard)]
pub fn quest_card(props: &QuestCardProps) -> Html {
    let quest = &props.quest;
    let started = matches!(props.status, QuestStatus::InProgress | QuestStatus::Completed);
    let expanded = use_state(|| started);

    if props.status == QuestStatus::Locked {
        return html! {
            <article class="quest-card locked" aria-disabled="true" data-testid={quest.id.clone()}>
                <h3>{ "🔒 " }{ quest.title.clone() }</h3>
                <p class="muted">{ t("quests.locked_hint") }</p>
            </article>
        };
    }

    let toggle_expanded = {
        let expanded = expanded.clone();
        Callback::from(move |_| expanded.set(!*expanded))
    };
    let done = props.checked.iter().filter(|checked| **checked).count().to_string();
    let total = quest.steps.len().to_string();
    let mut counts = BTreeMap::new();
    counts.insert("done", done.as_str());
    counts.insert("total", total.as_str());
    let steps_label = tr("quests.steps_done", Some(&counts));
    let body_id = format!("{}-steps", quest.id);
    let mut names = BTreeMap::new();
    names.insert("name", quest.achievement.name.as_str());
    let achievement_label = tr("quests.achievement", Some(&names));

    html! {
        <article
            class={classes!("quest-card", (props.status == QuestStatus::Completed).then_some("completed"))}
            data-testid={quest.id.clone()}
        >
            <button
                type="button"
                class="quest-header"
                aria-expanded={expanded.to_string()}
                aria-controls={body_id.clone()}
                onclick={toggle_expanded}
            >
                <span class="quest-icon" aria-hidden="true">{ glyph(quest.icon) }</span>
                <span class="quest-title">{ quest.title.clone() }</span>
                <span class="quest-status">{ status_label(props.status) }</span>
            </button>
            <p class="quest-description">{ quest.description.clone() }</p>
            <ProgressBar value={props.progress} label={steps_label.clone()} />
            <p class="quest-count">{ steps_label }</p>
            if *expanded {
                <ol id={body_id} class="quest-steps">
                    { for quest.steps.iter().zip(props.checked.iter()).map(|(step, checked)| html! {
                        <QuestStep
                            key={step.id.clone()}
                            quest_id={quest.id.clone()}
                            step={step.clone()}
                            checked={*checked}
                            on_toggle={props.on_toggle.clone()}
                        />
                    }) }
                </ol>
            }
            if props.status == QuestStatus::Completed {
                <div class="achievement" role="note">
                    <strong>{ "🏅 " }{ achievement_label }</strong>
                    <p>{ quest.achievement.desc.clone() }</p>
                </div>
            }
        </article>
    }
}
