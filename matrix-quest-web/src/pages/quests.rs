use crate::components::progress_bar::ProgressBar;
use crate::components::quest_card::QuestCard;
use crate::components::victory_banner::VictoryBanner;
use crate::i18n::{fmt_pct, t, tr};
use matrix_quest_game::{
    BULK_GESTURE_THRESHOLD, Difficulty, ProgressCalculator, ProgressRecord, QuestCatalog,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct QuestListPageProps {
    pub tier: Difficulty,
    pub catalog: Arc<QuestCatalog>,
    pub record: ProgressRecord,
    /// Header taps counted toward the bulk-completion gesture.
    pub tap_count: u8,
    pub on_back: Callback<()>,
    pub on_toggle: Callback<(String, String)>,
    pub on_header_tap: Callback<()>,
}

impl PartialEq for QuestListPageProps {
    fn eq(&self, other: &Self) -> bool {
        self.tier == other.tier
            && Arc::ptr_eq(&self.catalog, &other.catalog)
            && self.record == other.record
            && self.tap_count == other.tap_count
            && self.on_back == other.on_back
            && self.on_toggle == other.on_toggle
            && self.on_header_tap == other.on_header_tap
    }
}

#[function_component(QuestListPage)]
pub fn quest_list_page(props: &QuestListPageProps) -> Html {
    let catalog = props.catalog.as_ref();
    let calc = ProgressCalculator::new(catalog, &props.record);
    let quests = catalog.quests_for(props.tier);
    let chapter = catalog.chapter(props.tier);
    let title = chapter.map_or_else(|| props.tier.to_string(), |info| info.title.clone());
    let rank = chapter.map(|info| info.rank.clone()).unwrap_or_default();

    let progress = calc.chapter_progress(props.tier);
    let pct = fmt_pct(progress);
    let mut pct_args = BTreeMap::new();
    pct_args.insert("pct", pct.as_str());
    let progress_label = tr("quests.progress", Some(&pct_args));

    let remaining = BULK_GESTURE_THRESHOLD.saturating_sub(props.tap_count).to_string();
    let mut tap_args = BTreeMap::new();
    tap_args.insert("count", remaining.as_str());
    let show_tap_hint = props.tap_count > 0 && props.tap_count < BULK_GESTURE_THRESHOLD;

    let on_back = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_header_tap = {
        let cb = props.on_header_tap.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="panel quests" aria-labelledby="quests-title" data-testid={format!("quests-{}", props.tier)}>
            <button type="button" class="link-btn" onclick={on_back.clone()} data-testid="quests-back">
                { "← " }{ t("quests.back") }
            </button>
            <h1 id="quests-title">
                <button type="button" class="chapter-heading" onclick={on_header_tap} data-testid="chapter-heading">
                    { title }
                </button>
            </h1>
            if show_tap_hint {
                <p class="tap-hint" role="status">{ tr("quests.tap_hint", Some(&tap_args)) }</p>
            }
            <ProgressBar value={progress} label={progress_label.clone()} />
            <p class="muted">{ progress_label }</p>
            if calc.is_chapter_fully_completed(props.tier) {
                <VictoryBanner rank={rank} on_next={props.on_back.clone()} />
            }
            <div class="quest-list">
                { for quests.iter().enumerate().map(|(index, quest)| {
                    let checked = quest
                        .steps
                        .iter()
                        .map(|step| props.record.is_checked(&quest.id, &step.id))
                        .collect::<Vec<_>>();
                    html! {
                        <QuestCard
                            key={quest.id.clone()}
                            quest={(*quest).clone()}
                            status={calc.quest_status(index, &quests)}
                            progress={calc.quest_progress(quest)}
                            checked={checked}
                            on_toggle={props.on_toggle.clone()}
                        />
                    }
                }) }
            </div>
        </section>
    }
}
