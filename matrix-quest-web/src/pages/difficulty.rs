use crate::components::progress_bar::ProgressBar;
use crate::i18n::{fmt_pct, t, tr};
use matrix_quest_game::{ChapterInfo, ChapterSummary, Difficulty};
use std::collections::BTreeMap;
use yew::prelude::*;

/// One selectable chapter with its current standing.
#[derive(Clone, PartialEq)]
pub struct ChapterCard {
    pub info: ChapterInfo,
    pub summary: ChapterSummary,
}

impl ChapterCard {
    #[must_use]
    pub fn new(info: ChapterInfo, summary: ChapterSummary) -> Self {
        Self { info, summary }
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.info.difficulty
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct DifficultyPageProps {
    pub player_name: AttrValue,
    pub chapters: Vec<ChapterCard>,
    pub on_choose: Callback<Difficulty>,
}

fn render_card(card: &ChapterCard, on_choose: &Callback<Difficulty>) -> Html {
    let tier = card.difficulty();
    let onclick = {
        let cb = on_choose.clone();
        Callback::from(move |_| cb.emit(tier))
    };
    let pct = fmt_pct(card.summary.progress);
    let count = card.summary.total_quests.to_string();
    let mut args = BTreeMap::new();
    args.insert("pct", pct.as_str());
    args.insert("count", count.as_str());
    args.insert("rank", card.info.rank.as_str());
    let progress_label = tr("difficulty.progress", Some(&args));

    html! {
        <li class={classes!("chapter-card", card.summary.recorded_complete.then_some("completed"))}>
            <button type="button" class="chapter-pick" onclick={onclick} data-testid={format!("tier-{tier}")}>
                <span class="chapter-title">{ card.info.title.clone() }</span>
                if card.summary.recorded_complete {
                    <span class="badge">{ "✓ " }{ t("difficulty.completed") }</span>
                }
            </button>
            <p class="chapter-summary">{ card.info.summary.clone() }</p>
            <p class="muted">{ tr("difficulty.quests", Some(&args)) }{ " · " }{ tr("difficulty.rank", Some(&args)) }</p>
            <ProgressBar value={card.summary.progress} label={progress_label.clone()} />
            <p class="muted small">{ progress_label }</p>
        </li>
    }
}

#[function_component(DifficultyPage)]
pub fn difficulty_page(props: &DifficultyPageProps) -> Html {
    let mut args = BTreeMap::new();
    args.insert("name", props.player_name.as_str());

    html! {
        <section class="panel difficulty" aria-labelledby="difficulty-title" data-testid="difficulty">
            <h1 id="difficulty-title">{ t("difficulty.title") }</h1>
            <p class="muted">{ tr("difficulty.subtitle", Some(&args)) }</p>
            <ul class="chapter-list">
                { for props.chapters.iter().map(|card| render_card(card, &props.on_choose)) }
            </ul>
        </section>
    }
}
