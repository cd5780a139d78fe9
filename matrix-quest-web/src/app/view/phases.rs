use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::pages::{
    difficulty::{ChapterCard, DifficultyPage},
    finale::FinalePage,
    not_found::NotFound,
    prologue::ProloguePage,
    quests::QuestListPage,
    welcome::WelcomePage,
};
use crate::router::Route;
use matrix_quest_game::{Difficulty, Screen};
use yew::prelude::*;

pub fn render_main_view(state: &AppState, handlers: &AppHandlers, route: Option<&Route>) -> Html {
    if matches!(route, Some(Route::NotFound)) {
        return html! { <NotFound on_go_home={handlers.go_home.clone()} /> };
    }

    match state.session.screen() {
        Screen::Welcome => html! {
            <WelcomePage
                initial={state.session.registration()}
                on_start={handlers.start.clone()}
            />
        },
        Screen::Prologue => {
            let record = state.session.record();
            html! {
                <ProloguePage
                    player_name={record.player_name.clone()}
                    server_ip={record.server_ip.clone()}
                    on_continue={handlers.acknowledge_prologue.clone()}
                />
            }
        }
        Screen::DifficultySelect => render_difficulty(state, handlers),
        Screen::QuestList(tier) => render_quests(state, handlers, tier),
    }
}

fn render_difficulty(state: &AppState, handlers: &AppHandlers) -> Html {
    let session = &*state.session;
    let calc = session.calculator();
    let chapters: Vec<ChapterCard> = Difficulty::ALL
        .into_iter()
        .filter_map(|tier| {
            session
                .catalog()
                .chapter(tier)
                .map(|info| ChapterCard::new(info.clone(), calc.chapter_summary(tier)))
        })
        .collect();
    html! {
        <DifficultyPage
            player_name={session.record().player_name.clone()}
            chapters={chapters}
            on_choose={handlers.select_tier.clone()}
        />
    }
}

fn render_quests(state: &AppState, handlers: &AppHandlers, tier: Difficulty) -> Html {
    let session = &*state.session;
    let calc = session.calculator();
    if calc.all_chapters_completed() && calc.is_chapter_fully_completed(tier) {
        let ranks: Vec<String> = session
            .catalog()
            .chapters()
            .iter()
            .map(|info| info.rank.clone())
            .collect();
        return html! {
            <FinalePage
                player_name={session.record().player_name.clone()}
                started_at={session.record().started_at.clone()}
                achievements={calc.earned_achievements().len()}
                ranks={ranks}
                on_back={handlers.return_to_tiers.clone()}
            />
        };
    }

    html! {
        <QuestListPage
            tier={tier}
            catalog={session.shared_catalog()}
            record={session.record().clone()}
            tap_count={session.tap_count()}
            on_back={handlers.return_to_tiers.clone()}
            on_toggle={handlers.toggle_step.clone()}
            on_header_tap={handlers.header_tap.clone()}
        />
    }
}
