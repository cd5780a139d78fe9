use crate::app::state::AppState;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        current_language.set(code);
    })
}

pub fn build_toggle_snow(state: &AppState) -> Callback<()> {
    let snow_enabled = state.snow_enabled.clone();
    let session_handle = state.session.clone();
    Callback::from(move |()| match crate::storage::snow_preference().toggle() {
        Ok(event) => {
            let enabled = matches!(event, matrix_quest_game::QuestEvent::SnowToggled { enabled: true });
            crate::feedback::publish(&[event], session_handle.catalog());
            snow_enabled.set(enabled);
        }
        Err(err) => log::error!("failed to save snow preference: {err}"),
    })
}

/// Leave the not-found page for the route of the current screen.
pub fn build_go_home(state: &AppState, navigator: Option<Navigator>) -> Callback<()> {
    let session_handle = state.session.clone();
    Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::from_screen(session_handle.screen()));
        }
    })
}
