use crate::storage::BrowserSession;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub session: UseStateHandle<BrowserSession>,
    pub snow_enabled: UseStateHandle<bool>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        session: use_state(crate::storage::load_session),
        snow_enabled: use_state(|| crate::storage::snow_preference().enabled()),
        current_language: use_state(crate::i18n::current_lang),
    }
}
