use crate::app::state::AppState;
use crate::storage::BrowserSession;
use matrix_quest_game::{Difficulty, QuestEvent, Registration, SessionError};
use yew::prelude::*;

/// Clone the session, run `op` on the copy and commit it when it succeeds.
/// Rejected actions leave the visible state untouched.
fn commit<F>(session_handle: &UseStateHandle<BrowserSession>, op: F)
where
    F: FnOnce(&mut BrowserSession) -> Result<Vec<QuestEvent>, SessionError>,
{
    let mut next = (**session_handle).clone();
    match op(&mut next) {
        Ok(events) => {
            crate::feedback::publish(&events, next.catalog());
            session_handle.set(next);
        }
        Err(err) => log::warn!("quest action rejected: {err}"),
    }
}

fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

pub fn build_start(state: &AppState) -> Callback<Registration> {
    let session_handle = state.session.clone();
    Callback::from(move |registration: Registration| {
        commit(&session_handle, |sess| sess.start(registration, now_iso()));
    })
}

pub fn build_acknowledge_prologue(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    Callback::from(move |()| commit(&session_handle, BrowserSession::acknowledge_prologue))
}

pub fn build_select_tier(state: &AppState) -> Callback<Difficulty> {
    let session_handle = state.session.clone();
    Callback::from(move |tier: Difficulty| {
        commit(&session_handle, |sess| sess.select_tier(tier));
    })
}

pub fn build_return_to_tiers(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    Callback::from(move |()| commit(&session_handle, BrowserSession::return_to_tiers))
}

pub fn build_toggle_step(state: &AppState) -> Callback<(String, String)> {
    let session_handle = state.session.clone();
    Callback::from(move |(quest_id, step_id): (String, String)| {
        commit(&session_handle, |sess| sess.toggle_step(&quest_id, &step_id));
    })
}

pub fn build_header_tap(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    Callback::from(move |()| commit(&session_handle, BrowserSession::trigger_bulk_gesture))
}
