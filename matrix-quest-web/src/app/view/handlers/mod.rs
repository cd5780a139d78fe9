mod prefs;
mod quest;

use crate::app::state::AppState;
use matrix_quest_game::{Difficulty, Registration};
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub use prefs::{build_go_home, build_lang_change, build_toggle_snow};
pub use quest::{
    build_acknowledge_prologue, build_header_tap, build_return_to_tiers, build_select_tier,
    build_start, build_toggle_step,
};

#[derive(Clone)]
pub struct AppHandlers {
    pub start: Callback<Registration>,
    pub acknowledge_prologue: Callback<()>,
    pub select_tier: Callback<Difficulty>,
    pub return_to_tiers: Callback<()>,
    pub toggle_step: Callback<(String, String)>,
    pub header_tap: Callback<()>,
    pub toggle_snow: Callback<()>,
    pub lang_change: Callback<String>,
    pub go_home: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            start: build_start(state),
            acknowledge_prologue: build_acknowledge_prologue(state),
            select_tier: build_select_tier(state),
            return_to_tiers: build_return_to_tiers(state),
            toggle_step: build_toggle_step(state),
            header_tap: build_header_tap(state),
            toggle_snow: build_toggle_snow(state),
            lang_change: build_lang_change(state),
            go_home: build_go_home(state, navigator),
        }
    }
}
