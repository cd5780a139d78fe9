#[cfg(any(target_arch = "wasm32", test))]
use crate::router::Route;
#[cfg(any(target_arch = "wasm32", test))]
use matrix_quest_game::Screen;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

/// Route to show for `screen`, or `None` when the URL already matches or the
/// not-found page is up. URLs never move the screen; a mismatching URL is
/// replaced by the screen's own route.
#[cfg(any(target_arch = "wasm32", test))]
fn next_route_for_screen(screen: Screen, current_route: Option<&Route>) -> Option<Route> {
    if matches!(current_route, Some(Route::NotFound)) {
        return None;
    }
    let new_route = Route::from_screen(screen);
    if Some(&new_route) == current_route {
        None
    } else {
        Some(new_route)
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_route_with_screen(
    screen: Screen,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    use_effect_with((screen, active_route), move |(screen, current_route)| {
        if let (Some(nav), Some(new_route)) = (
            navigator.as_ref(),
            next_route_for_screen(*screen, current_route.as_ref()),
        ) {
            nav.replace(&new_route);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_quest_game::Difficulty;

    #[test]
    fn next_route_skips_when_unchanged() {
        let route = Route::from_screen(Screen::Prologue);
        assert!(next_route_for_screen(Screen::Prologue, Some(&route)).is_none());
        assert_eq!(
            next_route_for_screen(Screen::Prologue, None),
            Some(Route::Prologue)
        );
    }

    #[test]
    fn typed_urls_are_overridden_by_the_screen() {
        let typed = Route::Chapter {
            tier: Difficulty::Ultra,
        };
        assert_eq!(
            next_route_for_screen(Screen::Welcome, Some(&typed)),
            Some(Route::Welcome)
        );
        assert_eq!(
            next_route_for_screen(Screen::QuestList(Difficulty::Easy), Some(&typed)),
            Some(Route::Chapter {
                tier: Difficulty::Easy
            })
        );
    }

    #[test]
    fn not_found_page_is_left_alone() {
        assert!(next_route_for_screen(Screen::DifficultySelect, Some(&Route::NotFound)).is_none());
    }
}
