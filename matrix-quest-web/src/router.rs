use matrix_quest_game::{Difficulty, Screen};
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Welcome,
    #[at("/prologue")]
    Prologue,
    #[at("/chapters")]
    Chapters,
    #[at("/chapters/:tier")]
    Chapter { tier: Difficulty },
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_screen(screen: Screen) -> Self {
        match screen {
            Screen::Welcome => Self::Welcome,
            Screen::Prologue => Self::Prologue,
            Screen::DifficultySelect => Self::Chapters,
            Screen::QuestList(tier) => Self::Chapter { tier },
        }
    }

    /// The screen this route displays, `None` for the not-found page.
    #[must_use]
    pub const fn to_screen(&self) -> Option<Screen> {
        match self {
            Self::Welcome => Some(Screen::Welcome),
            Self::Prologue => Some(Screen::Prologue),
            Self::Chapters => Some(Screen::DifficultySelect),
            Self::Chapter { tier } => Some(Screen::QuestList(*tier)),
            Self::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screens_round_trip_through_routes() {
        let screens = [
            Screen::Welcome,
            Screen::Prologue,
            Screen::DifficultySelect,
            Screen::QuestList(Difficulty::Easy),
            Screen::QuestList(Difficulty::Ultra),
        ];
        for screen in screens {
            assert_eq!(Route::from_screen(screen).to_screen(), Some(screen));
        }
        assert_eq!(Route::NotFound.to_screen(), None);
    }

    #[test]
    fn paths_match_expected_urls() {
        assert_eq!(Route::Chapters.to_path(), "/chapters");
        assert_eq!(
            Route::Chapter {
                tier: Difficulty::Hard
            }
            .to_path(),
            "/chapters/hard"
        );
        assert_eq!(
            Route::recognize("/chapters/normal"),
            Some(Route::Chapter {
                tier: Difficulty::Normal
            })
        );
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }
}
