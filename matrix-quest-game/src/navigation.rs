//! Forward-only screen state machine
use crate::difficulty::Difficulty;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "screen", content = "tier", rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Welcome,
    Prologue,
    DifficultySelect,
    /// Quest list of the chosen tier. The tier itself is never persisted.
    QuestList(Difficulty),
}

impl Screen {
    #[must_use]
    pub const fn current_tier(self) -> Option<Difficulty> {
        match self {
            Self::QuestList(tier) => Some(tier),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Prologue => "prologue",
            Self::DifficultySelect => "difficulty_select",
            Self::QuestList(_) => "quest_list",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuestList(tier) => write!(f, "quest_list({tier})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Welcome form field, used to report which one is blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PlayerName,
    ServerIp,
    ServerPassword,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerName => "player name",
            Self::ServerIp => "server IP",
            Self::ServerPassword => "server password",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("cannot {action} from the {from} screen")]
    WrongScreen { from: Screen, action: &'static str },
    #[error("{0} must not be empty")]
    EmptyField(Field),
}

/// Contents of the welcome form. Values are kept as typed; only the
/// emptiness check trims.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub player_name: String,
    pub server_ip: String,
    pub server_password: String,
}

impl Registration {
    #[must_use]
    pub fn new(
        player_name: impl Into<String>,
        server_ip: impl Into<String>,
        server_password: impl Into<String>,
    ) -> Self {
        Self {
            player_name: player_name.into(),
            server_ip: server_ip.into(),
            server_password: server_password.into(),
        }
    }

    /// # Errors
    ///
    /// Returns the first field that is empty after trimming.
    pub fn validate(&self) -> Result<(), NavigationError> {
        [
            (Field::PlayerName, &self.player_name),
            (Field::ServerIp, &self.server_ip),
            (Field::ServerPassword, &self.server_password),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map_or(Ok(()), |(field, _)| Err(NavigationError::EmptyField(field)))
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

/// welcome -> prologue -> difficulty select <-> quest list.
/// A rejected transition leaves the screen unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    screen: Screen,
}

impl Navigator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            screen: Screen::Welcome,
        }
    }

    #[must_use]
    pub const fn screen(self) -> Screen {
        self.screen
    }

    fn expect(self, expected: Screen, action: &'static str) -> Result<(), NavigationError> {
        if self.screen == expected {
            Ok(())
        } else {
            Err(NavigationError::WrongScreen {
                from: self.screen,
                action,
            })
        }
    }

    /// # Errors
    ///
    /// Fails when not on the welcome screen or a field is blank.
    pub fn start(&mut self, registration: &Registration) -> Result<(), NavigationError> {
        self.expect(Screen::Welcome, "start")?;
        registration.validate()?;
        self.screen = Screen::Prologue;
        Ok(())
    }

    /// # Errors
    ///
    /// Fails when not on the prologue screen.
    pub fn acknowledge_prologue(&mut self) -> Result<(), NavigationError> {
        self.expect(Screen::Prologue, "acknowledge the prologue")?;
        self.screen = Screen::DifficultySelect;
        Ok(())
    }

    /// # Errors
    ///
    /// Fails when not on the difficulty screen.
    pub fn select_tier(&mut self, tier: Difficulty) -> Result<(), NavigationError> {
        self.expect(Screen::DifficultySelect, "select a tier")?;
        self.screen = Screen::QuestList(tier);
        Ok(())
    }

    /// # Errors
    ///
    /// Fails when no quest list is shown.
    pub fn return_to_tiers(&mut self) -> Result<(), NavigationError> {
        if self.screen.current_tier().is_none() {
            return Err(NavigationError::WrongScreen {
                from: self.screen,
                action: "return to the tiers",
            });
        }
        self.screen = Screen::DifficultySelect;
        Ok(())
    }
}
