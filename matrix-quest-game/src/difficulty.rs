//! Difficulty tiers and their chapter mapping
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four difficulty tiers. Each tier maps 1:1 to a chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Ultra,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty tier `{0}`")]
pub struct ParseDifficultyError(pub String);

impl Difficulty {
    /// All tiers in chapter order.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Normal, Self::Hard, Self::Ultra];

    /// Chapter number (1-4) this tier covers.
    #[must_use]
    pub const fn chapter(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Normal => 2,
            Self::Hard => 3,
            Self::Ultra => 4,
        }
    }

    #[must_use]
    pub const fn from_chapter(chapter: u8) -> Option<Self> {
        match chapter {
            1 => Some(Self::Easy),
            2 => Some(Self::Normal),
            3 => Some(Self::Hard),
            4 => Some(Self::Ultra),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::Ultra => "ultra",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "normal" => Ok(Self::Normal),
            "hard" => Ok(Self::Hard),
            "ultra" => Ok(Self::Ultra),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}
