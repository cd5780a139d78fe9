//! Events emitted by session operations for the presentation layer to consume
use crate::difficulty::Difficulty;
use serde::{Deserialize, Serialize};

/// Something observable that a session operation caused.
///
/// The core never renders or plays sounds; callers map these to cues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestEvent {
    Started {
        player_name: String,
    },
    TierSelected {
        difficulty: Difficulty,
    },
    StepChecked {
        quest_id: String,
        step_id: String,
    },
    StepUnchecked {
        quest_id: String,
        step_id: String,
    },
    QuestCompleted {
        quest_id: String,
        achievement_id: String,
    },
    ChapterBulkCompleted {
        difficulty: Difficulty,
    },
    /// A tier was newly added to the completed set.
    ChapterCompleted {
        difficulty: Difficulty,
    },
    AllChaptersCompleted,
    SnowToggled {
        enabled: bool,
    },
}

impl QuestEvent {
    /// Whether this event is a celebration (chapter or campaign finished).
    #[must_use]
    pub const fn is_celebration(&self) -> bool {
        matches!(
            self,
            Self::ChapterBulkCompleted { .. }
                | Self::ChapterCompleted { .. }
                | Self::AllChaptersCompleted
        )
    }
}
