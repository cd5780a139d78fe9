//! Matrix Quest Engine
//!
//! Platform-agnostic core logic for the Matrix Quest onboarding checklist.
//! This crate provides the quest catalog, progress tracking and the screen
//! state machine without UI or platform-specific dependencies.

pub mod calculator;
pub mod catalog;
pub mod difficulty;
pub mod events;
pub mod gesture;
pub mod navigation;
pub mod prefs;
pub mod progress;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use calculator::{ChapterSummary, ProgressCalculator, QuestStatus};
pub use catalog::{Achievement, CatalogError, ChapterInfo, Quest, QuestCatalog, QuestIcon, Step};
pub use difficulty::{Difficulty, ParseDifficultyError};
pub use events::QuestEvent;
pub use gesture::{BULK_GESTURE_THRESHOLD, TapCounter};
pub use navigation::{Field, NavigationError, Navigator, Registration, Screen};
pub use prefs::{SNOW_KEY, SnowPreference};
pub use progress::{ProgressRecord, checkbox_key};
pub use session::{QuestSession, SessionError};
pub use store::{MemoryBackend, PROGRESS_KEY, ProgressBackend, ProgressStore, StoreError};
