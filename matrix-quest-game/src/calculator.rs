//! Derived progress: completion percentages, unlock state and chapter status
use crate::catalog::{Achievement, Quest, QuestCatalog};
use crate::difficulty::Difficulty;
use crate::progress::ProgressRecord;
use serde::{Deserialize, Serialize};

/// Presentation status of a quest within its chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    Locked,
    Available,
    InProgress,
    Completed,
}

/// Aggregate view of one chapter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChapterSummary {
    pub difficulty: Difficulty,
    pub progress: f64,
    pub completed_quests: usize,
    pub total_quests: usize,
    /// Whether the tier is present in the record's completed set.
    pub recorded_complete: bool,
}

/// Pure read-only calculations over a catalog and a progress record.
///
/// Every method is total: unknown ids and empty chapters yield zero progress.
#[derive(Debug, Clone, Copy)]
pub struct ProgressCalculator<'a> {
    catalog: &'a QuestCatalog,
    record: &'a ProgressRecord,
}

impl<'a> ProgressCalculator<'a> {
    #[must_use]
    pub const fn new(catalog: &'a QuestCatalog, record: &'a ProgressRecord) -> Self {
        Self { catalog, record }
    }

    /// Number of the quest's steps currently checked. Keys for steps the
    /// quest does not define are ignored.
    #[must_use]
    pub fn checked_steps(&self, quest: &Quest) -> usize {
        quest
            .steps
            .iter()
            .filter(|step| self.record.is_checked(&quest.id, &step.id))
            .count()
    }

    /// Percentage of checked steps, 0 for a quest without steps.
    #[must_use]
    pub fn quest_progress(&self, quest: &Quest) -> f64 {
        let total = quest.steps.len();
        if total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let pct = self.checked_steps(quest) as f64 / total as f64 * 100.0;
        pct
    }

    #[must_use]
    pub fn is_quest_completed(&self, quest: &Quest) -> bool {
        !quest.steps.is_empty() && self.checked_steps(quest) == quest.steps.len()
    }

    /// The first quest of a chapter is always open; every other quest opens
    /// once its predecessor is completed.
    #[must_use]
    pub fn is_quest_unlocked(&self, index: usize, quests: &[&Quest]) -> bool {
        if index == 0 {
            return true;
        }
        quests
            .get(index - 1)
            .is_some_and(|previous| self.is_quest_completed(previous))
    }

    #[must_use]
    pub fn quest_status(&self, index: usize, quests: &[&Quest]) -> QuestStatus {
        let Some(quest) = quests.get(index) else {
            return QuestStatus::Locked;
        };
        if !self.is_quest_unlocked(index, quests) {
            QuestStatus::Locked
        } else if self.is_quest_completed(quest) {
            QuestStatus::Completed
        } else if self.checked_steps(quest) > 0 {
            QuestStatus::InProgress
        } else {
            QuestStatus::Available
        }
    }

    /// Mean quest progress across the chapter, 0 for an empty chapter.
    #[must_use]
    pub fn chapter_progress(&self, difficulty: Difficulty) -> f64 {
        let quests = self.catalog.quests_for(difficulty);
        if quests.is_empty() {
            return 0.0;
        }
        let sum: f64 = quests.iter().map(|quest| self.quest_progress(quest)).sum();
        #[allow(clippy::cast_precision_loss)]
        let mean = sum / quests.len() as f64;
        mean
    }

    /// True when every quest of a non-empty chapter is completed, which is
    /// exactly when the chapter progress is 100.
    #[must_use]
    pub fn is_chapter_fully_completed(&self, difficulty: Difficulty) -> bool {
        let quests = self.catalog.quests_for(difficulty);
        !quests.is_empty() && quests.iter().all(|quest| self.is_quest_completed(quest))
    }

    #[must_use]
    pub fn all_chapters_completed(&self) -> bool {
        Difficulty::ALL
            .iter()
            .all(|tier| self.record.has_completed(*tier))
    }

    #[must_use]
    pub fn chapter_summary(&self, difficulty: Difficulty) -> ChapterSummary {
        let quests = self.catalog.quests_for(difficulty);
        ChapterSummary {
            difficulty,
            progress: self.chapter_progress(difficulty),
            completed_quests: quests
                .iter()
                .filter(|quest| self.is_quest_completed(quest))
                .count(),
            total_quests: quests.len(),
            recorded_complete: self.record.has_completed(difficulty),
        }
    }

    /// Achievements of every completed quest, in catalog order.
    #[must_use]
    pub fn earned_achievements(&self) -> Vec<&'a Achievement> {
        self.catalog
            .quests()
            .iter()
            .filter(|quest| self.is_quest_completed(quest))
            .map(|quest| &quest.achievement)
            .collect()
    }
}
