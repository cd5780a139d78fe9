//! Quest catalog: static quest definitions grouped into four chapters
use crate::difficulty::Difficulty;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

const DEFAULT_QUEST_DATA: &str = include_str!("../data/quests.json");

/// A single checkable action inside a quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Unique within the owning quest.
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// Informational label awarded when a quest is completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub desc: String,
}

/// Icon tag resolved to artwork by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestIcon {
    #[default]
    Server,
    Shield,
    Package,
    Globe,
    Zap,
    Key,
    User,
    MessageSquare,
    Trophy,
}

impl QuestIcon {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Shield => "shield",
            Self::Package => "package",
            Self::Globe => "globe",
            Self::Zap => "zap",
            Self::Key => "key",
            Self::User => "user",
            Self::MessageSquare => "message-square",
            Self::Trophy => "trophy",
        }
    }
}

/// Immutable quest definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    /// Chapter number, 1 through 4.
    pub chapter: u8,
    pub title: String,
    #[serde(default)]
    pub icon: QuestIcon,
    pub description: String,
    pub achievement: Achievement,
    pub steps: Vec<Step>,
}

impl Quest {
    #[must_use]
    pub const fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::from_chapter(self.chapter)
    }

    #[must_use]
    pub fn step(&self, step_id: &str) -> Option<&Step> {
        self.steps.iter().find(|step| step.id == step_id)
    }
}

/// Per-chapter metadata shown on the difficulty screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterInfo {
    pub difficulty: Difficulty,
    pub title: String,
    pub summary: String,
    /// Title awarded when the chapter is completed.
    pub rank: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse quest catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("quest `{quest_id}` references chapter {chapter}, expected 1-4")]
    ChapterOutOfRange { quest_id: String, chapter: u8 },
    #[error("duplicate quest id `{0}`")]
    DuplicateQuest(String),
    #[error("duplicate step id `{step_id}` in quest `{quest_id}`")]
    DuplicateStep { quest_id: String, step_id: String },
    #[error("duplicate metadata for chapter `{0}`")]
    DuplicateChapter(Difficulty),
}

/// Ordered, validated quest definitions plus chapter metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestCatalog {
    #[serde(default)]
    chapters: Vec<ChapterInfo>,
    #[serde(default)]
    quests: Vec<Quest>,
}

impl QuestCatalog {
    /// Parse and validate a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or violates catalog invariants.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Build a catalog from already-constructed parts.
    ///
    /// # Errors
    ///
    /// Returns an error if the parts violate catalog invariants.
    pub fn from_parts(chapters: Vec<ChapterInfo>, quests: Vec<Quest>) -> Result<Self, CatalogError> {
        let catalog = Self { chapters, quests };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The shipped catalog, parsed once and shared.
    #[must_use]
    pub fn builtin() -> Arc<Self> {
        static CATALOG: OnceLock<Arc<QuestCatalog>> = OnceLock::new();
        Arc::clone(CATALOG.get_or_init(|| Arc::new(Self::load_from_static())))
    }

    fn load_from_static() -> Self {
        Self::from_json(DEFAULT_QUEST_DATA).unwrap_or_else(|err| {
            log::error!("built-in quest catalog is invalid: {err}");
            Self::default()
        })
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut quest_ids = HashSet::new();
        for quest in &self.quests {
            if quest.difficulty().is_none() {
                return Err(CatalogError::ChapterOutOfRange {
                    quest_id: quest.id.clone(),
                    chapter: quest.chapter,
                });
            }
            if !quest_ids.insert(quest.id.as_str()) {
                return Err(CatalogError::DuplicateQuest(quest.id.clone()));
            }
            let mut step_ids = HashSet::new();
            for step in &quest.steps {
                if !step_ids.insert(step.id.as_str()) {
                    return Err(CatalogError::DuplicateStep {
                        quest_id: quest.id.clone(),
                        step_id: step.id.clone(),
                    });
                }
            }
        }
        let mut tiers = HashSet::new();
        for chapter in &self.chapters {
            if !tiers.insert(chapter.difficulty) {
                return Err(CatalogError::DuplicateChapter(chapter.difficulty));
            }
        }
        Ok(())
    }

    /// Every quest in catalog order.
    #[must_use]
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    /// Quests of one tier, in catalog order.
    #[must_use]
    pub fn quests_for(&self, difficulty: Difficulty) -> Vec<&Quest> {
        self.quests
            .iter()
            .filter(|quest| quest.chapter == difficulty.chapter())
            .collect()
    }

    #[must_use]
    pub fn quest(&self, quest_id: &str) -> Option<&Quest> {
        self.quests.iter().find(|quest| quest.id == quest_id)
    }

    #[must_use]
    pub fn chapter(&self, difficulty: Difficulty) -> Option<&ChapterInfo> {
        self.chapters
            .iter()
            .find(|chapter| chapter.difficulty == difficulty)
    }

    #[must_use]
    pub fn chapters(&self) -> &[ChapterInfo] {
        &self.chapters
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses_and_validates() {
        QuestCatalog::from_json(DEFAULT_QUEST_DATA).expect("embedded catalog is valid");
        let catalog = QuestCatalog::builtin();
        assert_eq!(catalog.quests().len(), 29);
        assert_eq!(catalog.quests_for(Difficulty::Easy).len(), 8);
        assert_eq!(catalog.quests_for(Difficulty::Normal).len(), 5);
        assert_eq!(catalog.quests_for(Difficulty::Hard).len(), 8);
        assert_eq!(catalog.quests_for(Difficulty::Ultra).len(), 8);
        for tier in Difficulty::ALL {
            assert!(catalog.chapter(tier).is_some(), "missing metadata for {tier}");
        }
    }

    #[test]
    fn builtin_is_shared() {
        let a = QuestCatalog::builtin();
        let b = QuestCatalog::builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn rejects_out_of_range_chapter() {
        let json = r#"{"quests":[{"id":"q","chapter":7,"title":"t","description":"d",
            "achievement":{"id":"a","name":"n","desc":"d"},"steps":[]}]}"#;
        let err = QuestCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::ChapterOutOfRange { chapter: 7, .. }));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"{"quests":[
            {"id":"q","chapter":1,"title":"t","description":"d",
             "achievement":{"id":"a","name":"n","desc":"d"},"steps":[]},
            {"id":"q","chapter":1,"title":"t","description":"d",
             "achievement":{"id":"a","name":"n","desc":"d"},"steps":[]}]}"#;
        assert!(matches!(
            QuestCatalog::from_json(json),
            Err(CatalogError::DuplicateQuest(id)) if id == "q"
        ));

        let json = r#"{"quests":[{"id":"q","chapter":1,"title":"t","description":"d",
            "achievement":{"id":"a","name":"n","desc":"d"},
            "steps":[{"id":"s","text":"x"},{"id":"s","text":"y"}]}]}"#;
        assert!(matches!(
            QuestCatalog::from_json(json),
            Err(CatalogError::DuplicateStep { .. })
        ));
    }

    #[test]
    fn icon_tags_are_kebab_case() {
        let icon: QuestIcon = serde_json::from_str("\"message-square\"").unwrap();
        assert_eq!(icon, QuestIcon::MessageSquare);
        assert_eq!(icon.as_str(), "message-square");
    }

    #[test]
    fn lookups_find_quests_and_steps() {
        let catalog = QuestCatalog::builtin();
        let quest = catalog.quest("quest_1_1").expect("first quest");
        assert_eq!(quest.difficulty(), Some(Difficulty::Easy));
        assert!(quest.step("step_1").is_some());
        assert!(quest.step("step_99").is_none());
        assert!(catalog.quest("quest_9_9").is_none());
    }
}
