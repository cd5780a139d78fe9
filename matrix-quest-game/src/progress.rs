//! The single persisted progress record
use crate::difficulty::Difficulty;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Build the checkbox key for a quest step: `{questId}_{stepId}`.
#[must_use]
pub fn checkbox_key(quest_id: &str, step_id: &str) -> String {
    format!("{quest_id}_{step_id}")
}

/// Everything the player has done so far.
///
/// Missing fields deserialize to their defaults so older or partial records
/// still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(default)]
    pub player_name: String,
    #[serde(default, rename = "serverIP")]
    pub server_ip: String,
    /// Stored in plaintext, local only.
    #[serde(default)]
    pub server_password: String,
    #[serde(default)]
    pub checkboxes: BTreeMap<String, bool>,
    #[serde(default)]
    pub completed_difficulties: Vec<Difficulty>,
    /// ISO-8601 timestamp of the welcome form submission.
    #[serde(default)]
    pub started_at: Option<String>,
}

impl ProgressRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_checked(&self, quest_id: &str, step_id: &str) -> bool {
        self.checkboxes
            .get(&checkbox_key(quest_id, step_id))
            .copied()
            .unwrap_or(false)
    }

    pub fn set_checked(&mut self, quest_id: &str, step_id: &str, checked: bool) {
        self.checkboxes
            .insert(checkbox_key(quest_id, step_id), checked);
    }

    /// Flip a step and return its new value.
    pub fn toggle(&mut self, quest_id: &str, step_id: &str) -> bool {
        let next = !self.is_checked(quest_id, step_id);
        self.set_checked(quest_id, step_id, next);
        next
    }

    #[must_use]
    pub fn has_completed(&self, difficulty: Difficulty) -> bool {
        self.completed_difficulties.contains(&difficulty)
    }

    /// Record a tier as completed. Returns `false` if it was already present.
    pub fn mark_completed(&mut self, difficulty: Difficulty) -> bool {
        if self.has_completed(difficulty) {
            return false;
        }
        self.completed_difficulties.push(difficulty);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_stored_field_names() {
        let mut record = ProgressRecord::new();
        record.player_name = "Neo".into();
        record.server_ip = "10.0.0.1".into();
        record.set_checked("quest_1_1", "step_1", true);
        record.mark_completed(Difficulty::Easy);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["playerName"], "Neo");
        assert_eq!(value["serverIP"], "10.0.0.1");
        assert_eq!(value["checkboxes"]["quest_1_1_step_1"], true);
        assert_eq!(value["completedDifficulties"][0], "easy");
        assert!(value["startedAt"].is_null());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let record: ProgressRecord = serde_json::from_str(r#"{"playerName":"Trinity"}"#).unwrap();
        assert_eq!(record.player_name, "Trinity");
        assert!(record.checkboxes.is_empty());
        assert!(record.completed_difficulties.is_empty());
        assert_eq!(record.started_at, None);
    }

    #[test]
    fn toggle_twice_restores_and_leaves_others_alone() {
        let mut record = ProgressRecord::new();
        record.set_checked("quest_1_2", "step_1", true);
        let before = record.clone();
        assert!(record.toggle("quest_1_1", "step_3"));
        assert!(!record.toggle("quest_1_1", "step_3"));
        assert!(!record.is_checked("quest_1_1", "step_3"));
        assert!(record.is_checked("quest_1_2", "step_1"));
        assert_eq!(record.checkboxes.len(), before.checkboxes.len() + 1);
    }

    #[test]
    fn completed_tiers_do_not_duplicate() {
        let mut record = ProgressRecord::new();
        assert!(record.mark_completed(Difficulty::Hard));
        assert!(!record.mark_completed(Difficulty::Hard));
        assert_eq!(record.completed_difficulties, vec![Difficulty::Hard]);
    }
}
