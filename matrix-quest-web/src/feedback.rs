//! Turns session events into screen-reader announcements and sound cues
use crate::i18n::tr;
use matrix_quest_game::{QuestCatalog, QuestEvent};
use std::collections::BTreeMap;

/// Short sound cue a page may play for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Check,
    Victory,
    Pop,
}

impl Cue {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Victory => "victory",
            Self::Pop => "pop",
        }
    }
}

#[must_use]
pub const fn cue_for(event: &QuestEvent) -> Option<Cue> {
    match event {
        QuestEvent::StepChecked { .. } => Some(Cue::Check),
        QuestEvent::TierSelected { .. } => Some(Cue::Pop),
        QuestEvent::ChapterBulkCompleted { .. }
        | QuestEvent::ChapterCompleted { .. }
        | QuestEvent::AllChaptersCompleted => Some(Cue::Victory),
        QuestEvent::Started { .. }
        | QuestEvent::StepUnchecked { .. }
        | QuestEvent::QuestCompleted { .. }
        | QuestEvent::SnowToggled { .. } => None,
    }
}

fn step_text(catalog: &QuestCatalog, quest_id: &str, step_id: &str) -> String {
    catalog
        .quest(quest_id)
        .and_then(|quest| quest.step(step_id))
        .map_or_else(|| step_id.to_string(), |step| step.text.clone())
}

fn tr_one(key: &str, name: &str, value: &str) -> String {
    let mut args = BTreeMap::new();
    args.insert(name, value);
    tr(key, Some(&args))
}

/// Localized text to announce for `event`.
#[must_use]
pub fn announcement(event: &QuestEvent, catalog: &QuestCatalog) -> String {
    match event {
        QuestEvent::Started { player_name } => tr_one("announce.started", "name", player_name),
        QuestEvent::TierSelected { difficulty } => {
            let title = catalog
                .chapter(*difficulty)
                .map_or_else(|| difficulty.to_string(), |info| info.title.clone());
            tr_one("announce.tier", "title", &title)
        }
        QuestEvent::StepChecked { quest_id, step_id } => tr_one(
            "announce.step_checked",
            "text",
            &step_text(catalog, quest_id, step_id),
        ),
        QuestEvent::StepUnchecked { quest_id, step_id } => tr_one(
            "announce.step_unchecked",
            "text",
            &step_text(catalog, quest_id, step_id),
        ),
        QuestEvent::QuestCompleted { quest_id, .. } => {
            let name = catalog
                .quest(quest_id)
                .map_or_else(|| quest_id.clone(), |quest| quest.achievement.name.clone());
            tr_one("announce.quest_completed", "name", &name)
        }
        QuestEvent::ChapterBulkCompleted { .. } => tr("announce.bulk", None),
        QuestEvent::ChapterCompleted { difficulty } => {
            let rank = catalog
                .chapter(*difficulty)
                .map_or_else(|| difficulty.to_string(), |info| info.rank.clone());
            tr_one("announce.chapter_completed", "rank", &rank)
        }
        QuestEvent::AllChaptersCompleted => tr("announce.all", None),
        QuestEvent::SnowToggled { enabled: true } => tr("announce.snow_on", None),
        QuestEvent::SnowToggled { enabled: false } => tr("announce.snow_off", None),
    }
}

/// The most significant announcement in a batch: the last celebration if
/// any, otherwise the last event.
#[must_use]
pub fn headline(events: &[QuestEvent], catalog: &QuestCatalog) -> Option<String> {
    events
        .iter()
        .rev()
        .find(|event| event.is_celebration())
        .or_else(|| events.last())
        .map(|event| announcement(event, catalog))
}

/// Publish a batch of events: announce the headline, log cues and forward
/// the snow preference to the page.
pub fn publish(events: &[QuestEvent], catalog: &QuestCatalog) {
    for event in events {
        if let Some(cue) = cue_for(event) {
            log::debug!("cue {}", cue.name());
        }
        if let QuestEvent::SnowToggled { enabled } = event {
            crate::dom::forward_snow_preference(*enabled);
        }
    }
    if let Some(message) = headline(events, catalog) {
        crate::a11y::set_status(&message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_quest_game::Difficulty;

    #[test]
    fn cues_follow_event_kinds() {
        let checked = QuestEvent::StepChecked {
            quest_id: "quest_1_1".into(),
            step_id: "step_1".into(),
        };
        assert_eq!(cue_for(&checked), Some(Cue::Check));
        assert_eq!(
            cue_for(&QuestEvent::TierSelected {
                difficulty: Difficulty::Hard
            }),
            Some(Cue::Pop)
        );
        assert_eq!(cue_for(&QuestEvent::AllChaptersCompleted), Some(Cue::Victory));
        assert_eq!(cue_for(&QuestEvent::SnowToggled { enabled: true }), None);
    }

    #[test]
    fn announcements_use_catalog_content() {
        crate::i18n::set_lang("en");
        let catalog = QuestCatalog::builtin();
        let text = announcement(
            &QuestEvent::ChapterCompleted {
                difficulty: Difficulty::Easy,
            },
            &catalog,
        );
        assert_eq!(text, "Chapter complete. New rank: Junior DevOps Engineer");

        let quest = catalog.quest("quest_1_1").unwrap();
        let text = announcement(
            &QuestEvent::StepChecked {
                quest_id: quest.id.clone(),
                step_id: quest.steps[0].id.clone(),
            },
            &catalog,
        );
        assert!(text.ends_with(&quest.steps[0].text));
    }

    #[test]
    fn headline_prefers_celebrations() {
        crate::i18n::set_lang("en");
        let catalog = QuestCatalog::builtin();
        let events = vec![
            QuestEvent::ChapterBulkCompleted {
                difficulty: Difficulty::Normal,
            },
            QuestEvent::QuestCompleted {
                quest_id: "quest_2_5".into(),
                achievement_id: "x".into(),
            },
            QuestEvent::ChapterCompleted {
                difficulty: Difficulty::Normal,
            },
            QuestEvent::QuestCompleted {
                quest_id: "quest_2_1".into(),
                achievement_id: "y".into(),
            },
        ];
        let headline = headline(&events, &catalog).unwrap();
        assert_eq!(headline, "Chapter complete. New rank: Mid-level Matrix Operator");
        assert!(super::headline(&[], &catalog).is_none());
    }
}
