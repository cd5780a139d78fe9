//! Quest session: the service tying catalog, store, navigation and gesture together
use crate::calculator::ProgressCalculator;
use crate::catalog::QuestCatalog;
use crate::difficulty::Difficulty;
use crate::events::QuestEvent;
use crate::gesture::TapCounter;
use crate::navigation::{NavigationError, Navigator, Registration, Screen};
use crate::progress::ProgressRecord;
use crate::store::{ProgressBackend, ProgressStore, StoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("unknown quest `{0}`")]
    UnknownQuest(String),
    #[error("quest `{quest_id}` has no step `{step_id}`")]
    UnknownStep { quest_id: String, step_id: String },
    #[error("no difficulty tier is selected")]
    NoTierSelected,
}

/// Every mutating call performs a full read-modify-write of the record and
/// reports the events it caused.
///
/// Write failures are logged and do not interrupt play; the in-memory record
/// stays authoritative until the next successful save.
#[derive(Debug, Clone)]
pub struct QuestSession<B> {
    catalog: Arc<QuestCatalog>,
    store: ProgressStore<B>,
    record: ProgressRecord,
    navigator: Navigator,
    taps: TapCounter,
}

impl<B: ProgressBackend> QuestSession<B> {
    /// Load the stored record and start at the welcome screen.
    #[must_use]
    pub fn new(catalog: Arc<QuestCatalog>, backend: B) -> Self {
        let store = ProgressStore::new(backend);
        let record = store.load();
        Self {
            catalog,
            store,
            record,
            navigator: Navigator::new(),
            taps: TapCounter::new(),
        }
    }

    /// Session over the shipped catalog.
    #[must_use]
    pub fn with_builtin_catalog(backend: B) -> Self {
        Self::new(QuestCatalog::builtin(), backend)
    }

    #[must_use]
    pub fn catalog(&self) -> &QuestCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn shared_catalog(&self) -> Arc<QuestCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub const fn record(&self) -> &ProgressRecord {
        &self.record
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.navigator.screen()
    }

    #[must_use]
    pub const fn current_tier(&self) -> Option<Difficulty> {
        self.navigator.screen().current_tier()
    }

    #[must_use]
    pub const fn tap_count(&self) -> u8 {
        self.taps.count()
    }

    #[must_use]
    pub fn calculator(&self) -> ProgressCalculator<'_> {
        ProgressCalculator::new(&self.catalog, &self.record)
    }

    /// Welcome form contents prefilled from the stored record.
    #[must_use]
    pub fn registration(&self) -> Registration {
        Registration::new(
            self.record.player_name.clone(),
            self.record.server_ip.clone(),
            self.record.server_password.clone(),
        )
    }

    /// Accept the welcome form. Values are stored as typed.
    ///
    /// # Errors
    ///
    /// Fails when not on the welcome screen or a field is blank.
    pub fn start(
        &mut self,
        registration: Registration,
        started_at: impl Into<String>,
    ) -> Result<Vec<QuestEvent>, SessionError> {
        self.navigator.start(&registration)?;
        let Registration {
            player_name,
            server_ip,
            server_password,
        } = registration;
        self.record.player_name.clone_from(&player_name);
        self.record.server_ip = server_ip;
        self.record.server_password = server_password;
        self.record.started_at = Some(started_at.into());
        self.persist();
        log::info!("player {player_name} started the quest");
        Ok(vec![QuestEvent::Started { player_name }])
    }

    /// # Errors
    ///
    /// Fails when not on the prologue screen.
    pub fn acknowledge_prologue(&mut self) -> Result<Vec<QuestEvent>, SessionError> {
        self.navigator.acknowledge_prologue()?;
        Ok(Vec::new())
    }

    /// Open a tier. A stored chapter already at 100% but missing from the
    /// completed set is recorded here.
    ///
    /// # Errors
    ///
    /// Fails when not on the difficulty screen.
    pub fn select_tier(&mut self, difficulty: Difficulty) -> Result<Vec<QuestEvent>, SessionError> {
        self.navigator.select_tier(difficulty)?;
        let mut events = vec![QuestEvent::TierSelected { difficulty }];
        let reconciled = self.reconcile_completed_tiers();
        if !reconciled.is_empty() {
            events.extend(reconciled);
            self.persist();
        }
        Ok(events)
    }

    /// # Errors
    ///
    /// Fails when no quest list is shown.
    pub fn return_to_tiers(&mut self) -> Result<Vec<QuestEvent>, SessionError> {
        self.navigator.return_to_tiers()?;
        Ok(Vec::new())
    }

    /// Flip one step and persist.
    ///
    /// # Errors
    ///
    /// Fails when the quest or step does not exist in the catalog.
    pub fn toggle_step(
        &mut self,
        quest_id: &str,
        step_id: &str,
    ) -> Result<Vec<QuestEvent>, SessionError> {
        let catalog = Arc::clone(&self.catalog);
        let quest = catalog
            .quest(quest_id)
            .ok_or_else(|| SessionError::UnknownQuest(quest_id.to_string()))?;
        if quest.step(step_id).is_none() {
            return Err(SessionError::UnknownStep {
                quest_id: quest_id.to_string(),
                step_id: step_id.to_string(),
            });
        }

        let was_completed = self.calculator().is_quest_completed(quest);
        let checked = self.record.toggle(quest_id, step_id);
        let mut events = vec![if checked {
            QuestEvent::StepChecked {
                quest_id: quest_id.to_string(),
                step_id: step_id.to_string(),
            }
        } else {
            QuestEvent::StepUnchecked {
                quest_id: quest_id.to_string(),
                step_id: step_id.to_string(),
            }
        }];
        if !was_completed && self.calculator().is_quest_completed(quest) {
            events.push(QuestEvent::QuestCompleted {
                quest_id: quest.id.clone(),
                achievement_id: quest.achievement.id.clone(),
            });
        }
        events.extend(self.reconcile_completed_tiers());
        self.persist();
        Ok(events)
    }

    /// Register one trigger of the bulk-completion gesture on the current
    /// tier. The fifth consecutive trigger completes the whole chapter.
    ///
    /// # Errors
    ///
    /// Fails when no quest list is shown.
    pub fn trigger_bulk_gesture(&mut self) -> Result<Vec<QuestEvent>, SessionError> {
        let tier = self.current_tier().ok_or(SessionError::NoTierSelected)?;
        if self.taps.trigger() {
            Ok(self.complete_chapter(tier))
        } else {
            Ok(Vec::new())
        }
    }

    /// Check every step of every quest in `difficulty` in one update.
    pub fn complete_chapter(&mut self, difficulty: Difficulty) -> Vec<QuestEvent> {
        let catalog = Arc::clone(&self.catalog);
        let quests = catalog.quests_for(difficulty);
        let mut events = vec![QuestEvent::ChapterBulkCompleted { difficulty }];
        for quest in &quests {
            if self.calculator().is_quest_completed(quest) {
                continue;
            }
            for step in &quest.steps {
                self.record.set_checked(&quest.id, &step.id, true);
            }
            if self.calculator().is_quest_completed(quest) {
                events.push(QuestEvent::QuestCompleted {
                    quest_id: quest.id.clone(),
                    achievement_id: quest.achievement.id.clone(),
                });
            }
        }
        events.extend(self.reconcile_completed_tiers());
        self.persist();
        log::info!("chapter {difficulty} bulk-completed");
        events
    }

    /// Save the current record immediately.
    ///
    /// # Errors
    ///
    /// Returns the store error if the write fails.
    pub fn flush(&self) -> Result<(), SessionError> {
        self.store.save(&self.record)?;
        Ok(())
    }

    /// Add every fully completed tier that is not yet recorded. Tiers are
    /// never removed once recorded.
    fn reconcile_completed_tiers(&mut self) -> Vec<QuestEvent> {
        let newly: Vec<Difficulty> = Difficulty::ALL
            .into_iter()
            .filter(|tier| {
                !self.record.has_completed(*tier)
                    && self.calculator().is_chapter_fully_completed(*tier)
            })
            .collect();
        let mut events = Vec::with_capacity(newly.len() + 1);
        for tier in newly {
            if self.record.mark_completed(tier) {
                events.push(QuestEvent::ChapterCompleted { difficulty: tier });
            }
        }
        if !events.is_empty() && self.calculator().all_chapters_completed() {
            events.push(QuestEvent::AllChaptersCompleted);
        }
        events
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.record) {
            log::error!("failed to save progress: {err}");
        }
    }
}
