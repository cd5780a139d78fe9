//! Named checks run against the core with an in-memory backend
use anyhow::{Context, Result, bail, ensure};
use matrix_quest_game::{
    Difficulty, MemoryBackend, PROGRESS_KEY, ProgressRecord, ProgressStore, QuestCatalog,
    QuestEvent, QuestSession, QuestStatus, Registration, SessionError, SnowPreference,
};

type Check = fn() -> Result<()>;

#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub name: &'static str,
    check: Check,
}

impl Scenario {
    const fn new(key: &'static str, name: &'static str, check: Check) -> Self {
        Self { key, name, check }
    }

    /// # Errors
    ///
    /// Returns the first failed expectation.
    pub fn run(&self) -> Result<()> {
        (self.check)()
    }
}

const SCENARIOS: &[Scenario] = &[
    Scenario::new("quest-progress", "Partial quest progress", quest_progress),
    Scenario::new("unlock-chain", "Sequential quest unlocking", unlock_chain),
    Scenario::new("ultra-chapter", "Final chapter completion", ultra_chapter),
    Scenario::new("corrupt-record", "Malformed stored record", corrupt_record),
    Scenario::new("bulk-gesture", "Bulk chapter completion gesture", bulk_gesture),
    Scenario::new("toggle-roundtrip", "Toggling twice restores state", toggle_roundtrip),
    Scenario::new("persistence", "Progress survives reload", persistence),
    Scenario::new("navigation", "Forward-only navigation", navigation),
    Scenario::new("snow-preference", "Snow preference toggling", snow_preference),
    Scenario::new("full-campaign", "Full campaign, step by step", full_campaign),
];

#[must_use]
pub fn get_scenario(name: &str) -> Option<Scenario> {
    let key = match name.to_lowercase().as_str() {
        "a" | "progress" => "quest-progress",
        "b" | "unlock" => "unlock-chain",
        "c" | "ultra" => "ultra-chapter",
        "d" | "corrupt" => "corrupt-record",
        "e" | "bulk" => "bulk-gesture",
        "campaign" | "full" => "full-campaign",
        other => return SCENARIOS.iter().copied().find(|s| s.key == other),
    };
    SCENARIOS.iter().copied().find(|s| s.key == key)
}

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.name)).collect()
}

#[must_use]
pub fn all_scenario_keys() -> Vec<String> {
    SCENARIOS.iter().map(|s| s.key.to_string()).collect()
}

fn fresh_session() -> QuestSession<MemoryBackend> {
    QuestSession::new(QuestCatalog::builtin(), MemoryBackend::new())
}

fn registration() -> Registration {
    Registration::new("Neo", "203.0.113.10", "hunter2")
}

fn session_on(tier: Difficulty) -> Result<QuestSession<MemoryBackend>> {
    let mut session = fresh_session();
    session.start(registration(), chrono::Utc::now().to_rfc3339())?;
    session.acknowledge_prologue()?;
    session.select_tier(tier)?;
    Ok(session)
}

fn check_steps(
    session: &mut QuestSession<MemoryBackend>,
    quest_id: &str,
    count: usize,
) -> Result<Vec<QuestEvent>> {
    let steps: Vec<String> = session
        .catalog()
        .quest(quest_id)
        .with_context(|| format!("quest {quest_id} missing from catalog"))?
        .steps
        .iter()
        .take(count)
        .map(|step| step.id.clone())
        .collect();
    let mut events = Vec::new();
    for step_id in steps {
        events.extend(session.toggle_step(quest_id, &step_id)?);
    }
    Ok(events)
}

fn quest_progress() -> Result<()> {
    let mut session = session_on(Difficulty::Easy)?;
    check_steps(&mut session, "quest_1_1", 3)?;
    let catalog = session.shared_catalog();
    let quest = catalog.quest("quest_1_1").context("quest_1_1 missing")?;
    ensure!(quest.steps.len() == 6, "quest_1_1 should have 6 steps");
    let calc = session.calculator();
    let progress = calc.quest_progress(quest);
    ensure!(
        (progress - 50.0).abs() < f64::EPSILON,
        "expected 50% progress, got {progress}"
    );
    ensure!(!calc.is_quest_completed(quest), "quest should not be completed");
    Ok(())
}

fn unlock_chain() -> Result<()> {
    let mut session = session_on(Difficulty::Easy)?;
    let catalog = session.shared_catalog();
    let quests = catalog.quests_for(Difficulty::Easy);
    let first = quests.first().context("easy chapter is empty")?;
    let events = check_steps(&mut session, &first.id, first.steps.len())?;
    ensure!(
        events
            .iter()
            .any(|e| matches!(e, QuestEvent::QuestCompleted { quest_id, .. } if *quest_id == first.id)),
        "completing {} should emit QuestCompleted",
        first.id
    );
    let calc = session.calculator();
    ensure!(calc.is_quest_unlocked(1, &quests), "second quest should unlock");
    ensure!(
        calc.quest_status(2, &quests) == QuestStatus::Locked,
        "third quest should stay locked"
    );
    Ok(())
}

fn ultra_chapter() -> Result<()> {
    let mut session = session_on(Difficulty::Ultra)?;
    let catalog = session.shared_catalog();
    let mut events = Vec::new();
    for quest in catalog.quests_for(Difficulty::Ultra) {
        events.extend(check_steps(&mut session, &quest.id, quest.steps.len())?);
    }
    let calc = session.calculator();
    let progress = calc.chapter_progress(Difficulty::Ultra);
    ensure!(
        (progress - 100.0).abs() < f64::EPSILON,
        "ultra progress should be 100, got {progress}"
    );
    ensure!(
        session.record().has_completed(Difficulty::Ultra),
        "ultra should be recorded as completed"
    );
    ensure!(
        events.contains(&QuestEvent::ChapterCompleted {
            difficulty: Difficulty::Ultra
        }),
        "ChapterCompleted(ultra) should be emitted"
    );
    ensure!(
        !session.calculator().all_chapters_completed(),
        "other chapters are still open"
    );

    for tier in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
        session.complete_chapter(tier);
    }
    ensure!(
        session.calculator().all_chapters_completed(),
        "all chapters should be completed"
    );
    Ok(())
}

fn corrupt_record() -> Result<()> {
    for raw in ["{not json", "[]", "\"just a string\""] {
        let backend = MemoryBackend::new();
        backend.insert(PROGRESS_KEY, raw);
        let record = ProgressStore::new(backend).load();
        ensure!(
            record == ProgressRecord::default(),
            "malformed record {raw:?} should load as default"
        );
    }
    let record = ProgressStore::new(MemoryBackend::new()).load();
    ensure!(
        record == ProgressRecord::default(),
        "missing record should load as default"
    );
    Ok(())
}

fn bulk_gesture() -> Result<()> {
    let mut session = session_on(Difficulty::Normal)?;
    for tap in 1..=4 {
        let events = session.trigger_bulk_gesture()?;
        ensure!(events.is_empty(), "tap {tap} should not complete the chapter");
    }
    ensure!(
        session.calculator().chapter_progress(Difficulty::Normal) < 1.0,
        "chapter should still be untouched after four taps"
    );
    let events = session.trigger_bulk_gesture()?;
    ensure!(
        events.contains(&QuestEvent::ChapterBulkCompleted {
            difficulty: Difficulty::Normal
        }),
        "fifth tap should bulk-complete the chapter"
    );
    let catalog = session.shared_catalog();
    for quest in catalog.quests_for(Difficulty::Normal) {
        for step in &quest.steps {
            ensure!(
                session.record().is_checked(&quest.id, &step.id),
                "{}/{} should be checked",
                quest.id,
                step.id
            );
        }
    }
    let progress = session.calculator().chapter_progress(Difficulty::Normal);
    ensure!(
        (progress - 100.0).abs() < f64::EPSILON,
        "normal progress should be 100, got {progress}"
    );
    Ok(())
}

fn toggle_roundtrip() -> Result<()> {
    let mut session = session_on(Difficulty::Easy)?;
    check_steps(&mut session, "quest_1_1", 2)?;
    let before = session.record().clone();
    session.toggle_step("quest_1_1", "step_4")?;
    session.toggle_step("quest_1_1", "step_4")?;
    ensure!(
        session.record().checkboxes.len() >= before.checkboxes.len(),
        "toggling must not drop keys"
    );
    for (key, value) in &before.checkboxes {
        ensure!(
            session.record().checkboxes.get(key) == Some(value),
            "key {key} changed after a double toggle"
        );
    }
    ensure!(
        !session.record().is_checked("quest_1_1", "step_4"),
        "step_4 should be unchecked again"
    );
    match session.toggle_step("quest_1_1", "step_99") {
        Err(SessionError::UnknownStep { .. }) => Ok(()),
        other => bail!("unknown step should be rejected, got {other:?}"),
    }
}

fn persistence() -> Result<()> {
    let backend = MemoryBackend::new();
    let mut session = QuestSession::new(QuestCatalog::builtin(), backend.clone());
    session.start(registration(), "2026-10-18T09:30:00Z")?;
    session.acknowledge_prologue()?;
    session.select_tier(Difficulty::Hard)?;
    session.toggle_step("quest_3_1", "step_1")?;
    session.flush()?;

    let reloaded = QuestSession::new(QuestCatalog::builtin(), backend.clone());
    ensure!(
        reloaded.record() == session.record(),
        "reloaded record differs from the saved one"
    );
    let store = ProgressStore::new(backend);
    let loaded = store.load();
    store.save(&loaded)?;
    ensure!(store.load() == loaded, "save(load()) should be stable");
    Ok(())
}

fn navigation() -> Result<()> {
    let mut session = fresh_session();
    ensure!(
        session.acknowledge_prologue().is_err(),
        "prologue cannot be skipped"
    );
    ensure!(
        session
            .start(Registration::new("Neo", "  ", "pw"), "2026-10-18T09:30:00Z")
            .is_err(),
        "blank server IP should be rejected"
    );
    session.start(registration(), "2026-10-18T09:30:00Z")?;
    ensure!(
        session.select_tier(Difficulty::Easy).is_err(),
        "tier selection requires the prologue"
    );
    session.acknowledge_prologue()?;
    ensure!(
        session.trigger_bulk_gesture().is_err(),
        "gesture requires a quest list"
    );
    session.select_tier(Difficulty::Hard)?;
    ensure!(
        session.current_tier() == Some(Difficulty::Hard),
        "hard should be the current tier"
    );
    session.return_to_tiers()?;
    ensure!(session.current_tier().is_none(), "tier should be cleared");
    Ok(())
}

fn snow_preference() -> Result<()> {
    let backend = MemoryBackend::new();
    let prefs = SnowPreference::new(backend.clone());
    ensure!(prefs.enabled(), "snow should default to on");
    let event = prefs.toggle()?;
    ensure!(
        event == QuestEvent::SnowToggled { enabled: false },
        "toggle should report the new value"
    );
    ensure!(
        !SnowPreference::new(backend).enabled(),
        "snow preference should persist"
    );
    Ok(())
}

fn full_campaign() -> Result<()> {
    let mut session = fresh_session();
    session.start(registration(), chrono::Utc::now().to_rfc3339())?;
    session.acknowledge_prologue()?;
    let catalog = session.shared_catalog();
    let mut finale = false;
    for tier in Difficulty::ALL {
        session.select_tier(tier)?;
        for quest in catalog.quests_for(tier) {
            for step in &quest.steps {
                let events = session.toggle_step(&quest.id, &step.id)?;
                finale |= events.contains(&QuestEvent::AllChaptersCompleted);
            }
        }
        ensure!(
            session.record().has_completed(tier),
            "{tier} should be recorded as completed"
        );
        session.return_to_tiers()?;
    }
    ensure!(finale, "AllChaptersCompleted should be emitted once");
    let earned = session.calculator().earned_achievements().len();
    ensure!(
        earned == catalog.quests().len(),
        "expected {} achievements, got {earned}",
        catalog.quests().len()
    );
    Ok(())
}
