use matrix_quest_game::{
    Difficulty, MemoryBackend, PROGRESS_KEY, ProgressCalculator, ProgressRecord, ProgressStore,
    QuestCatalog, QuestEvent, QuestSession, QuestStatus, Registration, Screen, checkbox_key,
};

const NOW: &str = "2026-10-18T09:30:00Z";

fn session_on(tier: Difficulty) -> QuestSession<MemoryBackend> {
    let mut session = QuestSession::with_builtin_catalog(MemoryBackend::new());
    session
        .start(Registration::new("Neo", "203.0.113.5", "redpill"), NOW)
        .unwrap();
    session.acknowledge_prologue().unwrap();
    session.select_tier(tier).unwrap();
    session
}

fn check_all(session: &mut QuestSession<MemoryBackend>, quest_id: &str) -> Vec<QuestEvent> {
    let quest = session.catalog().quest(quest_id).unwrap().clone();
    quest
        .steps
        .iter()
        .flat_map(|step| session.toggle_step(&quest.id, &step.id).unwrap())
        .collect()
}

#[test]
fn half_checked_six_step_quest_is_fifty_percent() {
    let mut session = session_on(Difficulty::Easy);
    let quest = session.catalog().quest("quest_1_1").unwrap().clone();
    assert_eq!(quest.steps.len(), 6);
    for step in quest.steps.iter().take(3) {
        session.toggle_step(&quest.id, &step.id).unwrap();
    }
    let calc = session.calculator();
    assert!((calc.quest_progress(&quest) - 50.0).abs() < f64::EPSILON);
    assert!(!calc.is_quest_completed(&quest));
}

#[test]
fn completing_first_quest_unlocks_only_the_second() {
    let mut session = session_on(Difficulty::Easy);
    let first = session.catalog().quests_for(Difficulty::Easy)[0].id.clone();
    check_all(&mut session, &first);

    let calc = session.calculator();
    let quests = session.catalog().quests_for(Difficulty::Easy);
    assert!(calc.is_quest_unlocked(0, &quests));
    assert!(calc.is_quest_unlocked(1, &quests));
    assert!(!calc.is_quest_unlocked(2, &quests));
    assert_eq!(calc.quest_status(0, &quests), QuestStatus::Completed);
    assert_eq!(calc.quest_status(1, &quests), QuestStatus::Available);
    assert_eq!(calc.quest_status(2, &quests), QuestStatus::Locked);
}

#[test]
fn checking_every_ultra_step_completes_the_campaign() {
    let mut session = session_on(Difficulty::Ultra);
    for tier in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
        session.complete_chapter(tier);
    }
    let ids: Vec<String> = session
        .catalog()
        .quests_for(Difficulty::Ultra)
        .iter()
        .map(|quest| quest.id.clone())
        .collect();
    let mut events = Vec::new();
    for id in &ids {
        events.extend(check_all(&mut session, id));
    }

    let calc = session.calculator();
    assert!((calc.chapter_progress(Difficulty::Ultra) - 100.0).abs() < f64::EPSILON);
    assert!(calc.is_chapter_fully_completed(Difficulty::Ultra));
    assert!(session.record().has_completed(Difficulty::Ultra));
    assert!(calc.all_chapters_completed());
    assert!(events.contains(&QuestEvent::ChapterCompleted {
        difficulty: Difficulty::Ultra
    }));
    assert_eq!(events.last(), Some(&QuestEvent::AllChaptersCompleted));
}

#[test]
fn malformed_or_missing_record_loads_defaults() {
    let backend = MemoryBackend::new();
    let store = ProgressStore::new(backend.clone());
    assert_eq!(store.load(), ProgressRecord::default());

    for raw in ["", "null", "[1,2,3]", "{\"checkboxes\": 7}", "<html>"] {
        backend.insert(PROGRESS_KEY, raw);
        assert_eq!(store.load(), ProgressRecord::default(), "input {raw:?}");
    }

    let session = QuestSession::with_builtin_catalog(backend);
    assert_eq!(session.screen(), Screen::Welcome);
    assert_eq!(session.record(), &ProgressRecord::default());
}

#[test]
fn bulk_gesture_completes_normal_chapter_at_once() {
    let mut session = session_on(Difficulty::Normal);
    for _ in 0..4 {
        session.trigger_bulk_gesture().unwrap();
    }
    assert!(session.calculator().chapter_progress(Difficulty::Normal) < 100.0);
    let events = session.trigger_bulk_gesture().unwrap();
    assert!(events.contains(&QuestEvent::ChapterBulkCompleted {
        difficulty: Difficulty::Normal
    }));

    let catalog = QuestCatalog::builtin();
    for quest in catalog.quests_for(Difficulty::Normal) {
        for step in &quest.steps {
            let key = checkbox_key(&quest.id, &step.id);
            assert_eq!(session.record().checkboxes.get(&key), Some(&true), "{key}");
        }
    }
    let calc = session.calculator();
    assert!((calc.chapter_progress(Difficulty::Normal) - 100.0).abs() < f64::EPSILON);
    assert!(session.record().has_completed(Difficulty::Normal));
    assert!(calc.chapter_progress(Difficulty::Easy).abs() < f64::EPSILON);
}

#[test]
fn progress_survives_a_reload() {
    let backend = MemoryBackend::new();
    let mut session = QuestSession::with_builtin_catalog(backend.clone());
    session
        .start(Registration::new("Switch", "192.0.2.44", "hunter2"), NOW)
        .unwrap();
    session.acknowledge_prologue().unwrap();
    session.select_tier(Difficulty::Hard).unwrap();
    session.toggle_step("quest_3_1", "step_2").unwrap();

    let reloaded = ProgressStore::new(backend).load();
    assert_eq!(&reloaded, session.record());
    assert!(reloaded.is_checked("quest_3_1", "step_2"));
    assert_eq!(reloaded.started_at.as_deref(), Some(NOW));
}

#[test]
fn quest_progress_stays_in_range_for_every_prefix() {
    let catalog = QuestCatalog::builtin();
    for quest in catalog.quests() {
        let mut record = ProgressRecord::new();
        for (checked, step) in quest.steps.iter().enumerate() {
            let calc = ProgressCalculator::new(&catalog, &record);
            #[allow(clippy::cast_precision_loss)]
            let expected = checked as f64 / quest.steps.len() as f64 * 100.0;
            let actual = calc.quest_progress(quest);
            assert!((0.0..=100.0).contains(&actual));
            assert!((actual - expected).abs() < 1e-9);
            assert!(!calc.is_quest_completed(quest));
            record.set_checked(&quest.id, &step.id, true);
        }
        let calc = ProgressCalculator::new(&catalog, &record);
        assert!((calc.quest_progress(quest) - 100.0).abs() < f64::EPSILON);
        assert!(calc.is_quest_completed(quest));
    }
}
