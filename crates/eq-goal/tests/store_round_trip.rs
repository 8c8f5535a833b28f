// store_round_trip.rs — Save/load behavior of GoalStore across sessions.
//
// Each test simulates two or more sessions: build up state, save it, then
// load into a fresh store and check that nothing about the goals, score,
// or streak changed meaning on the way through the file.

use std::fs;

use chrono::NaiveDate;
use eq_goal::{Goal, GoalBehavior, GoalKind, GoalStore};
use tempfile::TempDir;

fn day(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, m, d).unwrap()
}

fn reload(dir: &TempDir, store: &GoalStore) -> GoalStore {
    let path = dir.path().join("goals.txt");
    store.save(&path).unwrap();
    let mut fresh = GoalStore::new();
    let report = fresh.load(&path).unwrap();
    assert!(report.found);
    assert!(report.skipped.is_empty());
    fresh
}

#[test]
fn empty_store_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = GoalStore::new();
    let reloaded = reload(&dir, &store);
    assert_eq!(reloaded, store);
    assert_eq!(reloaded.last_event_date(), None);
}

#[test]
fn every_variant_at_every_stage_round_trips() {
    let dir = TempDir::new().unwrap();
    let mut store = GoalStore::new();
    store.create_goal(GoalKind::Simple, "Hike", "the Y", 300);
    store.create_goal(GoalKind::Simple, "Serve", "a mission", 5000);
    store.create_goal(GoalKind::Eternal, "Pray", "morning and night", 50);
    for target in 1..=3 {
        store.create_goal(
            GoalKind::Checklist { target, bonus: 100 },
            format!("Temple x{}", target),
            "visits",
            80,
        );
    }

    // Finish one simple goal, partially and fully progress the checklists.
    store.record_event_on(0, day(10, 1)).unwrap();
    store.record_event_on(2, day(10, 1)).unwrap();
    store.record_event_on(4, day(10, 2)).unwrap();
    store.record_event_on(5, day(10, 2)).unwrap();
    store.record_event_on(5, day(10, 2)).unwrap();
    store.record_event_on(5, day(10, 2)).unwrap();

    let reloaded = reload(&dir, &store);
    assert_eq!(reloaded, store);
    assert_eq!(reloaded.score(), store.score());
    assert_eq!(reloaded.streak_days(), 2);
    assert_eq!(reloaded.last_event_date(), Some(day(10, 2)));
    assert_eq!(reloaded.list_details(), store.list_details());
}

#[test]
fn reloaded_goals_behave_like_live_ones() {
    let dir = TempDir::new().unwrap();
    let mut live = GoalStore::new();
    live.create_goal(
        GoalKind::Checklist {
            target: 3,
            bonus: 500,
        },
        "Run a marathon",
        "26.2 miles",
        1000,
    );
    live.create_goal(GoalKind::Simple, "Read scriptures", "Alma 32", 100);
    live.record_event_on(0, day(10, 5)).unwrap();
    live.record_event_on(0, day(10, 5)).unwrap();
    live.record_event_on(1, day(10, 5)).unwrap();

    let mut reloaded = reload(&dir, &live);
    for (i, d) in [(0, 6), (0, 7), (1, 7)] {
        assert_eq!(
            reloaded.record_event_on(i, day(10, d)).unwrap(),
            live.record_event_on(i, day(10, d)).unwrap()
        );
    }
    assert_eq!(reloaded, live);
    assert_eq!(reloaded.score(), 1000 + 1000 + 100 + 1500);
}

#[test]
fn streak_continues_across_sessions() {
    let dir = TempDir::new().unwrap();
    let mut store = GoalStore::new();
    store.create_goal(GoalKind::Eternal, "Journal", "one line a day", 10);
    store.record_event_on(0, day(10, 16)).unwrap();
    store.record_event_on(0, day(10, 17)).unwrap();

    let mut next_session = reload(&dir, &store);
    next_session.record_event_on(0, day(10, 18)).unwrap();
    assert_eq!(next_session.streak_days(), 3);

    let mut after_gap = reload(&dir, &next_session);
    after_gap.record_event_on(0, day(10, 21)).unwrap();
    assert_eq!(after_gap.streak_days(), 1);
}

#[test]
fn injected_bad_lines_are_skipped_without_losing_the_rest() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("goals.txt");
    fs::write(
        &path,
        "1600\n2\n2026-10-17T00:00:00.0000000\n\
         SimpleGoal:Hike,the Y,300,True\n\
         StretchGoal:Yoga,daily,10\n\
         ChecklistGoal:Run,desc,1000,two,3,500\n\
         ChecklistGoal:Run,desc,1000,2,3,500\n",
    )
    .unwrap();

    let mut store = GoalStore::new();
    let report = store.load(&path).unwrap();
    assert_eq!(report.goal_count, 2);
    let skipped_lines: Vec<usize> = report.skipped.iter().map(|s| s.line).collect();
    assert_eq!(skipped_lines, vec![5, 6]);

    assert_eq!(store.score(), 1600);
    assert_eq!(store.streak_days(), 2);
    assert!(matches!(store.goals()[0], Goal::Simple(_)));
    assert_eq!(store.goals()[1].details(), "[ ] Run (desc) 2/3");
}

#[test]
fn file_from_original_format_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("goals.txt");
    fs::write(
        &path,
        "0\r\n0\r\n0001-01-01T00:00:00.0000000\r\nEternalGoal:Pray,daily,50\r\n",
    )
    .unwrap();

    let mut store = GoalStore::new();
    store.load(&path).unwrap();
    assert_eq!(store.last_event_date(), None);
    assert_eq!(store.goals()[0].to_record(), "EternalGoal:Pray,daily,50");
}
