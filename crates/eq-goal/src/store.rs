// store.rs — GoalStore: the ordered goal list, score, and streak.
//
// The store is a plain owned value. Whatever drives the session (the CLI)
// holds one and passes it around; nothing here is global.
//
// Persistence is a single text file in the format described in codec.rs.
// Saving always rewrites the whole file. Loading replaces the whole store,
// or leaves it untouched if the file is missing or its header is bad.

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::codec::{self, SkippedRecord, StoreHeader};
use crate::error::GoalError;
use crate::goal::{Goal, GoalBehavior, GoalKind};
use crate::streak::Streak;

/// Outcome of [`GoalStore::load`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// False when there was nothing to load (no file, or an empty one).
    pub found: bool,
    pub goal_count: usize,
    pub skipped: Vec<SkippedRecord>,
}

/// Owns every goal plus the cumulative score and streak.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GoalStore {
    goals: Vec<Goal>,
    score: u64,
    streak: Streak,
}

impl GoalStore {
    /// An empty store: no goals, zero score, no streak.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a goal and append it. Inputs are assumed to be validated
    /// by the caller (see [`crate::validate`]).
    pub fn create_goal(
        &mut self,
        kind: GoalKind,
        name: impl Into<String>,
        description: impl Into<String>,
        base_points: u32,
    ) -> &Goal {
        let goal = Goal::new(kind, name, description, base_points);
        tracing::debug!(name = goal.name(), %kind, "goal created");
        self.goals.push(goal);
        &self.goals[self.goals.len() - 1]
    }

    /// Record one event against the goal at `index` (0-based), dated today
    /// in local time. Returns the points earned.
    pub fn record_event(&mut self, index: usize) -> Result<u32, GoalError> {
        self.record_event_on(index, Local::now().date_naive())
    }

    /// Same as [`record_event`](Self::record_event) with an explicit date.
    pub fn record_event_on(&mut self, index: usize, today: NaiveDate) -> Result<u32, GoalError> {
        let len = self.goals.len();
        let goal = self
            .goals
            .get_mut(index)
            .ok_or(GoalError::IndexOutOfRange { index, len })?;

        let earned = goal.record_event();
        self.score = self.score.saturating_add(u64::from(earned));
        self.streak.touch(today);

        tracing::debug!(
            name = goal.name(),
            earned,
            score = self.score,
            streak_days = self.streak.days(),
            "event recorded"
        );
        Ok(earned)
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// One details line per goal, in store order.
    pub fn list_details(&self) -> Vec<String> {
        self.goals.iter().map(|g| g.details()).collect()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn streak_days(&self) -> u32 {
        self.streak.days()
    }

    pub fn last_event_date(&self) -> Option<NaiveDate> {
        self.streak.last_event_date()
    }

    /// The full persisted text for this store.
    pub fn to_text(&self) -> String {
        let header = StoreHeader {
            score: self.score,
            streak_days: self.streak.days(),
            last_event_date: self.streak.last_event_date(),
        };
        codec::encode_document(&header, &self.goals)
    }

    /// Replace everything with the decoded contents of `text`.
    ///
    /// Malformed goal lines are skipped and returned. A malformed header
    /// returns an error and leaves `self` unchanged.
    pub fn replace_from_text(&mut self, text: &str) -> Result<Vec<SkippedRecord>, GoalError> {
        let doc = codec::decode_document(text)?;
        self.score = doc.header.score;
        self.streak = Streak::new(doc.header.streak_days, doc.header.last_event_date);
        self.goals = doc.goals;
        Ok(doc.skipped)
    }

    /// Write the store to `path`, overwriting any previous content.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GoalError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| GoalError::IoError {
                path: parent.display().to_string(),
                source,
            })?;
        }
        fs::write(path, self.to_text()).map_err(|source| GoalError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(path = %path.display(), goals = self.goals.len(), "goals saved");
        Ok(())
    }

    /// Replace the store with what's saved at `path`.
    ///
    /// A missing or empty file is not an error: the store is left as-is and
    /// the report says `found == false`.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, GoalError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no saved goals");
            return Ok(LoadReport::default());
        }
        let text = fs::read_to_string(path).map_err(|source| GoalError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        if text.trim().is_empty() {
            return Ok(LoadReport::default());
        }

        let skipped = self.replace_from_text(&text)?;
        tracing::info!(
            path = %path.display(),
            goals = self.goals.len(),
            skipped = skipped.len(),
            "goals loaded"
        );
        Ok(LoadReport {
            found: true,
            goal_count: self.goals.len(),
            skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn sample_store() -> GoalStore {
        let mut store = GoalStore::new();
        store.create_goal(GoalKind::Simple, "Read scriptures", "Book of Mormon", 100);
        store.create_goal(GoalKind::Eternal, "Pray", "morning and night", 50);
        store.create_goal(
            GoalKind::Checklist {
                target: 3,
                bonus: 500,
            },
            "Run a marathon",
            "26.2 miles",
            1000,
        );
        store
    }

    #[test]
    fn new_store_is_empty() {
        let store = GoalStore::new();
        assert!(store.is_empty());
        assert_eq!(store.score(), 0);
        assert_eq!(store.streak_days(), 0);
        assert_eq!(store.last_event_date(), None);
    }

    #[test]
    fn create_goal_appends_in_order() {
        let store = sample_store();
        let names: Vec<&str> = store.goals().iter().map(|g| g.name()).collect();
        assert_eq!(names, vec!["Read scriptures", "Pray", "Run a marathon"]);
    }

    #[test]
    fn record_event_adds_to_score() {
        let mut store = sample_store();
        assert_eq!(store.record_event_on(0, day(1)).unwrap(), 100);
        assert_eq!(store.record_event_on(0, day(1)).unwrap(), 0);
        assert_eq!(store.record_event_on(1, day(1)).unwrap(), 50);
        assert_eq!(store.score(), 150);
    }

    #[test]
    fn checklist_awards_accumulate() {
        let mut store = sample_store();
        let awards: Vec<u32> = (0..4)
            .map(|_| store.record_event_on(2, day(1)).unwrap())
            .collect();
        assert_eq!(awards, vec![1000, 1000, 1500, 0]);
        assert_eq!(store.score(), 3500);
    }

    #[test]
    fn record_event_out_of_range_changes_nothing() {
        let mut store = sample_store();
        let before = store.clone();
        let err = store.record_event_on(3, day(1)).unwrap_err();
        assert!(matches!(
            err,
            GoalError::IndexOutOfRange { index: 3, len: 3 }
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn record_event_uses_today() {
        let mut store = sample_store();
        store.record_event(1).unwrap();
        assert_eq!(store.last_event_date(), Some(Local::now().date_naive()));
        assert_eq!(store.streak_days(), 1);
    }

    #[test]
    fn streak_follows_event_dates() {
        let mut store = sample_store();
        store.record_event_on(1, day(1)).unwrap();
        store.record_event_on(1, day(2)).unwrap();
        store.record_event_on(1, day(2)).unwrap();
        assert_eq!(store.streak_days(), 2);
        store.record_event_on(1, day(5)).unwrap();
        assert_eq!(store.streak_days(), 1);
        assert_eq!(store.last_event_date(), Some(day(5)));
    }

    #[test]
    fn zero_point_event_still_counts_for_streak() {
        let mut store = sample_store();
        store.record_event_on(0, day(1)).unwrap();
        store.record_event_on(0, day(2)).unwrap();
        assert_eq!(store.streak_days(), 2);
    }

    #[test]
    fn list_details_in_store_order() {
        let mut store = sample_store();
        store.record_event_on(0, day(1)).unwrap();
        store.record_event_on(2, day(1)).unwrap();
        assert_eq!(
            store.list_details(),
            vec![
                "[X] Read scriptures (Book of Mormon)".to_string(),
                "[ ] Pray (morning and night)".to_string(),
                "[ ] Run a marathon (26.2 miles) 1/3".to_string(),
            ]
        );
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("goals.txt");

        let mut store = sample_store();
        store.record_event_on(0, day(1)).unwrap();
        store.record_event_on(2, day(2)).unwrap();
        store.record_event_on(2, day(2)).unwrap();
        store.save(&path).unwrap();

        let mut reloaded = GoalStore::new();
        let report = reloaded.load(&path).unwrap();
        assert!(report.found);
        assert_eq!(report.goal_count, 3);
        assert!(report.skipped.is_empty());
        assert_eq!(reloaded, store);
    }

    #[test]
    fn load_missing_file_leaves_store_alone() {
        let dir = tempdir().unwrap();
        let mut store = sample_store();
        let report = store.load(dir.path().join("nope.txt")).unwrap();
        assert!(!report.found);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn load_replaces_existing_goals() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("goals.txt");
        fs::write(
            &path,
            "40\n1\n2026-10-01T00:00:00.0000000\nEternalGoal:Walk,dog,40\n",
        )
        .unwrap();

        let mut store = sample_store();
        store.load(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.score(), 40);
        assert_eq!(store.streak_days(), 1);
        assert_eq!(store.last_event_date(), Some(day(1)));
    }

    #[test]
    fn bad_header_fails_without_touching_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("goals.txt");
        fs::write(&path, "not a number\n1\n2026-10-01\n").unwrap();

        let mut store = sample_store();
        let before = store.clone();
        let result = store.load(&path);
        assert!(matches!(
            result,
            Err(GoalError::MalformedRecord { line: 1, .. })
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("goals.txt");

        sample_store().save(&path).unwrap();
        GoalStore::new().save(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "0\n0\n0001-01-01T00:00:00.0000000\n");
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("quest").join("goals.txt");
        sample_store().save(&path).unwrap();
        assert!(path.exists());
    }
}
