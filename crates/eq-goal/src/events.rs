// events.rs — Activity events and notification dispatch.
//
// The store itself stays silent. Front ends emit a `QuestEvent` after each
// action that matters to the player (goal created, points earned, saved,
// loaded) and hand it to an `EventDispatcher`, which fans it out to sinks.
//
// The journal sink only ever appends. Nothing reads it back into a store.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GoalError;
use crate::goal::{Goal, GoalBehavior};

/// Events emitted at points the player cares about.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum QuestEvent {
    /// A goal was added to the store.
    GoalCreated {
        name: String,
        kind: String,
        timestamp: DateTime<Utc>,
    },

    /// An event was recorded against a goal.
    EventRecorded {
        name: String,
        points: u32,
        score: u64,
        streak_days: u32,
        timestamp: DateTime<Utc>,
    },

    /// The store was written to disk.
    GoalsSaved {
        path: String,
        goal_count: usize,
        timestamp: DateTime<Utc>,
    },

    /// The store was replaced from disk.
    GoalsLoaded {
        path: String,
        goal_count: usize,
        skipped: usize,
        timestamp: DateTime<Utc>,
    },
}

impl QuestEvent {
    /// Get the event type name as a string.
    pub fn event_type(&self) -> &str {
        match self {
            QuestEvent::GoalCreated { .. } => "goal_created",
            QuestEvent::EventRecorded { .. } => "event_recorded",
            QuestEvent::GoalsSaved { .. } => "goals_saved",
            QuestEvent::GoalsLoaded { .. } => "goals_loaded",
        }
    }

    pub fn goal_created(goal: &Goal) -> Self {
        QuestEvent::GoalCreated {
            name: goal.name().to_string(),
            kind: goal.kind().to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn event_recorded(goal: &Goal, points: u32, score: u64, streak_days: u32) -> Self {
        QuestEvent::EventRecorded {
            name: goal.name().to_string(),
            points,
            score,
            streak_days,
            timestamp: Utc::now(),
        }
    }

    pub fn goals_saved(path: &Path, goal_count: usize) -> Self {
        QuestEvent::GoalsSaved {
            path: path.display().to_string(),
            goal_count,
            timestamp: Utc::now(),
        }
    }

    pub fn goals_loaded(path: &Path, goal_count: usize, skipped: usize) -> Self {
        QuestEvent::GoalsLoaded {
            path: path.display().to_string(),
            goal_count,
            skipped,
            timestamp: Utc::now(),
        }
    }
}

/// Receives quest events.
pub trait NotificationSink {
    /// Handle an event. Errors are logged by the dispatcher, not propagated.
    fn send(&self, event: &QuestEvent) -> Result<(), GoalError>;
}

/// Appends events as JSONL to a journal file.
pub struct LogSink {
    path: PathBuf,
}

impl LogSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl NotificationSink for LogSink {
    fn send(&self, event: &QuestEvent) -> Result<(), GoalError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| GoalError::IoError {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| GoalError::IoError {
                path: self.path.display().to_string(),
                source,
            })?;

        let json = serde_json::to_string(event)?;
        writeln!(file, "{}", json).map_err(|source| GoalError::IoError {
            path: self.path.display().to_string(),
            source,
        })?;

        Ok(())
    }
}

/// Dispatches events to every registered sink.
///
/// A failing sink is logged via tracing and skipped; the rest still
/// receive the event.
pub struct EventDispatcher {
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    pub fn dispatch(&self, event: &QuestEvent) {
        for sink in &self.sinks {
            if let Err(e) = sink.send(event) {
                tracing::warn!(
                    event_type = event.event_type(),
                    "notification sink error: {}",
                    e
                );
            }
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
