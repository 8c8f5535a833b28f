//! # eq-goal
//!
//! Goal model, scoring, streaks, and persistence for Eternal Quest.
//!
//! Players define goals, record events against them, and collect points.
//! Three kinds of goal exist, each with its own completion rule:
//!
//! - [`SimpleGoal`] — done after one event
//! - [`EternalGoal`] — never done, pays on every event
//! - [`ChecklistGoal`] — done after `target` events, with a bonus on the last one
//!
//! ## Key components
//!
//! - [`GoalBehavior`] — the capability set every goal implements
//! - [`Goal`] — the closed enum over the three variants
//! - [`GoalStore`] — ordered goals, cumulative score, day streak, save/load
//! - [`codec`] — the line-oriented text format used on disk
//! - [`QuestEvent`] / [`EventDispatcher`] — activity notifications for front ends
//!
//! ## Quick Example
//!
//! ```rust
//! use eq_goal::{GoalKind, GoalStore};
//!
//! let mut store = GoalStore::new();
//! store.create_goal(
//!     GoalKind::Checklist { target: 3, bonus: 500 },
//!     "Run a marathon",
//!     "26.2 miles",
//!     1000,
//! );
//! let earned: Vec<u32> = (0..3).map(|_| store.record_event(0).unwrap()).collect();
//! assert_eq!(earned, vec![1000, 1000, 1500]);
//! assert_eq!(store.score(), 3500);
//! ```

pub mod checklist;
pub mod codec;
pub mod config;
pub mod error;
pub mod eternal;
pub mod events;
pub mod goal;
pub mod simple;
pub mod store;
pub mod streak;
pub mod validate;

pub use checklist::ChecklistGoal;
pub use codec::SkippedRecord;
pub use config::{QuestConfig, QuestSettings};
pub use error::GoalError;
pub use eternal::EternalGoal;
pub use events::{EventDispatcher, LogSink, NotificationSink, QuestEvent};
pub use goal::{Goal, GoalBehavior, GoalInfo, GoalKind};
pub use simple::SimpleGoal;
pub use store::{GoalStore, LoadReport};
pub use streak::Streak;
