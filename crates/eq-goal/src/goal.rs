// goal.rs — The goal capability contract and the closed set of goal variants.
//
// Every goal carries the same immutable core (name, description, base
// points) and answers the same four questions: what does one more event
// earn, is it complete, how does it display, how does it persist.
//
// `Goal` is an enum over the three concrete types. Each concrete type
// implements `GoalBehavior` on its own and the enum forwards.

use std::fmt;

use serde::Serialize;

use crate::checklist::ChecklistGoal;
use crate::eternal::EternalGoal;
use crate::simple::SimpleGoal;

/// Fields shared by every goal variant. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalInfo {
    name: String,
    description: String,
    base_points: u32,
}

impl GoalInfo {
    pub fn new(name: impl Into<String>, description: impl Into<String>, base_points: u32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            base_points,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn base_points(&self) -> u32 {
        self.base_points
    }
}

/// Capability set every goal variant provides.
pub trait GoalBehavior {
    /// The immutable core fields.
    fn info(&self) -> &GoalInfo;

    /// Apply one occurrence of progress and return the points it earned.
    ///
    /// Never fails; returns 0 when nothing is awarded (e.g. the goal is
    /// already finished).
    fn record_event(&mut self) -> u32;

    fn is_complete(&self) -> bool;

    /// Canonical persisted line: `<TypeTag>:<field>,<field>,...`.
    fn to_record(&self) -> String;

    /// Human-readable status line, e.g. `[X] Read (a chapter a day)`.
    fn details(&self) -> String {
        let info = self.info();
        format!(
            "{} {} ({})",
            completion_marker(self.is_complete()),
            info.name(),
            info.description()
        )
    }

    fn name(&self) -> &str {
        self.info().name()
    }
}

pub(crate) fn completion_marker(complete: bool) -> &'static str {
    if complete {
        "[X]"
    } else {
        "[ ]"
    }
}

/// Which variant to construct, plus the checklist-only parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalKind {
    Simple,
    Eternal,
    Checklist { target: u32, bonus: u32 },
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalKind::Simple => write!(f, "simple"),
            GoalKind::Eternal => write!(f, "eternal"),
            GoalKind::Checklist { .. } => write!(f, "checklist"),
        }
    }
}

/// A goal of any variant.
///
/// Serializes to JSON with a `kind` tag for display purposes only; the
/// persisted format is the line encoding produced by [`GoalBehavior::to_record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Goal {
    Simple(SimpleGoal),
    Eternal(EternalGoal),
    Checklist(ChecklistGoal),
}

impl Goal {
    /// Construct a fresh goal of the requested kind.
    pub fn new(
        kind: GoalKind,
        name: impl Into<String>,
        description: impl Into<String>,
        base_points: u32,
    ) -> Self {
        match kind {
            GoalKind::Simple => Goal::Simple(SimpleGoal::new(name, description, base_points)),
            GoalKind::Eternal => Goal::Eternal(EternalGoal::new(name, description, base_points)),
            GoalKind::Checklist { target, bonus } => Goal::Checklist(ChecklistGoal::new(
                name,
                description,
                base_points,
                target,
                bonus,
            )),
        }
    }

    pub fn kind(&self) -> GoalKind {
        match self {
            Goal::Simple(_) => GoalKind::Simple,
            Goal::Eternal(_) => GoalKind::Eternal,
            Goal::Checklist(g) => GoalKind::Checklist {
                target: g.target(),
                bonus: g.bonus(),
            },
        }
    }

    fn as_behavior(&self) -> &dyn GoalBehavior {
        match self {
            Goal::Simple(g) => g,
            Goal::Eternal(g) => g,
            Goal::Checklist(g) => g,
        }
    }

    fn as_behavior_mut(&mut self) -> &mut dyn GoalBehavior {
        match self {
            Goal::Simple(g) => g,
            Goal::Eternal(g) => g,
            Goal::Checklist(g) => g,
        }
    }
}

impl GoalBehavior for Goal {
    fn info(&self) -> &GoalInfo {
        self.as_behavior().info()
    }

    fn record_event(&mut self) -> u32 {
        self.as_behavior_mut().record_event()
    }

    fn is_complete(&self) -> bool {
        self.as_behavior().is_complete()
    }

    fn to_record(&self) -> String {
        self.as_behavior().to_record()
    }

    fn details(&self) -> String {
        self.as_behavior().details()
    }
}

impl From<SimpleGoal> for Goal {
    fn from(goal: SimpleGoal) -> Self {
        Goal::Simple(goal)
    }
}

impl From<EternalGoal> for Goal {
    fn from(goal: EternalGoal) -> Self {
        Goal::Eternal(goal)
    }
}

impl From<ChecklistGoal> for Goal {
    fn from(goal: ChecklistGoal) -> Self {
        Goal::Checklist(goal)
    }
}
