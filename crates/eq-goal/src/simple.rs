// simple.rs — One-shot goals: the first event completes them.

use serde::Serialize;

use crate::codec;
use crate::goal::{GoalBehavior, GoalInfo};

/// A goal that is done after a single recorded event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleGoal {
    #[serde(flatten)]
    info: GoalInfo,
    is_complete: bool,
}

impl SimpleGoal {
    pub fn new(name: impl Into<String>, description: impl Into<String>, base_points: u32) -> Self {
        Self {
            info: GoalInfo::new(name, description, base_points),
            is_complete: false,
        }
    }
}

impl GoalBehavior for SimpleGoal {
    fn info(&self) -> &GoalInfo {
        &self.info
    }

    fn record_event(&mut self) -> u32 {
        if self.is_complete {
            return 0;
        }
        self.is_complete = true;
        self.info.base_points()
    }

    fn is_complete(&self) -> bool {
        self.is_complete
    }

    fn to_record(&self) -> String {
        codec::encode_record(
            codec::SIMPLE_TAG,
            &[
                self.info.name().to_string(),
                self.info.description().to_string(),
                self.info.base_points().to_string(),
                codec::format_flag(self.is_complete).to_string(),
            ],
        )
    }
}
