// eternal.rs — Goals that never complete and pay out on every event.

use serde::Serialize;

use crate::codec;
use crate::goal::{GoalBehavior, GoalInfo};

/// A goal that can be recorded forever for the same award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EternalGoal {
    #[serde(flatten)]
    info: GoalInfo,
}

impl EternalGoal {
    pub fn new(name: impl Into<String>, description: impl Into<String>, base_points: u32) -> Self {
        Self {
            info: GoalInfo::new(name, description, base_points),
        }
    }
}

impl GoalBehavior for EternalGoal {
    fn info(&self) -> &GoalInfo {
        &self.info
    }

    fn record_event(&mut self) -> u32 {
        self.info.base_points()
    }

    fn is_complete(&self) -> bool {
        false
    }

    fn to_record(&self) -> String {
        codec::encode_record(
            codec::ETERNAL_TAG,
            &[
                self.info.name().to_string(),
                self.info.description().to_string(),
                self.info.base_points().to_string(),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_event_awards_base_points() {
        let mut goal = EternalGoal::new("Pray", "morning and night", 50);
        for _ in 0..10 {
            assert_eq!(goal.record_event(), 50);
            assert!(!goal.is_complete());
        }
    }

    #[test]
    fn recording_does_not_change_state() {
        let mut goal = EternalGoal::new("Pray", "morning and night", 50);
        let before = goal.clone();
        goal.record_event();
        assert_eq!(goal, before);
    }

    #[test]
    fn record_has_three_fields() {
        let goal = EternalGoal::new("Pray", "morning and night", 50);
        assert_eq!(goal.to_record(), "EternalGoal:Pray,morning and night,50");
        assert_eq!(goal.details(), "[ ] Pray (morning and night)");
    }
}
