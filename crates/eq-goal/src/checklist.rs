// checklist.rs — Bounded repeat goals with a bonus on the final event.
//
// Progress only moves through `record_event`. Loading replays events
// rather than setting `amount_completed` directly.

use serde::Serialize;

use crate::codec;
use crate::goal::{completion_marker, GoalBehavior, GoalInfo};

/// A goal that completes after `target` events and pays `bonus` extra on
/// the event that reaches the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistGoal {
    #[serde(flatten)]
    info: GoalInfo,
    amount_completed: u32,
    target: u32,
    bonus: u32,
}

impl ChecklistGoal {
    /// `target` must be greater than zero; callers validate this at the
    /// creation boundary.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        base_points: u32,
        target: u32,
        bonus: u32,
    ) -> Self {
        Self {
            info: GoalInfo::new(name, description, base_points),
            amount_completed: 0,
            target,
            bonus,
        }
    }

    pub fn amount_completed(&self) -> u32 {
        self.amount_completed
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn bonus(&self) -> u32 {
        self.bonus
    }
}

impl GoalBehavior for ChecklistGoal {
    fn info(&self) -> &GoalInfo {
        &self.info
    }

    fn record_event(&mut self) -> u32 {
        if self.amount_completed >= self.target {
            return 0;
        }
        self.amount_completed += 1;
        if self.amount_completed == self.target {
            self.info.base_points().saturating_add(self.bonus)
        } else {
            self.info.base_points()
        }
    }

    fn is_complete(&self) -> bool {
        self.amount_completed >= self.target
    }

    fn to_record(&self) -> String {
        codec::encode_record(
            codec::CHECKLIST_TAG,
            &[
                self.info.name().to_string(),
                self.info.description().to_string(),
                self.info.base_points().to_string(),
                self.amount_completed.to_string(),
                self.target.to_string(),
                self.bonus.to_string(),
            ],
        )
    }

    fn details(&self) -> String {
        format!(
            "{} {} ({}) {}/{}",
            completion_marker(self.is_complete()),
            self.info.name(),
            self.info.description(),
            self.amount_completed,
            self.target
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marathon() -> ChecklistGoal {
        ChecklistGoal::new("Run a marathon", "26.2 miles", 1000, 3, 500)
    }

    #[test]
    fn bonus_paid_on_target_event() {
        let mut goal = marathon();
        let awards: Vec<u32> = (0..3).map(|_| goal.record_event()).collect();
        assert_eq!(awards, vec![1000, 1000, 1500]);
    }

    #[test]
    fn events_after_target_award_nothing() {
        let mut goal = marathon();
        for _ in 0..3 {
            goal.record_event();
        }
        assert_eq!(goal.record_event(), 0);
        assert_eq!(goal.record_event(), 0);
        assert_eq!(goal.amount_completed(), 3);
    }

    #[test]
    fn completes_exactly_at_target() {
        let mut goal = marathon();
        assert!(!goal.is_complete());
        goal.record_event();
        goal.record_event();
        assert!(!goal.is_complete());
        goal.record_event();
        assert!(goal.is_complete());
    }

    #[test]
    fn details_show_progress() {
        let mut goal = marathon();
        goal.record_event();
        goal.record_event();
        assert_eq!(goal.details(), "[ ] Run a marathon (26.2 miles) 2/3");
        goal.record_event();
        assert_eq!(goal.details(), "[X] Run a marathon (26.2 miles) 3/3");
    }

    #[test]
    fn single_step_checklist_pays_bonus_immediately() {
        let mut goal = ChecklistGoal::new("Donate blood", "once", 200, 1, 300);
        assert_eq!(goal.record_event(), 500);
        assert!(goal.is_complete());
    }

    #[test]
    fn record_lists_progress_before_target() {
        let mut goal = marathon();
        goal.record_event();
        assert_eq!(
            goal.to_record(),
            "ChecklistGoal:Run a marathon,26.2 miles,1000,1,3,500"
        );
    }
}
