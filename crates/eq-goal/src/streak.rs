// streak.rs — Consecutive-day engagement tracking.

use chrono::NaiveDate;

/// Count of consecutive calendar days with at least one recorded event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Streak {
    days: u32,
    last_event_date: Option<NaiveDate>,
}

impl Streak {
    pub fn new(days: u32, last_event_date: Option<NaiveDate>) -> Self {
        Self {
            days,
            last_event_date,
        }
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// `None` until the first event is recorded.
    pub fn last_event_date(&self) -> Option<NaiveDate> {
        self.last_event_date
    }

    /// Register an event on `today`.
    ///
    /// Same day: unchanged. Day after the last event: +1. Anything else
    /// (gap, first event ever, or a clock that went backwards): reset to 1.
    pub fn touch(&mut self, today: NaiveDate) {
        match self.last_event_date {
            Some(last) if last == today => {}
            Some(last) if last.succ_opt() == Some(today) => {
                self.days = self.days.saturating_add(1);
            }
            _ => self.days = 1,
        }
        self.last_event_date = Some(today);
    }
}
