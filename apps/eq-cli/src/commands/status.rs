// status.rs — `eq status`: score and streak.

use std::io::Write;

use eq_goal::{GoalStore, QuestConfig};

use crate::session::Session;

pub fn execute(config: &QuestConfig) -> anyhow::Result<()> {
    let session = Session::open(config)?;
    write_status(session.store(), &mut std::io::stdout())
}

pub fn write_status(store: &GoalStore, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Your score: {}", store.score())?;
    writeln!(out, "Current streak: {} day(s)", store.streak_days())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use eq_goal::GoalKind;

    #[test]
    fn prints_score_and_streak() {
        let mut store = GoalStore::new();
        store.create_goal(GoalKind::Eternal, "Pray", "daily", 50);
        let day = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        store.record_event_on(0, day).unwrap();
        store.record_event_on(0, day.succ_opt().unwrap()).unwrap();

        let mut out = Vec::new();
        write_status(&store, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Your score: 100\nCurrent streak: 2 day(s)\n"
        );
    }
}
