// session.rs — One CLI session: the store, its file, and the event journal.
//
// Commands never touch GoalStore persistence or the journal directly; they
// go through `Session` so every save/load/record emits the matching event.

use anyhow::bail;
use eq_goal::validate::validate_goal;
use eq_goal::{
    EventDispatcher, Goal, GoalKind, GoalStore, LoadReport, LogSink, QuestConfig, QuestEvent,
};

pub struct Session {
    config: QuestConfig,
    store: GoalStore,
    dispatcher: EventDispatcher,
}

impl Session {
    /// Start a session with an empty store. Call [`load`](Self::load) to
    /// pick up saved goals.
    pub fn new(config: &QuestConfig) -> Self {
        let mut dispatcher = EventDispatcher::new();
        if let Some(path) = &config.events_log {
            dispatcher.add_sink(Box::new(LogSink::new(path)));
        }
        Self {
            config: config.clone(),
            store: GoalStore::new(),
            dispatcher,
        }
    }

    /// New session with the saved goals already loaded.
    pub fn open(config: &QuestConfig) -> anyhow::Result<Self> {
        let mut session = Self::new(config);
        session.load()?;
        Ok(session)
    }

    pub fn store(&self) -> &GoalStore {
        &self.store
    }

    /// Replace the store from the goals file. Skipped records are reported
    /// on stderr; a missing file is silently fine.
    pub fn load(&mut self) -> anyhow::Result<LoadReport> {
        let path = &self.config.goals_file;
        let report = self.store.load(path)?;
        for skipped in &report.skipped {
            eprintln!(
                "warning: skipped line {} of {}: {}",
                skipped.line,
                path.display(),
                skipped.reason
            );
        }
        if report.found {
            self.dispatcher.dispatch(&QuestEvent::goals_loaded(
                path,
                report.goal_count,
                report.skipped.len(),
            ));
        }
        Ok(report)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let path = &self.config.goals_file;
        self.store.save(path)?;
        self.dispatcher
            .dispatch(&QuestEvent::goals_saved(path, self.store.len()));
        Ok(())
    }

    /// Validate and append a goal.
    pub fn create_goal(
        &mut self,
        kind: GoalKind,
        name: &str,
        description: &str,
        base_points: u32,
    ) -> anyhow::Result<&Goal> {
        let name = name.trim();
        let description = description.trim();
        validate_goal(&kind, name, description)?;
        let goal = self.store.create_goal(kind, name, description, base_points);
        self.dispatcher.dispatch(&QuestEvent::goal_created(goal));
        Ok(goal)
    }

    /// Record an event on the goal with 1-based `number`. Returns points earned.
    pub fn record(&mut self, number: usize) -> anyhow::Result<u32> {
        let len = self.store.len();
        if len == 0 {
            bail!("there are no goals yet; create one first");
        }
        if number == 0 || number > len {
            bail!("goal number must be between 1 and {}", len);
        }

        let index = number - 1;
        let earned = self.store.record_event(index)?;
        self.dispatcher.dispatch(&QuestEvent::event_recorded(
            &self.store.goals()[index],
            earned,
            self.store.score(),
            self.store.streak_days(),
        ));
        Ok(earned)
    }
}
