// goal.rs — Goal subcommands: create, list, record.

use std::io::Write;

use anyhow::anyhow;
use clap::{Subcommand, ValueEnum};
use eq_goal::{GoalKind, GoalStore, QuestConfig};

use crate::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Done after one event.
    Simple,
    /// Never done; pays on every event.
    Eternal,
    /// Done after --target events, with --bonus on the last one.
    Checklist,
}

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a new goal and save it.
    Create {
        /// Kind of goal.
        #[arg(value_enum)]
        kind: KindArg,
        /// Short name (e.g., "Run a marathon").
        #[arg(long)]
        name: String,
        /// Description (e.g., "26.2 miles").
        #[arg(long)]
        description: String,
        /// Points awarded per event.
        #[arg(long)]
        points: u32,
        /// Events needed to complete a checklist goal.
        #[arg(long)]
        target: Option<u32>,
        /// Extra points on the event that completes a checklist goal.
        #[arg(long, default_value_t = 0)]
        bonus: u32,
    },
    /// List all goals with their status.
    List {
        /// Print goals as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Record an event on a goal and save.
    Record {
        /// Goal number as shown by `eq goal list` (1-based).
        number: usize,
    },
}

pub fn execute(cmd: &GoalCommands, config: &QuestConfig) -> anyhow::Result<()> {
    let mut session = Session::open(config)?;
    let mut out = std::io::stdout();

    match cmd {
        GoalCommands::Create {
            kind,
            name,
            description,
            points,
            target,
            bonus,
        } => {
            let kind = resolve_kind(*kind, *target, *bonus)?;
            session.create_goal(kind, name, description, *points)?;
            session.save()?;
            writeln!(out, "Goal created.")?;
        }
        GoalCommands::List { json } => {
            if *json {
                let json = serde_json::to_string_pretty(session.store().goals())?;
                writeln!(out, "{}", json)?;
            } else {
                write_list(session.store(), &mut out)?;
            }
        }
        GoalCommands::Record { number } => {
            let earned = session.record(*number)?;
            session.save()?;
            writeln!(out, "You earned {} points!", earned)?;
        }
    }
    Ok(())
}

/// Turn CLI flags into a goal kind. `--target` is required for checklists
/// and ignored otherwise.
pub fn resolve_kind(kind: KindArg, target: Option<u32>, bonus: u32) -> anyhow::Result<GoalKind> {
    Ok(match kind {
        KindArg::Simple => GoalKind::Simple,
        KindArg::Eternal => GoalKind::Eternal,
        KindArg::Checklist => {
            let target = target.ok_or_else(|| anyhow!("checklist goals need --target"))?;
            GoalKind::Checklist { target, bonus }
        }
    })
}

/// Numbered details lines, 1-based to match `eq goal record`.
pub fn write_list(store: &GoalStore, out: &mut impl Write) -> anyhow::Result<()> {
    if store.is_empty() {
        writeln!(out, "No goals yet.")?;
        return Ok(());
    }
    for (i, details) in store.list_details().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, details)?;
    }
    Ok(())
}
