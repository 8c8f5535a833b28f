//! # eq-cli
//!
//! Command-line interface for Eternal Quest.
//!
//! - `eq goal create/list/record` — manage goals and record progress
//! - `eq status` — show score and current streak
//! - `eq menu` — interactive menu loop

mod commands;
mod session;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eq_goal::QuestConfig;
use tracing_subscriber::EnvFilter;

/// Eternal Quest — set goals, record progress, earn points.
#[derive(Parser)]
#[command(name = "eq", version, about)]
struct Cli {
    /// Project root directory (defaults to current directory).
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    /// Log debug output to stderr.
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create, list, and record goals.
    Goal {
        #[command(subcommand)]
        command: commands::goal::GoalCommands,
    },
    /// Show score and streak.
    Status,
    /// Interactive menu.
    Menu,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they don't mix with command output.
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let project_root = cli.project_root.canonicalize().unwrap_or(cli.project_root);
    let config = QuestConfig::for_project(&project_root)?;
    tracing::debug!(goals_file = %config.goals_file.display(), "config resolved");

    match &cli.command {
        Commands::Goal { command } => commands::goal::execute(command, &config),
        Commands::Status => commands::status::execute(&config),
        Commands::Menu => commands::menu::execute(&config),
    }
}

/// `--verbose` wins; otherwise a non-empty RUST_LOG is used as-is, and
/// without one only warnings from our own crates are shown.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    match rust_log {
        _ if verbose => EnvFilter::new("eq_goal=debug,eq=debug"),
        Some(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new("eq_goal=warn,eq=warn"),
    }
}
