// config.rs — Where Eternal Quest keeps its files.
//
// `QuestConfig::for_project()` resolves the on-disk layout for a project
// root. An optional `.quest/config.toml` can override the defaults:
//
//   [storage]
//   goals_file = "goals.txt"
//
//   [journal]
//   enabled = true
//   path = ".quest/events.jsonl"

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GoalError;

/// Config file location relative to the project root.
pub const CONFIG_FILE: &str = ".quest/config.toml";

/// Contents of `.quest/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestSettings {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub journal: JournalSettings,
}

/// Save file configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Path of the goals file, relative to the project root unless absolute.
    #[serde(default = "default_goals_file")]
    pub goals_file: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            goals_file: default_goals_file(),
        }
    }
}

/// Activity journal configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalSettings {
    #[serde(default = "default_journal_enabled")]
    pub enabled: bool,

    #[serde(default = "default_journal_path")]
    pub path: PathBuf,
}

impl Default for JournalSettings {
    fn default() -> Self {
        Self {
            enabled: default_journal_enabled(),
            path: default_journal_path(),
        }
    }
}

// Serde default functions
fn default_goals_file() -> PathBuf {
    PathBuf::from("goals.txt")
}

fn default_journal_enabled() -> bool {
    true
}

fn default_journal_path() -> PathBuf {
    PathBuf::from(".quest/events.jsonl")
}

impl QuestSettings {
    /// Parse settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, GoalError> {
        let content = std::fs::read_to_string(path).map_err(|source| GoalError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| GoalError::ConfigError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Load settings if the file exists, defaults otherwise. A file that
    /// exists but doesn't parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, GoalError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Resolved file locations for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestConfig {
    pub goals_file: PathBuf,
    /// `None` when the journal is disabled.
    pub events_log: Option<PathBuf>,
}

impl QuestConfig {
    /// Resolve the layout for `project_root`, reading `.quest/config.toml`
    /// if present.
    pub fn for_project(project_root: impl AsRef<Path>) -> Result<Self, GoalError> {
        let root = project_root.as_ref();
        let settings = QuestSettings::load_or_default(&root.join(CONFIG_FILE))?;
        Ok(Self::from_settings(root, &settings))
    }

    /// Relative paths in `settings` are joined onto `project_root`.
    pub fn from_settings(project_root: &Path, settings: &QuestSettings) -> Self {
        let goals_file = project_root.join(&settings.storage.goals_file);
        let events_log = settings
            .journal
            .enabled
            .then(|| project_root.join(&settings.journal.path));
        Self {
            goals_file,
            events_log,
        }
    }
}
