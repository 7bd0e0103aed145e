//! Search and maze catalogue configuration loaded from YAML.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Which goal the priority heuristic measures against
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicMode {
    /// Manhattan distance to the first goal of the set
    #[default]
    ReferenceGoal,
    /// Smallest Manhattan distance over every goal
    NearestGoal,
}

/// Per-run search limits
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Give up after expanding this many nodes
    pub max_expansions: Option<usize>,
    /// Give up after this many milliseconds of wall-clock time
    pub time_budget_ms: Option<u64>,
    pub heuristic: HeuristicMode,
}

impl SearchConfig {
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget_ms = Some(u64::try_from(budget.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn with_heuristic(mut self, heuristic: HeuristicMode) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget_ms.map(Duration::from_millis)
    }
}

/// A numbered maze file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeEntry {
    pub id: u32,
    pub path: PathBuf,
}

/// Full configuration file
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub mazes: Vec<MazeEntry>,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
