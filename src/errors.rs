use std::time::Duration;

use thiserror::Error;

use crate::grid::Cell;

#[derive(Debug, Error)]
pub enum PathPlannerError {
    /// Every reachable cell was expanded without reaching a goal
    #[error("no path found")]
    NoPathFound,
    #[error("goal set is empty")]
    EmptyGoalSet,
    #[error("start {0} is outside the grid")]
    StartOutOfBounds(Cell),
    #[error("start {0} is a wall")]
    StartBlocked(Cell),
    #[error("goal #{index} at {cell} is outside the grid")]
    GoalOutOfBounds { index: usize, cell: Cell },
    #[error("goal #{index} at {cell} is a wall")]
    GoalBlocked { index: usize, cell: Cell },
    #[error("expansion limit reached after {expanded} nodes")]
    ExpansionLimitReached { expanded: usize },
    #[error("search timed out after {elapsed:?} ({expanded} nodes expanded)")]
    TimedOut { expanded: usize, elapsed: Duration },
    #[error("unknown algorithm id {0}")]
    UnknownAlgorithm(u8),
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl PathPlannerError {
    /// True for the not-found outcome, false for rejected input and exhausted budgets
    pub fn is_not_found(&self) -> bool {
        matches!(self, PathPlannerError::NoPathFound)
    }
}

#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Cell),
    #[error("unknown maze id {0}")]
    UnknownMaze(u32),
    #[error("grid io: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
