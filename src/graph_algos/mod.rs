pub mod a_star;
pub mod lazy_theta_star;
mod node;
mod open_set;
mod shortest_path;

pub use node::SearchNode;
pub use open_set::OpenSet;
use shortest_path::shortest_path;

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::collections::FxIndexMap;
use crate::config::{HeuristicMode, SearchConfig};
use crate::errors::PathPlannerError;
use crate::geometry::manhattan;
use crate::grid::{Cell, Grid};

/// Type alias for the node arena used by the grid planners
/// Key: cell - unique within one run
/// Value: search state of that cell
/// The insertion index of a cell is its node id, parent links are node ids
pub(crate) type GraphNodeMap<C> = FxIndexMap<Cell, SearchNode<C>>;

/// Cost sentinel reported on the wire when no route exists
pub const PATH_NOT_FOUND: i64 = -1;


/// A found route
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Route<C> {
    /// Cost from start to the reached goal
    pub cost: C,
    /// Waypoints from start to goal, both included
    pub path: Vec<Cell>,
    /// Nodes expanded before the goal was extracted
    pub expanded: usize,
}

impl<C> Route<C> {
    /// The goal the search stopped at
    pub fn goal(&self) -> Option<Cell> {
        self.path.last().copied()
    }

    /// Consecutive waypoint pairs
    pub fn segments(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.path.windows(2).map(|pair| (pair[0], pair[1]))
    }
}


/// Outcome of one search loop before path reconstruction
pub(crate) struct SearchTree<C> {
    pub node_map: GraphNodeMap<C>,
    pub goal_index: Option<usize>,
    pub expanded: usize,
}

impl<C: Copy> SearchTree<C> {

    /// Build the route to the goal, following parent links
    pub fn into_route(self) -> Result<Route<C>, PathPlannerError> {
        let goal_index = self.goal_index.ok_or(PathPlannerError::NoPathFound)?;
        let path = shortest_path(&self.node_map, goal_index)?;
        Ok(Route {
            cost: self.node_map[goal_index].g,
            path,
            expanded: self.expanded,
        })
    }
}


/// Priority heuristic for one run
/// Passed to every step that needs it, nothing is shared between runs
pub(crate) struct GoalHeuristic<'a> {
    goals: &'a [Cell],
    mode: HeuristicMode,
}

impl<'a> GoalHeuristic<'a> {
    pub fn new(goals: &'a [Cell], mode: HeuristicMode) -> Self {
        Self { goals, mode }
    }

    /// Manhattan estimate of the remaining moves
    pub fn estimate(&self, cell: Cell) -> usize {
        match self.mode {
            HeuristicMode::ReferenceGoal => self
                .goals
                .first()
                .map_or(0, |goal| manhattan(cell, *goal)),
            HeuristicMode::NearestGoal => self
                .goals
                .iter()
                .map(|goal| manhattan(cell, *goal))
                .min()
                .unwrap_or(0),
        }
    }
}


/// Expansion and wall-clock limits of one run
pub(crate) struct SearchBudget {
    max_expansions: Option<usize>,
    time_budget: Option<Duration>,
    started: Instant,
}

impl SearchBudget {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            max_expansions: config.max_expansions,
            time_budget: config.time_budget(),
            started: Instant::now(),
        }
    }

    /// Called before each expansion with the number of nodes already expanded
    pub fn check(&self, expanded: usize) -> Result<(), PathPlannerError> {
        if self.max_expansions.is_some_and(|limit| expanded >= limit) {
            return Err(PathPlannerError::ExpansionLimitReached { expanded });
        }
        if let Some(budget) = self.time_budget {
            let elapsed = self.started.elapsed();
            if elapsed >= budget {
                return Err(PathPlannerError::TimedOut { expanded, elapsed });
            }
        }
        Ok(())
    }
}


/// Reject inputs the planners cannot search from
/// Goals only need to be inside the grid - a walled goal is simply unreachable
pub(crate) fn validate(grid: &Grid, start: Cell, goals: &[Cell]) -> Result<(), PathPlannerError> {
    if goals.is_empty() {
        return Err(PathPlannerError::EmptyGoalSet);
    }
    validate_start(grid, start)?;
    if let Some((index, cell)) = goals.iter().enumerate().find(|(_, goal)| !grid.in_bounds(**goal)) {
        return Err(PathPlannerError::GoalOutOfBounds { index, cell: *cell });
    }
    Ok(())
}

/// The start must be a free cell inside the grid
pub(crate) fn validate_start(grid: &Grid, start: Cell) -> Result<(), PathPlannerError> {
    if !grid.in_bounds(start) {
        return Err(PathPlannerError::StartOutOfBounds(start));
    }
    if !grid.is_free(start) {
        return Err(PathPlannerError::StartBlocked(start));
    }
    Ok(())
}
