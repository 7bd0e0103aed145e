//! Pathfinding over 4-connected occupancy grids.
//!
//! Two planners share one node arena and one indexed open list:
//! grid A* (unit moves) and Lazy Theta* (any-angle, straight segments
//! between mutually visible waypoints). Both accept a set of goals and stop
//! at the first one extracted from the open list.

mod collections;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod grid;
pub mod solver;

pub use config::{Config, HeuristicMode, SearchConfig};
pub use errors::{ConfigError, GridError, PathPlannerError};
pub use graph_algos::{
    PATH_NOT_FOUND, Route,
    a_star::{AStar, a_star},
    lazy_theta_star::{LazyThetaStar, lazy_theta_star},
};
pub use grid::{Cell, Grid, MazeStore, boundary_cells, render};
pub use solver::{Algorithm, SolveReport, SolveRequest, Transition, solve};
