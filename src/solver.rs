//! One-call entry point: validate a request, run the chosen planner, time it
//! and report the route as a list of moves.

use std::time::{Duration, Instant};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::errors::PathPlannerError;
use crate::graph_algos::{
    PATH_NOT_FOUND, a_star::AStar, lazy_theta_star::LazyThetaStar, validate, validate_start,
};
use crate::grid::{Cell, Grid, boundary_cells};

/// Planner selected by a request, numbered as on the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Algorithm {
    AStar = 1,
    LazyThetaStar = 2,
}

impl TryFrom<u8> for Algorithm {
    type Error = PathPlannerError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Algorithm::AStar),
            2 => Ok(Algorithm::LazyThetaStar),
            _ => Err(PathPlannerError::UnknownAlgorithm(id)),
        }
    }
}

impl From<Algorithm> for u8 {
    fn from(algorithm: Algorithm) -> Self {
        algorithm as u8
    }
}


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub algorithm: Algorithm,
    pub start: Cell,
    /// Empty means "any free cell on the edge of the grid"
    #[serde(default)]
    pub goals: Vec<Cell>,
}

/// One straight move between consecutive waypoints
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub start: Cell,
    pub end: Cell,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SolveReport {
    /// Route cost, `PATH_NOT_FOUND` when no goal is reachable
    pub dist: f64,
    pub path: Vec<Transition>,
    pub elapsed: Duration,
}

impl SolveReport {
    fn not_found(elapsed: Duration) -> Self {
        Self { dist: PATH_NOT_FOUND as f64, path: Vec::new(), elapsed }
    }

    pub fn found(&self) -> bool {
        self.dist != PATH_NOT_FOUND as f64
    }
}


/// Run one request against a grid
/// Unlike the planners themselves, walled goals are rejected up front.
/// An unreachable goal set is not an error here, it is reported with
/// `dist == PATH_NOT_FOUND` and no moves. So is a maze with no free edge
/// cell when the request leaves the goals to the grid boundary.
pub fn solve(grid: &Grid, request: &SolveRequest, config: &SearchConfig) -> Result<SolveReport, PathPlannerError> {
    let start = request.start;
    let goals = if request.goals.is_empty() {
        boundary_cells(grid, start)
    } else {
        request.goals.clone()
    };

    if goals.is_empty() {
        validate_start(grid, start)?;
        debug!("[solve] {:?} from {start}: no free exit on the boundary", request.algorithm);
        return Ok(SolveReport::not_found(Duration::ZERO));
    }
    validate(grid, start, &goals)?;
    if let Some((index, &cell)) = goals.iter().enumerate().find(|(_, goal)| !grid.is_free(**goal)) {
        return Err(PathPlannerError::GoalBlocked { index, cell });
    }

    let started = Instant::now();
    let outcome = match request.algorithm {
        Algorithm::AStar => AStar::new(config.clone())
            .plan(grid, start, &goals)
            .map(|route| (route.cost as f64, route.path)),
        Algorithm::LazyThetaStar => LazyThetaStar::new(config.clone())
            .plan(grid, start, &goals)
            .map(|route| (route.cost, route.path)),
    };
    let elapsed = started.elapsed();

    let (dist, waypoints) = match outcome {
        Ok(found) => found,
        Err(PathPlannerError::NoPathFound) => {
            debug!("[solve] {:?} from {start}: no path", request.algorithm);
            return Ok(SolveReport::not_found(elapsed));
        }
        Err(error) => return Err(error),
    };

    let path = waypoints
        .windows(2)
        .map(|pair| Transition { start: pair[0], end: pair[1] })
        .collect();

    info!("[solve] {:?} from {start}: dist={dist:.3} in {elapsed:?}", request.algorithm);
    Ok(SolveReport { dist, path, elapsed })
}


#[cfg(test)]
mod tests {
    use super::*;

    fn request(algorithm: Algorithm, start: Cell, goals: Vec<Cell>) -> SolveRequest {
        SolveRequest { algorithm, start, goals }
    }

    #[test]
    fn test_algorithm_ids() {
        assert_eq!(Algorithm::try_from(1).unwrap(), Algorithm::AStar);
        assert_eq!(Algorithm::try_from(2).unwrap(), Algorithm::LazyThetaStar);
        assert!(matches!(Algorithm::try_from(3), Err(PathPlannerError::UnknownAlgorithm(3))));
        assert_eq!(u8::from(Algorithm::LazyThetaStar), 2);
    }

    #[test]
    fn test_request_from_yaml() {
        let yaml = "algorithm: 2\nstart: {x: 1, y: 1}\ngoals:\n  - {x: 0, y: 3}\n";
        let parsed: SolveRequest = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed, request(Algorithm::LazyThetaStar, Cell::new(1, 1), vec![Cell::new(0, 3)]));

        let defaulted: SolveRequest = serde_yaml::from_str("algorithm: 1\nstart: {x: 0, y: 0}\n").unwrap();
        assert!(defaulted.goals.is_empty());

        assert!(serde_yaml::from_str::<SolveRequest>("algorithm: 9\nstart: {x: 0, y: 0}\n").is_err());
    }

    #[test]
    fn test_solve_a_star_transitions() {
        let grid = Grid::open(3, 3).unwrap();
        let report = solve(
            &grid,
            &request(Algorithm::AStar, Cell::new(0, 0), vec![Cell::new(2, 2)]),
            &SearchConfig::default(),
        )
        .unwrap();

        assert!(report.found());
        assert_eq!(report.dist, 4.0);
        assert_eq!(report.path.len(), 4);
        assert_eq!(report.path[0].start, Cell::new(0, 0));
        assert_eq!(report.path[3].end, Cell::new(2, 2));
        assert!(report.path.windows(2).all(|pair| pair[0].end == pair[1].start));
    }

    #[test]
    fn test_solve_lazy_theta_star() {
        let grid = Grid::open(5, 5).unwrap();
        let report = solve(
            &grid,
            &request(Algorithm::LazyThetaStar, Cell::new(0, 0), vec![Cell::new(4, 4)]),
            &SearchConfig::default(),
        )
        .unwrap();
        assert!((report.dist - 32f64.sqrt()).abs() < 1e-9);
        assert_eq!(report.path, vec![Transition { start: Cell::new(0, 0), end: Cell::new(4, 4) }]);
    }

    #[test]
    fn test_solve_defaults_to_boundary() {
        // only exit is the gap at (0, 2)
        let walls = [
            Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 3), Cell::new(0, 4),
            Cell::new(1, 0), Cell::new(2, 0), Cell::new(3, 0),
            Cell::new(1, 4), Cell::new(2, 4), Cell::new(3, 4),
            Cell::new(4, 0), Cell::new(4, 1), Cell::new(4, 2), Cell::new(4, 3), Cell::new(4, 4),
        ];
        let grid = Grid::with_walls(5, 5, walls).unwrap();
        let report = solve(&grid, &request(Algorithm::AStar, Cell::new(2, 2), vec![]), &SearchConfig::default()).unwrap();
        assert_eq!(report.dist, 2.0);
        assert_eq!(report.path.last().map(|t| t.end), Some(Cell::new(0, 2)));
    }

    #[test]
    fn test_solve_maze_without_exit_is_not_found() {
        let grid = Grid::new(vec![
            vec![true, true, true, true],
            vec![true, false, false, true],
            vec![true, false, false, true],
            vec![true, true, true, true],
        ])
        .unwrap();
        for algorithm in [Algorithm::AStar, Algorithm::LazyThetaStar] {
            let report = solve(&grid, &request(algorithm, Cell::new(1, 1), vec![]), &SearchConfig::default()).unwrap();
            assert!(!report.found());
            assert!(report.path.is_empty());
        }

        // the start still has to be valid
        let result = solve(&grid, &request(Algorithm::AStar, Cell::new(0, 0), vec![]), &SearchConfig::default());
        assert!(matches!(result, Err(PathPlannerError::StartBlocked(_))));
        let result = solve(&grid, &request(Algorithm::AStar, Cell::new(4, 1), vec![]), &SearchConfig::default());
        assert!(matches!(result, Err(PathPlannerError::StartOutOfBounds(_))));
    }

    #[test]
    fn test_solve_start_is_the_only_exit() {
        let grid = Grid::with_walls(3, 3, [
            Cell::new(0, 0), Cell::new(0, 2),
            Cell::new(1, 0), Cell::new(1, 2),
            Cell::new(2, 0), Cell::new(2, 1), Cell::new(2, 2),
        ])
        .unwrap();
        let report = solve(&grid, &request(Algorithm::LazyThetaStar, Cell::new(0, 1), vec![]), &SearchConfig::default()).unwrap();
        assert!(!report.found());
        assert_eq!(report.dist, PATH_NOT_FOUND as f64);
    }

    #[test]
    fn test_solve_not_found_is_reported() {
        let grid = Grid::with_walls(3, 3, [Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2)]).unwrap();
        for algorithm in [Algorithm::AStar, Algorithm::LazyThetaStar] {
            let report = solve(
                &grid,
                &request(algorithm, Cell::new(0, 1), vec![Cell::new(2, 1)]),
                &SearchConfig::default(),
            )
            .unwrap();
            assert!(!report.found());
            assert_eq!(report.dist, -1.0);
            assert!(report.path.is_empty());
        }
    }

    #[test]
    fn test_solve_start_is_goal() {
        let grid = Grid::open(2, 2).unwrap();
        let report = solve(
            &grid,
            &request(Algorithm::LazyThetaStar, Cell::new(1, 1), vec![Cell::new(1, 1)]),
            &SearchConfig::default(),
        )
        .unwrap();
        assert!(report.found());
        assert_eq!(report.dist, 0.0);
        assert!(report.path.is_empty());
    }

    #[test]
    fn test_solve_rejects_bad_requests() {
        let grid = Grid::with_walls(3, 3, [Cell::new(1, 1)]).unwrap();
        let config = SearchConfig::default();

        let result = solve(&grid, &request(Algorithm::AStar, Cell::new(5, 0), vec![Cell::new(0, 0)]), &config);
        assert!(matches!(result, Err(PathPlannerError::StartOutOfBounds(_))));

        let result = solve(&grid, &request(Algorithm::AStar, Cell::new(1, 1), vec![Cell::new(0, 0)]), &config);
        assert!(matches!(result, Err(PathPlannerError::StartBlocked(_))));

        let result = solve(
            &grid,
            &request(Algorithm::AStar, Cell::new(0, 0), vec![Cell::new(2, 2), Cell::new(1, 1)]),
            &config,
        );
        assert!(matches!(result, Err(PathPlannerError::GoalBlocked { index: 1, .. })));

        let result = solve(&grid, &request(Algorithm::AStar, Cell::new(0, 0), vec![Cell::new(0, 3)]), &config);
        assert!(matches!(result, Err(PathPlannerError::GoalOutOfBounds { index: 0, .. })));
    }

    #[test]
    fn test_solve_passes_limits_through() {
        let grid = Grid::open(10, 10).unwrap();
        let config = SearchConfig::default().with_max_expansions(1);
        let result = solve(&grid, &request(Algorithm::AStar, Cell::new(0, 0), vec![Cell::new(9, 9)]), &config);
        assert!(matches!(result, Err(PathPlannerError::ExpansionLimitReached { expanded: 1 })));
    }

    #[test]
    fn test_report_serializes() {
        let report = SolveReport {
            dist: 1.0,
            path: vec![Transition { start: Cell::new(0, 0), end: Cell::new(0, 1) }],
            elapsed: Duration::from_millis(3),
        };
        let yaml = serde_yaml::to_string(&report).unwrap();
        assert!(yaml.contains("dist: 1.0"));
        assert!(yaml.contains("end:"));
    }
}
