use crate::collections::FxHashSet;
use crate::config::SearchConfig;
use crate::errors::PathPlannerError;
use crate::grid::{Cell, Grid};
use super::{GoalHeuristic, GraphNodeMap, OpenSet, Route, SearchBudget, SearchNode, SearchTree, validate};

use log::{debug, trace};
use indexmap::map::Entry::{Occupied, Vacant};


/// Grid A* Algorithm - 4-connected moves of cost 1
/// https://en.wikipedia.org/wiki/A*_search_algorithm
#[derive(Clone, Debug, Default)]
pub struct AStar {
    config: SearchConfig,
}

impl AStar {

    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// From the start cell, expand the grid until a goal cell is extracted
    /// Returns the route to the first goal extracted from the open list.
    /// With the default heuristic (Manhattan distance to the first goal) the
    /// route is a shortest one whenever the goal set holds a single cell.
    pub fn plan(&self, grid: &Grid, start: Cell, goals: &[Cell]) -> Result<Route<usize>, PathPlannerError> {
        validate(grid, start, goals)?;
        trace!("[AStar] plan: start={start} goals={}", goals.len());

        let tree = self.build_graph(grid, start, goals)?;
        let expanded = tree.expanded;
        match tree.into_route() {
            Ok(route) => {
                trace!(
                    "[AStar] SUCCESS: cost={} waypoints={} expanded={}",
                    route.cost, route.path.len(), route.expanded
                );
                Ok(route)
            }
            Err(error) => {
                debug!("[AStar] FAILED: {error} after expanding {expanded} nodes");
                Err(error)
            }
        }
    }


    /// Traverses the grid using A*
    /// Returns the node arena along with the index of the goal node
    fn build_graph(&self, grid: &Grid, start: Cell, goals: &[Cell]) -> Result<SearchTree<usize>, PathPlannerError> {
        let goal_set: FxHashSet<Cell> = goals.iter().copied().collect();
        let heuristic = GoalHeuristic::new(goals, self.config.heuristic);
        let budget = SearchBudget::new(&self.config);

        // Every cell seen so far, open or closed
        // Index in the map is the node id used by the open list and parent links
        let mut node_map: GraphNodeMap<usize> = GraphNodeMap::default();

        // Open List
        // Nodes that need to be evaluated, keyed by f = g + h
        let mut open_list: OpenSet<usize> = OpenSet::new();

        let h = heuristic.estimate(start);
        let start_index = node_map.insert_full(start, SearchNode::root(start, h)).0;
        open_list.push(start_index, h);

        let mut expanded = 0;
        while let Some((index, _)) = open_list.pop() {

            let node = &mut node_map[index];
            node.closed = true;
            let (cell, cost) = (node.cell, node.g);

            // Check if we've reached a goal
            if goal_set.contains(&cell) {
                return Ok(SearchTree { node_map, goal_index: Some(index), expanded });
            }

            budget.check(expanded)?;
            expanded += 1;

            // loop over free neighbors - every move costs 1
            for neighbor in grid.neighbors4(cell) {
                let new_cost = cost + 1;

                match node_map.entry(neighbor) {
                    Vacant(e) => {
                        // This is the first time we're seeing this neighbor
                        let neighbor_index = e.index();
                        let h = heuristic.estimate(neighbor);
                        let f = e.insert(SearchNode::new(neighbor, new_cost, h, Some(index))).f;
                        open_list.push(neighbor_index, f);
                    }
                    Occupied(mut e) => {
                        let neighbor_index = e.index();
                        let seen = e.get_mut();
                        // Closed cells are final, open ones only move on a strictly better cost
                        if seen.closed || seen.g <= new_cost {
                            continue;
                        }
                        seen.relax(new_cost, index);
                        open_list.decrease_key(neighbor_index, seen.f);
                    }
                }
            }
        }

        Ok(SearchTree { node_map, goal_index: None, expanded })
    }
}


/// A* from `start` to the nearest reachable cell of `goals` with default limits
pub fn a_star(grid: &Grid, start: Cell, goals: &[Cell]) -> Result<Route<usize>, PathPlannerError> {
    AStar::default().plan(grid, start, goals)
}
