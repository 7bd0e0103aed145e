use crate::collections::FxHashSet;
use crate::config::SearchConfig;
use crate::errors::PathPlannerError;
use crate::geometry::{line_of_sight, straight_line};
use crate::grid::{Cell, Grid};
use super::{GoalHeuristic, GraphNodeMap, OpenSet, Route, SearchBudget, SearchNode, SearchTree, validate};

use log::{debug, trace};
use indexmap::map::Entry::{Occupied, Vacant};


/// Lazy Theta* - any-angle paths over a 4-connected grid
/// http://idm-lab.org/bib/abstracts/papers/aaai10b.pdf
///
/// Expands cells like grid A*, but a neighbor may take its parent's own
/// parent as predecessor when the two can see each other. The route then
/// runs in straight segments between waypoints that can be several cells
/// apart, and its cost is the summed straight line length of those segments.
///
/// Priorities still use the Manhattan estimate, which can exceed the straight
/// line distance left, so routes are not guaranteed to be the shortest
/// any-angle route. They never cost more than the grid A* route.
#[derive(Clone, Debug, Default)]
pub struct LazyThetaStar {
    config: SearchConfig,
}

impl LazyThetaStar {

    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// From the start cell, expand the grid until a goal cell is extracted
    /// Consecutive waypoints of the returned route have line of sight.
    pub fn plan(&self, grid: &Grid, start: Cell, goals: &[Cell]) -> Result<Route<f64>, PathPlannerError> {
        validate(grid, start, goals)?;
        trace!("[LazyThetaStar] plan: start={start} goals={}", goals.len());

        let tree = self.build_graph(grid, start, goals)?;
        let expanded = tree.expanded;
        match tree.into_route() {
            Ok(route) => {
                trace!(
                    "[LazyThetaStar] SUCCESS: cost={:.3} waypoints={} expanded={}",
                    route.cost, route.path.len(), route.expanded
                );
                Ok(route)
            }
            Err(error) => {
                debug!("[LazyThetaStar] FAILED: {error} after expanding {expanded} nodes");
                Err(error)
            }
        }
    }


    /// Traverses the grid, returning the node arena and the index of the goal node
    /// Node parents are visible parents.
    fn build_graph(&self, grid: &Grid, start: Cell, goals: &[Cell]) -> Result<SearchTree<f64>, PathPlannerError> {
        let goal_set: FxHashSet<Cell> = goals.iter().copied().collect();
        let heuristic = GoalHeuristic::new(goals, self.config.heuristic);
        let budget = SearchBudget::new(&self.config);

        let mut node_map: GraphNodeMap<f64> = GraphNodeMap::default();
        let mut open_list: OpenSet<f64> = OpenSet::new();

        let h = heuristic.estimate(start) as f64;
        let start_index = node_map.insert_full(start, SearchNode::root(start, h)).0;
        open_list.push(start_index, h);

        let mut expanded = 0;
        while let Some((index, _)) = open_list.pop() {

            let node = &mut node_map[index];
            node.closed = true;
            let (cell, cost) = (node.cell, node.g);

            if goal_set.contains(&cell) {
                return Ok(SearchTree { node_map, goal_index: Some(index), expanded });
            }

            budget.check(expanded)?;
            expanded += 1;

            for neighbor in grid.neighbors4(cell) {
                let neighbor_index = match node_map.entry(neighbor) {
                    // unseen cells start at an unknown (infinite) cost
                    Vacant(e) => {
                        let neighbor_index = e.index();
                        let h = heuristic.estimate(neighbor) as f64;
                        e.insert(SearchNode::new(neighbor, f64::INFINITY, h, None));
                        neighbor_index
                    }
                    Occupied(e) if e.get().closed => continue,
                    Occupied(e) => e.index(),
                };

                // one step through the current cell
                improve(&mut node_map, &mut open_list, neighbor_index, cost + straight_line(cell, neighbor), index);

                if !open_list.contains(neighbor_index) {
                    open_list.push(neighbor_index, node_map[neighbor_index].f);
                }

                update_vertex(grid, &mut node_map, &mut open_list, index, neighbor_index);
            }
        }

        Ok(SearchTree { node_map, goal_index: None, expanded })
    }
}


/// Try to reach `neighbor` straight from the visible parent of `current`
/// With line of sight the neighbor is costed along the straight segment from
/// that parent, otherwise through `current` itself. The start node has no
/// parent and leaves the neighbor alone.
fn update_vertex(
    grid: &Grid,
    node_map: &mut GraphNodeMap<f64>,
    open_list: &mut OpenSet<f64>,
    current: usize,
    neighbor: usize,
) {
    let Some(parent) = node_map[current].parent else {
        return;
    };
    let target = node_map[neighbor].cell;
    let (parent_cell, parent_cost) = (node_map[parent].cell, node_map[parent].g);

    if line_of_sight(grid, parent_cell, target) {
        let cost = parent_cost + straight_line(parent_cell, target);
        improve(node_map, open_list, neighbor, cost, parent);
    } else {
        let (cell, cost) = (node_map[current].cell, node_map[current].g);
        improve(node_map, open_list, neighbor, cost + straight_line(cell, target), current);
    }
}

/// Take `cost` through `parent` if it beats the node's current cost
/// and move the node forward in the open list
fn improve(
    node_map: &mut GraphNodeMap<f64>,
    open_list: &mut OpenSet<f64>,
    index: usize,
    cost: f64,
    parent: usize,
) {
    let node = &mut node_map[index];
    if cost < node.g {
        node.relax(cost, parent);
        open_list.decrease_key(index, node.f);
    }
}


/// Lazy Theta* from `start` to the nearest reachable cell of `goals` with default limits
pub fn lazy_theta_star(grid: &Grid, start: Cell, goals: &[Cell]) -> Result<Route<f64>, PathPlannerError> {
    LazyThetaStar::default().plan(grid, start, goals)
}
