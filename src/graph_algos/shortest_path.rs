use crate::errors::PathPlannerError;
use crate::grid::Cell;
use super::GraphNodeMap;

/// Construct the path from the goal node back to the start node
/// Returns the ordered path as a vector of cells from start to goal
/// node_map: GraphNodeMap<C> - node arena, parent links are arena indices
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn shortest_path<C>(node_map: &GraphNodeMap<C>, goal_index: usize) -> Result<Vec<Cell>, PathPlannerError> {

    let mut path = Vec::new();
    let mut current_index = Some(goal_index);

    // Trace back from goal to start
    while let Some(index) = current_index {
        // Add the current cell to the path
        if let Some((cell, node)) = node_map.get_index(index) {
            path.push(*cell);
            current_index = node.parent;
        } else {
            return Err(PathPlannerError::NoPathFound);
        }
        debug_assert!(path.len() <= node_map.len(), "cycle in parent links");
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    if path.is_empty() {
        return Err(PathPlannerError::NoPathFound);
    }

    Ok(path)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_algos::SearchNode;

    #[test]
    fn test_path_reconstruction() {
        // Build an arena by hand: (0,0) -> (0,1) -> (1,1), and a branch (1,0)
        let mut node_map: GraphNodeMap<usize> = GraphNodeMap::default();
        let a = node_map.insert_full(Cell::new(0, 0), SearchNode::root(Cell::new(0, 0), 2)).0;
        let b = node_map.insert_full(Cell::new(0, 1), SearchNode::new(Cell::new(0, 1), 1, 1, Some(a))).0;
        let c = node_map.insert_full(Cell::new(1, 0), SearchNode::new(Cell::new(1, 0), 1, 1, Some(a))).0;
        let d = node_map.insert_full(Cell::new(1, 1), SearchNode::new(Cell::new(1, 1), 2, 0, Some(b))).0;

        let path = shortest_path(&node_map, d).unwrap();
        assert_eq!(path, vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]);

        let branch = shortest_path(&node_map, c).unwrap();
        assert_eq!(branch, vec![Cell::new(0, 0), Cell::new(1, 0)]);

        // the root alone
        assert_eq!(shortest_path(&node_map, a).unwrap(), vec![Cell::new(0, 0)]);
    }

    #[test]
    fn test_missing_goal_index() {
        let node_map: GraphNodeMap<usize> = GraphNodeMap::default();
        assert!(matches!(shortest_path(&node_map, 3), Err(PathPlannerError::NoPathFound)));
    }
}
