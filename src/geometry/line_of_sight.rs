use crate::grid::{Cell, Grid};


/// Discrete ray test between two cell centres
/// Walks the dominant axis one cell at a time. The error term tracks, in doubled
/// units, where the line sits relative to the next minor-axis boundary when it
/// leaves the current cell. Every cell the segment passes through must be free,
/// including the one entered by a minor-axis step before the major step. A line
/// through a cell corner needs both cells beside the corner free, so rays never
/// slip between two diagonal walls.
/// Symmetric in `from` and `to`.
pub fn line_of_sight(grid: &Grid, from: Cell, to: Cell) -> bool {
    if !grid.is_free(from) || !grid.is_free(to) {
        return false;
    }

    let dx = from.x.abs_diff(to.x) as isize;
    let dy = from.y.abs_diff(to.y) as isize;
    let sx: isize = if to.x >= from.x { 1 } else { -1 };
    let sy: isize = if to.y >= from.y { 1 } else { -1 };

    let x_major = dx >= dy;
    let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };

    // cell `a` steps along the major axis and `b` along the minor axis from `from`
    let free = |a: isize, b: isize| {
        let cell = if x_major {
            from.offset(sx * a, sy * b)
        } else {
            from.offset(sx * b, sy * a)
        };
        cell.is_some_and(|cell| grid.is_free(cell))
    };

    let mut err = minor - major;
    let mut b = 0;
    for a in 0..major {
        if err >= 0 {
            // minor boundary crossed inside this column
            if !free(a, b + 1) {
                return false;
            }
            // exactly through the corner
            if err == 0 && !free(a + 1, b) {
                return false;
            }
            b += 1;
            err -= 2 * major;
        }
        err += 2 * minor;
        if !free(a + 1, b) {
            return false;
        }
    }

    true
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_grid_is_fully_visible() {
        let grid = Grid::open(6, 9).unwrap();
        for a in grid.free_cells() {
            for b in grid.free_cells() {
                assert!(line_of_sight(&grid, a, b), "{a} -> {b}");
            }
        }
    }

    #[test]
    fn test_same_cell() {
        let grid = Grid::with_walls(2, 2, [Cell::new(1, 1)]).unwrap();
        assert!(line_of_sight(&grid, Cell::new(0, 0), Cell::new(0, 0)));
        assert!(!line_of_sight(&grid, Cell::new(1, 1), Cell::new(1, 1)));
    }

    #[test]
    fn test_blocked_endpoints() {
        let grid = Grid::with_walls(3, 3, [Cell::new(2, 2)]).unwrap();
        assert!(!line_of_sight(&grid, Cell::new(0, 0), Cell::new(2, 2)));
        assert!(!line_of_sight(&grid, Cell::new(2, 2), Cell::new(0, 0)));
        assert!(!line_of_sight(&grid, Cell::new(0, 0), Cell::new(3, 3)));
    }

    #[test]
    fn test_straight_line_through_wall() {
        let grid = Grid::with_walls(1, 5, [Cell::new(0, 2)]).unwrap();
        assert!(!line_of_sight(&grid, Cell::new(0, 0), Cell::new(0, 4)));
        assert!(line_of_sight(&grid, Cell::new(0, 0), Cell::new(0, 1)));
        assert!(line_of_sight(&grid, Cell::new(0, 3), Cell::new(0, 4)));
    }

    #[test]
    fn test_diagonal_corner_is_blocked() {
        // one wall beside the corner is enough to block the diagonal
        let grid = Grid::with_walls(2, 2, [Cell::new(0, 1)]).unwrap();
        assert!(!line_of_sight(&grid, Cell::new(0, 0), Cell::new(1, 1)));
        assert!(!line_of_sight(&grid, Cell::new(1, 1), Cell::new(0, 0)));

        let grid = Grid::with_walls(2, 2, [Cell::new(1, 0)]).unwrap();
        assert!(!line_of_sight(&grid, Cell::new(0, 0), Cell::new(1, 1)));
    }

    #[test]
    fn test_minor_axis_step_cells_are_checked() {
        // (0,0) -> (1,4) steps to the second row between columns 1 and 3
        let wall_early = Grid::with_walls(5, 5, [Cell::new(0, 1)]).unwrap();
        assert!(!line_of_sight(&wall_early, Cell::new(0, 0), Cell::new(1, 4)));

        let wall_late = Grid::with_walls(5, 5, [Cell::new(1, 3)]).unwrap();
        assert!(!line_of_sight(&wall_late, Cell::new(0, 0), Cell::new(1, 4)));

        // a cell the segment never enters does not matter
        let wall_off_line = Grid::with_walls(5, 5, [Cell::new(1, 1)]).unwrap();
        assert!(line_of_sight(&wall_off_line, Cell::new(0, 0), Cell::new(1, 4)));
    }

    #[test]
    fn test_steep_line_in_both_directions() {
        let grid = Grid::with_walls(5, 5, [Cell::new(1, 2)]).unwrap();
        assert!(!line_of_sight(&grid, Cell::new(0, 0), Cell::new(2, 4)));
        assert!(!line_of_sight(&grid, Cell::new(2, 4), Cell::new(0, 0)));

        let grid = Grid::with_walls(6, 3, [Cell::new(2, 1)]).unwrap();
        assert!(!line_of_sight(&grid, Cell::new(5, 0), Cell::new(0, 2)));
        assert!(!line_of_sight(&grid, Cell::new(0, 2), Cell::new(5, 0)));
    }
}
