use super::{Cell, Grid};


/// Free cells on the outer edge of the grid, excluding `start`
/// Order: top row left to right, bottom row left to right,
/// left column top to bottom, right column top to bottom.
/// Corners are reported once, by the row that reaches them first.
/// Used as the goal set when the caller only wants to escape the maze.
pub fn boundary_cells(grid: &Grid, start: Cell) -> Vec<Cell> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let last_row = rows - 1;
    let last_col = cols - 1;

    let top = (0..cols).map(|y| Cell::new(0, y));
    // a single row grid has no separate bottom edge
    let bottom = (0..cols)
        .filter(|_| last_row > 0)
        .map(|y| Cell::new(last_row, y));
    // side columns without the corners the rows already listed
    let left = (1..last_row).map(|x| Cell::new(x, 0));
    let right = (1..last_row)
        .filter(|_| last_col > 0)
        .map(|x| Cell::new(x, last_col));

    top.chain(bottom)
        .chain(left)
        .chain(right)
        .filter(|cell| *cell != start && grid.is_free(*cell))
        .collect()
}
