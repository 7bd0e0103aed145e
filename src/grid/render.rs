use crate::collections::FxHashSet;
use super::{Cell, Grid};


/// Draw the grid with a route on it
/// `G` goal, `S` start, `*` path, `1` wall, `0` free - earlier marks win
pub fn render(grid: &Grid, path: &[Cell], goals: &[Cell], start: Cell) -> String {
    let on_path: FxHashSet<Cell> = path.iter().copied().collect();
    let goals: FxHashSet<Cell> = goals.iter().copied().collect();

    let mut out = String::with_capacity(grid.rows() * grid.cols() * 2);
    for x in 0..grid.rows() {
        for y in 0..grid.cols() {
            let cell = Cell::new(x, y);
            let mark = if goals.contains(&cell) {
                'G'
            } else if cell == start {
                'S'
            } else if on_path.contains(&cell) {
                '*'
            } else if grid.is_free(cell) {
                '0'
            } else {
                '1'
            };
            if y > 0 {
                out.push(' ');
            }
            out.push(mark);
        }
        out.push('\n');
    }
    out
}
