mod line_of_sight;

pub use line_of_sight::line_of_sight;

use num_traits::{Num, Signed, Float};
use crate::grid::Cell;


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}


/// Number of 4-connected moves between two cells on an open grid
pub fn manhattan(a: Cell, b: Cell) -> usize {
    manhattan_distance(a.x as i64, a.y as i64, b.x as i64, b.y as i64).unsigned_abs() as usize
}

/// Straight line distance between cell centres
pub fn straight_line(a: Cell, b: Cell) -> f64 {
    euclidean(a.x as f64, a.y as f64, b.x as f64, b.y as f64)
}

/// Summed straight line length of a waypoint path
pub fn path_length(path: &[Cell]) -> f64 {
    path.windows(2).map(|pair| straight_line(pair[0], pair[1])).sum()
}
