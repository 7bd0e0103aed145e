mod boundary;
mod io;
mod render;
mod store;

pub use boundary::boundary_cells;
pub use render::render;
pub use store::MazeStore;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::GridError;

/// 4-connected moves in neighbor order: +y, -y, +x, -x
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Grid cell - `x` is the row, `y` is the column
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell, None when it would leave the non-negative quadrant
    pub fn offset(self, dx: isize, dy: isize) -> Option<Cell> {
        Some(Cell {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Cell::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}


/// Rectangular occupancy grid
/// `true` marks a wall, `false` a free cell. Stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    blocked: Vec<bool>,
}

impl Grid {

    /// Build a grid from rows of wall flags
    /// Fails for an empty grid or rows of unequal length
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(GridError::Empty);
        }

        let mut blocked = Vec::with_capacity(rows.len() * cols);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(GridError::Ragged { row, expected: cols, found: cells.len() });
            }
            blocked.extend_from_slice(cells);
        }

        Ok(Self { rows: rows.len(), cols, blocked })
    }

    /// All-free grid
    pub fn open(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::new(vec![vec![false; cols]; rows])
    }

    /// Open grid with the listed cells walled off
    pub fn with_walls<I>(rows: usize, cols: usize, walls: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut grid = Self::open(rows, cols)?;
        for cell in walls {
            let idx = grid.index(cell).ok_or(GridError::OutOfBounds(cell))?;
            grid.blocked[idx] = true;
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell).then(|| cell.x * self.cols + cell.y)
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x < self.rows && cell.y < self.cols
    }

    /// Wall flag of a cell, None outside the grid
    pub fn is_blocked(&self, cell: Cell) -> Option<bool> {
        self.index(cell).map(|idx| self.blocked[idx])
    }

    /// In bounds and not a wall
    pub fn is_free(&self, cell: Cell) -> bool {
        self.is_blocked(cell) == Some(false)
    }

    /// Free 4-connected neighbors in the fixed order +y, -y, +x, -x
    pub fn neighbors4(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        DIRECTIONS
            .iter()
            .filter_map(move |&(dx, dy)| cell.offset(dx, dy))
            .filter(|next| self.is_free(*next))
    }

    /// Free cells in row-major order
    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocked
            .iter()
            .enumerate()
            .filter(|(_, wall)| !**wall)
            .map(|(idx, _)| Cell::new(idx / self.cols, idx % self.cols))
    }

    /// Flip every listed cell between wall and free
    /// Nothing is changed if any cell is outside the grid
    pub fn toggle(&mut self, cells: &[Cell]) -> Result<(), GridError> {
        if let Some(cell) = cells.iter().find(|cell| !self.in_bounds(**cell)) {
            return Err(GridError::OutOfBounds(*cell));
        }
        for cell in cells {
            let idx = cell.x * self.cols + cell.y;
            self.blocked[idx] = !self.blocked[idx];
        }
        Ok(())
    }

    /// Rows of wall flags as 0/1, the shape maze listings are reported in
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.blocked
            .chunks(self.cols)
            .map(|row| row.iter().map(|wall| u8::from(*wall)).collect())
            .collect()
    }
}
