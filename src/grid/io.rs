use std::{fmt, fs, path::Path, str::FromStr};

use log::debug;

use super::Grid;
use crate::errors::GridError;


/// Parse the maze text format
/// One row per non-blank line, cells separated by whitespace.
/// The token `1` is a wall, any other token is free.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.split_whitespace().map(|token| token == "1").collect())
            .collect();
        Grid::new(rows)
    }
}

/// Writes the grid back in the maze text format
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.blocked.chunks(self.cols) {
            for (y, wall) in row.iter().enumerate() {
                if y > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if *wall { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Grid {

    /// Read a grid from a maze file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GridError> {
        let path = path.as_ref();
        let grid: Grid = fs::read_to_string(path)?.parse()?;
        debug!("loaded {}x{} grid from {}", grid.rows, grid.cols, path.display());
        Ok(grid)
    }

    /// Overwrite a maze file with this grid
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), GridError> {
        let path = path.as_ref();
        fs::write(path, self.to_string())?;
        debug!("saved {}x{} grid to {}", self.rows, self.cols, path.display());
        Ok(())
    }
}
