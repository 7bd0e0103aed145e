use std::path::{Path, PathBuf};

use log::info;

use super::{Cell, Grid};
use crate::collections::FxIndexMap;
use crate::config::Config;
use crate::errors::GridError;


/// Numbered maze files on disk
/// Every working file `name.ext` may have a pristine copy `name_default.ext`
/// that `restore` copies back over it.
#[derive(Clone, Debug, Default)]
pub struct MazeStore {
    files: FxIndexMap<u32, PathBuf>,
}

impl MazeStore {

    pub fn new<I>(files: I) -> Self
    where
        I: IntoIterator<Item = (u32, PathBuf)>,
    {
        Self { files: files.into_iter().collect() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.mazes.iter().map(|entry| (entry.id, entry.path.clone())))
    }

    /// Registered maze ids in configuration order
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.files.keys().copied()
    }

    pub fn path(&self, id: u32) -> Result<&Path, GridError> {
        self.files
            .get(&id)
            .map(PathBuf::as_path)
            .ok_or(GridError::UnknownMaze(id))
    }

    pub fn load(&self, id: u32) -> Result<Grid, GridError> {
        Grid::load(self.path(id)?)
    }

    /// Flip the listed cells and persist the result
    pub fn update(&self, id: u32, cells: &[Cell]) -> Result<Grid, GridError> {
        let path = self.path(id)?;
        let mut grid = Grid::load(path)?;
        grid.toggle(cells)?;
        grid.save(path)?;
        info!("maze {id}: toggled {} cells", cells.len());
        Ok(grid)
    }

    /// Replace the working file with its `_default` copy
    pub fn restore(&self, id: u32) -> Result<Grid, GridError> {
        let path = self.path(id)?;
        let grid = Grid::load(default_path(path))?;
        grid.save(path)?;
        info!("maze {id}: restored from default copy");
        Ok(grid)
    }
}

/// `dir/name.ext` -> `dir/name_default.ext`
fn default_path(path: &Path) -> PathBuf {
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}_default.{}", ext.to_string_lossy()),
        None => format!("{stem}_default"),
    };
    path.with_file_name(name)
}
