//! Local store of puzzle inputs
//!
//! Inputs live under a root directory, one file per puzzle:
//! `{root}/{year}/day_{DD}.txt`.

use crate::error::InputError;
use std::fs;
use std::path::PathBuf;

/// File-based store of puzzle inputs
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    /// Create a store rooted at `root`
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path where the input for `year`/`day` is expected
    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        self.root
            .join(year.to_string())
            .join(format!("day_{day:02}.txt"))
    }

    /// Whether the input file for `year`/`day` exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path(year, day).is_file()
    }

    /// Load the input for `year`/`day` verbatim
    pub fn load(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.path(year, day);
        if !path.is_file() {
            return Err(InputError::Missing { path });
        }
        fs::read_to_string(&path).map_err(|source| InputError::Io { path, source })
    }
}
