//! Store configuration.

use std::path::{Path, PathBuf};

/// Default inventory file, relative to the working directory.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_FILE)
    }
}
