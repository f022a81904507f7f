use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tally_inventory::Inventory;

use super::r#trait::{InventoryStore, StoreError};
use crate::config::StoreConfig;
use crate::format;

/// Flat-file inventory store.
///
/// `save` truncates and rewrites the file in place. There is no atomic rename or
/// backup, so an interrupted save can leave a partially written file.
#[derive(Debug, Clone)]
pub struct FileInventoryStore {
    path: PathBuf,
}

impl FileInventoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InventoryStore for FileInventoryStore {
    fn load(&self) -> Result<Option<Inventory>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "inventory file not found; starting empty");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let items = format::decode(&text)?;
        tracing::info!(path = %self.path.display(), items = items.len(), "inventory loaded");
        Ok(Some(Inventory::from_items(items)))
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        for item in inventory {
            writeln!(writer, "{}", format::encode_item(item))?;
        }
        writer.flush()?;

        tracing::info!(path = %self.path.display(), items = inventory.len(), "inventory saved");
        Ok(())
    }
}
