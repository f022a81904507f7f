use std::sync::RwLock;

use tally_inventory::{Inventory, Item};

use super::r#trait::{InventoryStore, StoreError};

/// In-memory inventory store.
///
/// Intended for tests. Starts out "missing" unless seeded.
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    items: RwLock<Option<Vec<Item>>>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(Some(items)),
        }
    }

    /// Last saved items, if anything was ever stored.
    pub fn snapshot(&self) -> Option<Vec<Item>> {
        self.items.read().ok().and_then(|items| items.clone())
    }
}

impl InventoryStore for InMemoryInventoryStore {
    fn load(&self) -> Result<Option<Inventory>, StoreError> {
        let items = self
            .items
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        Ok(items.clone().map(Inventory::from_items))
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        *items = Some(inventory.items().to_vec());
        Ok(())
    }
}
