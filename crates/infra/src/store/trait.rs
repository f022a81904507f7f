use thiserror::Error;

use tally_inventory::Inventory;

use crate::format::FormatError;

/// Storage failure.
///
/// None of these are fatal to a session: on load the caller falls back to an
/// empty inventory, on save the in-memory state is left as it was.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed inventory data at {0}")]
    Malformed(#[from] FormatError),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Whole-inventory load/save.
pub trait InventoryStore {
    /// Load the stored inventory.
    ///
    /// `Ok(None)` means nothing has been stored yet; callers start empty.
    fn load(&self) -> Result<Option<Inventory>, StoreError>;

    /// Replace the stored inventory with `inventory`.
    fn save(&self, inventory: &Inventory) -> Result<(), StoreError>;
}

impl<S: InventoryStore + ?Sized> InventoryStore for &S {
    fn load(&self) -> Result<Option<Inventory>, StoreError> {
        (**self).load()
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        (**self).save(inventory)
    }
}
