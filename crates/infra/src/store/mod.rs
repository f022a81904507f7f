//! Inventory storage boundary.
//!
//! The trait keeps the shell independent of where the inventory lives: a flat
//! file in production, memory in tests.

pub mod file;
pub mod in_memory;
pub mod r#trait;

pub use file::FileInventoryStore;
pub use in_memory::InMemoryInventoryStore;
pub use r#trait::{InventoryStore, StoreError};
