//! Infrastructure layer: storage format, file-backed store, configuration.

pub mod config;
pub mod format;
pub mod store;

pub use config::StoreConfig;
pub use format::FormatError;
pub use store::{FileInventoryStore, InMemoryInventoryStore, InventoryStore, StoreError};
