//! Inventory domain module.
//!
//! This crate contains the item model and the operations over an ordered item
//! list, implemented purely as deterministic domain logic (no IO, no terminal,
//! no storage).

pub mod inventory;
pub mod item;
pub mod totals;

pub use inventory::{Inventory, Removal};
pub use item::{Item, ItemKind, ItemName, Quantity};
pub use totals::Totals;
