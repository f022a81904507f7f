//! `tally-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no terminal, no files).

pub mod error;

pub use error::{DomainError, DomainResult};
