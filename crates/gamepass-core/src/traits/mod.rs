//! Core traits for inventory access.

mod source;

pub use source::InventorySource;
