//! Inventory listing types.
//!
//! This module defines the page and result types exchanged between an
//! [`InventorySource`](crate::InventorySource) and the fetcher.

mod types;

pub use types::{Completion, FetchOutcome, InventoryPage, InventoryRecord};
