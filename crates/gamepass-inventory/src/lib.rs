//! gamepass-inventory - HTTP-backed inventory source.
//!
//! [`HttpInventory`] implements [`gamepass_core::InventorySource`] against
//! the public inventory API, one GET per page.

mod client;
mod endpoints;
mod source;

pub use client::{DEFAULT_PAGE_TIMEOUT, InventoryClient};
pub use endpoints::{GAME_PASS_ASSET_TYPE, PAGE_SIZE, SORT_ORDER};
pub use source::HttpInventory;
