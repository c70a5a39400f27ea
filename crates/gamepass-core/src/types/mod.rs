//! Core domain types.
//!
//! These types enforce their invariants at construction time, so a
//! `UserId` in hand is always a valid identity.

mod inventory_url;
mod page_cursor;
mod user_id;

pub use inventory_url::{DEFAULT_INVENTORY_URL, InventoryUrl};
pub use page_cursor::PageCursor;
pub use user_id::UserId;
