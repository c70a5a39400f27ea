//! gamepass-core - Core types and traits for the game pass relay.
//!
//! The relay lists a user's inventory page by page through an
//! [`InventorySource`] and keeps only the assets that user created.
//!
//! # Example
//!
//! ```no_run
//! use gamepass_core::{InventorySource, UserId, fetch_created_assets};
//!
//! # async fn example(source: &dyn InventorySource) {
//! let outcome = fetch_created_assets(source, UserId::new(42)).await;
//! for id in outcome.asset_ids() {
//!     println!("{id}");
//! }
//! # }
//! ```

pub mod error;
pub mod fetch;
pub mod inventory;
pub mod traits;
pub mod types;

pub use error::Error;
pub use fetch::fetch_created_assets;
pub use inventory::{Completion, FetchOutcome, InventoryPage, InventoryRecord};
pub use traits::InventorySource;
pub use types::{DEFAULT_INVENTORY_URL, InventoryUrl, PageCursor, UserId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
