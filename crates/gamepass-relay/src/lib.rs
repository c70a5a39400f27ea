//! gamepass-relay - HTTP relay listing the game passes a user created.
//!
//! Exposes `GET /gamepasses/{userId}`, which walks the user's inventory
//! through an [`InventorySource`](gamepass_core::InventorySource) and
//! answers with the ids of the passes that user created.

pub mod config;
pub mod error;
pub mod routes;

pub use config::RelayConfig;
pub use error::RelayError;
pub use routes::{AppState, GamePassesResponse, create_router};
