//! Axum route handlers for the relay.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use gamepass_core::{InventorySource, UserId, fetch_created_assets};

use crate::error::RelayError;

// ── Shared state ─────────────────────────────────────────────────────────────

/// State shared by every request.
#[derive(Clone)]
pub struct AppState {
    inventory: Arc<dyn InventorySource>,
    report_partial: bool,
}

impl AppState {
    /// State backed by `inventory`, with the silent partial-result contract.
    pub fn new(inventory: Arc<dyn InventorySource>) -> Self {
        Self {
            inventory,
            report_partial: false,
        }
    }

    /// Add a `complete` flag to successful responses when `enabled`.
    pub fn with_partial_reporting(mut self, enabled: bool) -> Self {
        self.report_partial = enabled;
        self
    }
}

// ── Response types ───────────────────────────────────────────────────────────

/// Body of a successful `/gamepasses` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePassesResponse {
    pub success: bool,
    pub game_pass_ids: Vec<u64>,
    /// Present only when partial reporting is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,
}

// ── Router ───────────────────────────────────────────────────────────────────

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/gamepasses/{user_id}", get(game_passes))
        .route("/gamepasses/{user_id}/", get(game_passes))
        .route("/gamepasses/", get(missing_user_id))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// `GET /health`: liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /gamepasses/{user_id}`: ids of the game passes the user created.
///
/// A trailing slash after the id is accepted.
///
/// Upstream failures are absorbed: the response is still a success carrying
/// whatever was collected before the failure.
///
/// # Errors
/// Returns [`RelayError::InvalidUserId`] if the id is not a non-negative
/// integer. The inventory is not queried in that case.
pub async fn game_passes(
    State(state): State<AppState>,
    user_id: Result<Path<String>, PathRejection>,
) -> Result<Json<GamePassesResponse>, RelayError> {
    let user = user_id
        .ok()
        .and_then(|Path(raw)| match UserId::parse(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                debug!(error = %e, "rejecting user id");
                None
            }
        })
        .ok_or(RelayError::InvalidUserId)?;

    info!(user_id = %user, "request received");

    let outcome = fetch_created_assets(&*state.inventory, user).await;
    let complete = outcome.is_complete();
    let game_pass_ids = outcome.asset_ids();

    info!(
        user_id = %user,
        count = game_pass_ids.len(),
        complete,
        "returning game passes"
    );

    Ok(Json(GamePassesResponse {
        success: true,
        game_pass_ids,
        complete: state.report_partial.then_some(complete),
    }))
}

/// `GET /gamepasses/`: an empty id is never valid.
pub async fn missing_user_id() -> RelayError {
    RelayError::InvalidUserId
}
