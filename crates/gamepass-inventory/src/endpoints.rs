//! Inventory endpoint parameters and request/response types.

use serde::{Deserialize, Serialize};

use gamepass_core::{InventoryPage, InventoryRecord, PageCursor};

// ============================================================================
// Listing Parameters
// ============================================================================

/// Asset type id for game passes.
pub const GAME_PASS_ASSET_TYPE: u32 = 34;

/// Largest page size the inventory API accepts.
pub const PAGE_SIZE: u32 = 100;

/// Oldest assets first.
pub const SORT_ORDER: &str = "Asc";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for the inventory listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryQuery<'a> {
    pub asset_types: u32,
    pub limit: u32,
    pub sort_order: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<&'a str>,
}

impl<'a> InventoryQuery<'a> {
    /// Game pass listing at the given cursor.
    pub fn game_passes(cursor: Option<&'a PageCursor>) -> Self {
        Self {
            asset_types: GAME_PASS_ASSET_TYPE,
            limit: PAGE_SIZE,
            sort_order: SORT_ORDER,
            cursor: cursor.map(PageCursor::as_str),
        }
    }
}

/// Response from the inventory listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryResponse {
    #[serde(default)]
    pub data: Option<Vec<InventoryEntry>>,
    #[serde(default)]
    pub next_page_cursor: Option<String>,
}

/// A single asset entry from the listing. Other upstream fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryEntry {
    pub asset_id: u64,
    #[serde(default)]
    pub creator_id: Option<u64>,
}

impl From<InventoryResponse> for InventoryPage {
    fn from(response: InventoryResponse) -> Self {
        let records = response
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|e| InventoryRecord::new(e.asset_id, e.creator_id))
            .collect();

        InventoryPage {
            records,
            next_cursor: PageCursor::from_next(response.next_page_cursor),
        }
    }
}

/// Error response format.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<ErrorEntry>,
}

/// One entry of an error response.
#[derive(Debug, Deserialize)]
pub struct ErrorEntry {
    pub code: Option<i64>,
    pub message: Option<String>,
}
