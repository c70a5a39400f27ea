//! Inventory page and result types.

use crate::error::Error;
use crate::types::{PageCursor, UserId};

/// One asset entry from an inventory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryRecord {
    /// Opaque asset identifier.
    pub asset_id: u64,

    /// Identity of the asset's creator.
    ///
    /// The upstream reports `null` for some assets; those never match.
    pub creator_id: Option<u64>,
}

impl InventoryRecord {
    /// Create a new record.
    pub fn new(asset_id: u64, creator_id: Option<u64>) -> Self {
        Self {
            asset_id,
            creator_id,
        }
    }

    /// Returns `true` if `user` created this asset.
    pub fn is_created_by(&self, user: UserId) -> bool {
        self.creator_id == Some(user.get())
    }
}

/// One decoded page of an inventory listing.
#[derive(Debug, Clone, Default)]
pub struct InventoryPage {
    /// The records on this page, in upstream order.
    pub records: Vec<InventoryRecord>,

    /// Cursor for the next page, if more records exist.
    pub next_cursor: Option<PageCursor>,
}

/// How a fetch ended.
#[derive(Debug)]
pub enum Completion {
    /// Every page was consumed.
    Complete,

    /// An upstream failure stopped pagination early.
    Truncated {
        /// Pages successfully consumed before the failure.
        pages_fetched: usize,
        /// The failure that stopped pagination.
        cause: Error,
    },
}

/// The records created by a user, plus how the fetch ended.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Matching records in the order they were encountered across pages.
    ///
    /// Entries the upstream repeats are kept, not deduplicated.
    pub records: Vec<InventoryRecord>,

    /// Whether the listing was fully drained.
    pub completion: Completion,
}

impl FetchOutcome {
    /// Returns `true` if every page was consumed.
    pub fn is_complete(&self) -> bool {
        matches!(self.completion, Completion::Complete)
    }

    /// Returns the matching asset ids, in result order.
    pub fn asset_ids(&self) -> Vec<u64> {
        self.records.iter().map(|r| r.asset_id).collect()
    }

    /// Returns the error that truncated the fetch, if any.
    pub fn truncation_cause(&self) -> Option<&Error> {
        match &self.completion {
            Completion::Complete => None,
            Completion::Truncated { cause, .. } => Some(cause),
        }
    }
}
