//! Inventory source trait.

use async_trait::async_trait;

use crate::Result;
use crate::inventory::InventoryPage;
use crate::types::{PageCursor, UserId};

/// Something that can list one page of a user's inventory.
///
/// Implementations perform exactly one upstream request per call and report
/// non-success statuses as [`Error::Upstream`](crate::Error::Upstream) and
/// network or decoding failures as
/// [`Error::Transport`](crate::Error::Transport).
#[async_trait]
pub trait InventorySource: Send + Sync {
    /// Fetch the page of `user`'s inventory that starts at `cursor`, or the
    /// first page when `cursor` is `None`.
    async fn fetch_page(&self, user: UserId, cursor: Option<&PageCursor>)
    -> Result<InventoryPage>;
}
