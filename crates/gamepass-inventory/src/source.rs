//! HTTP-backed inventory source.

use async_trait::async_trait;
use tracing::{debug, instrument};

use gamepass_core::{InventoryPage, InventorySource, InventoryUrl, PageCursor, Result, UserId};

use crate::client::InventoryClient;
use crate::endpoints::{InventoryQuery, InventoryResponse};

/// Lists game passes through the public inventory API.
#[derive(Debug, Clone)]
pub struct HttpInventory {
    client: InventoryClient,
}

impl HttpInventory {
    /// Create a source backed by `client`.
    pub fn new(client: InventoryClient) -> Self {
        Self { client }
    }

    /// Returns the API base for this source.
    pub fn url(&self) -> &InventoryUrl {
        self.client.base()
    }
}

#[async_trait]
impl InventorySource for HttpInventory {
    #[instrument(skip(self, cursor), fields(has_cursor = cursor.is_some()))]
    async fn fetch_page(
        &self,
        user: UserId,
        cursor: Option<&PageCursor>,
    ) -> Result<InventoryPage> {
        let url = self.client.base().user_inventory_url(user);
        let query = InventoryQuery::game_passes(cursor);

        let response: InventoryResponse = self.client.query(&url, &query).await?;
        let page = InventoryPage::from(response);

        debug!(
            records = page.records.len(),
            more = page.next_cursor.is_some(),
            "fetched inventory page"
        );

        Ok(page)
    }
}
