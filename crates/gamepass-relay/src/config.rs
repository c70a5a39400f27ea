//! Process configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use gamepass_core::{InventoryUrl, Result};
use gamepass_inventory::{DEFAULT_PAGE_TIMEOUT, HttpInventory, InventoryClient};

/// Port used when the environment does not provide one.
pub const DEFAULT_PORT: u16 = 3000;

/// Settings resolved once at startup.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Address the HTTP server binds to.
    pub listen: SocketAddr,
    /// Base URL of the inventory API.
    pub upstream: InventoryUrl,
    /// Bound on each upstream page request.
    pub page_timeout: Duration,
    /// Add a `complete` flag to successful responses.
    pub report_partial: bool,
}

impl RelayConfig {
    /// Config listening on all interfaces at [`DEFAULT_PORT`].
    pub fn new(upstream: InventoryUrl) -> Self {
        Self {
            listen: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            upstream,
            page_timeout: DEFAULT_PAGE_TIMEOUT,
            report_partial: false,
        }
    }

    /// Build the HTTP inventory source these settings describe.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn inventory_source(&self) -> Result<HttpInventory> {
        let client = InventoryClient::with_timeout(self.upstream.clone(), self.page_timeout)?;
        Ok(HttpInventory::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamepass_core::DEFAULT_INVENTORY_URL;

    #[test]
    fn defaults() {
        let config = RelayConfig::new(InventoryUrl::new(DEFAULT_INVENTORY_URL).unwrap());
        assert_eq!(config.listen.port(), 3000);
        assert!(config.listen.ip().is_unspecified());
        assert_eq!(config.page_timeout, DEFAULT_PAGE_TIMEOUT);
        assert!(!config.report_partial);
    }

    #[test]
    fn source_uses_configured_upstream() {
        let mut config = RelayConfig::new(InventoryUrl::new("http://localhost:4000").unwrap());
        config.page_timeout = Duration::from_secs(3);
        let source = config.inventory_source().unwrap();
        assert_eq!(source.url().host(), Some("localhost"));
    }
}
