//! Inventory HTTP client implementation.

use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use gamepass_core::error::{Error, TransportError, UpstreamError};
use gamepass_core::{InventoryUrl, Result};

use crate::endpoints::ErrorResponse;

/// Default bound on a single page request.
pub const DEFAULT_PAGE_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the inventory API.
#[derive(Debug, Clone)]
pub struct InventoryClient {
    client: reqwest::Client,
    base: InventoryUrl,
    page_timeout: Duration,
}

impl InventoryClient {
    /// Create a new client for the given API base with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the TLS backend cannot be initialized.
    pub fn new(base: InventoryUrl) -> Result<Self> {
        Self::with_timeout(base, DEFAULT_PAGE_TIMEOUT)
    }

    /// Create a new client whose page requests give up after `page_timeout`.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the TLS backend cannot be initialized.
    pub fn with_timeout(base: InventoryUrl, page_timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("gamepass-relay/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| transport_error(e, page_timeout))?;

        Ok(Self {
            client,
            base,
            page_timeout,
        })
    }

    /// Returns the API base this client is configured for.
    pub fn base(&self) -> &InventoryUrl {
        &self.base
    }

    /// Returns the per-request timeout.
    pub fn page_timeout(&self) -> Duration {
        self.page_timeout
    }

    /// Make a GET request against `url` and decode the JSON body.
    #[instrument(skip(self, params), fields(base = %self.base))]
    pub async fn query<Q, R>(&self, url: &str, params: &Q) -> Result<R>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!(url, "inventory query");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(url)
            .query(params)
            .timeout(self.page_timeout)
            .send()
            .await
            .map_err(|e| transport_error(e, self.page_timeout))?;

        self.handle_response(response).await
    }

    /// Handle a response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(&self, response: reqwest::Response) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "inventory response");

        if status.is_success() {
            response
                .json::<R>()
                .await
                .map_err(|e| transport_error(e, self.page_timeout))
        } else {
            Err(Error::Upstream(self.parse_error_response(response).await))
        }
    }

    /// Parse an error response, keeping the first error entry if there is one.
    async fn parse_error_response(&self, response: reqwest::Response) -> UpstreamError {
        let status = response.status().as_u16();

        match response.json::<ErrorResponse>().await {
            Ok(body) => match body.errors.into_iter().next() {
                Some(first) => UpstreamError::new(status, first.code, first.message),
                None => UpstreamError::new(status, None, None),
            },
            Err(_) => UpstreamError::new(status, None, None),
        }
    }
}

/// Classify a reqwest failure.
fn transport_error(err: reqwest::Error, timeout: Duration) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout {
            duration_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        TransportError::Decode {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}
