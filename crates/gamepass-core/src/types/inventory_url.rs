//! Inventory API base URL type.

use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

use super::UserId;

/// The public inventory API host.
pub const DEFAULT_INVENTORY_URL: &str = "https://inventory.roblox.com";

/// A validated base URL for the inventory API.
///
/// The URL must be absolute and use HTTPS (HTTP is allowed for localhost so
/// tests can point at a local mock server).
///
/// # Example
///
/// ```
/// use gamepass_core::{InventoryUrl, UserId};
///
/// let base = InventoryUrl::new("https://inventory.roblox.com").unwrap();
/// assert_eq!(base.user_inventory_url(UserId::new(42)),
///            "https://inventory.roblox.com/v2/users/42/inventory");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InventoryUrl(Url);

impl InventoryUrl {
    /// Create a new inventory URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::InventoryUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the listing endpoint for one user's inventory.
    pub fn user_inventory_url(&self, user: UserId) -> String {
        // Url always renders a root path as "/", so trim before joining
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/v2/users/{}/inventory", base, user)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::InventoryUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::InventoryUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::InventoryUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        if url.query().is_some() {
            return Err(InvalidInputError::InventoryUrl {
                value: original.to_string(),
                reason: "must not carry a query string".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for InventoryUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for InventoryUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
