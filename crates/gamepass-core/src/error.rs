//! Error types for gamepass-relay.
//!
//! One unified error type with explicit variants for transport failures,
//! upstream status errors, and input validation.

use std::fmt;
use thiserror::Error;

/// The unified error type for inventory operations.
///
/// Inside the fetcher every variant except [`Error::InvalidInput`] is treated
/// as a reason to stop paginating, never as a failure of the whole request.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, undecodable body).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The inventory API answered with a non-success status.
    #[error("upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// Input validation errors (user id, upstream base URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// The response body could not be decoded.
    #[error("malformed response body: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-success response from the inventory API.
#[derive(Debug)]
pub struct UpstreamError {
    /// HTTP status code.
    pub status: u16,
    /// Upstream error code (if the body carried one).
    pub code: Option<i64>,
    /// Error message from the upstream body.
    pub message: Option<String>,
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for UpstreamError {}

impl UpstreamError {
    /// Create a new upstream error.
    pub fn new(status: u16, code: Option<i64>, message: Option<String>) -> Self {
        Self {
            status,
            code,
            message,
        }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid user id.
    #[error("invalid user id '{value}': {reason}")]
    UserId { value: String, reason: String },

    /// Invalid inventory API base URL.
    #[error("invalid inventory URL '{value}': {reason}")]
    InventoryUrl { value: String, reason: String },
}

impl Error {
    /// Returns the upstream status code, if this error came from one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Error::Upstream(e) => Some(e.status),
            _ => None,
        }
    }
}
