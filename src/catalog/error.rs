// src/catalog/error.rs
// =============================================================================
// The error type shared by the catalog walker, the page extractor and the
// HTTP session.
//
// Every variant aborts the walk. Nothing is retried and no partial result is
// handed back to the caller.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - #[from]: lets the ? operator convert reqwest errors automatically
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog URL, a selector or a setting was rejected before any request
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The server answered with a non-success status code
    #[error("request to {url} failed: HTTP {status}")]
    RequestFailed { url: String, status: StatusCode },

    /// The HTTP client could not be built, so no request was sent
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (DNS, connect, timeout, ...)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The page did not have the expected structure
    #[error("parse error: {0}")]
    Parse(String),
}

impl CatalogError {
    pub fn parse(message: impl Into<String>) -> Self {
        CatalogError::Parse(message.into())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        CatalogError::InvalidInput(message.into())
    }
}
