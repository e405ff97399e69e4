// src/session/mod.rs
// =============================================================================
// This module owns the HTTP side of a catalog walk.
//
// Submodules:
// - http: The Session type wrapping one reqwest::Client
//
// The PageFetcher trait is the seam between the walker and the network. The
// walker only ever asks "give me the body at this URL", so tests can swap in
// a scripted fetcher and count the calls.
// =============================================================================

mod http;

pub use http::{Session, SessionConfig};

use async_trait::async_trait;
use url::Url;

use crate::catalog::CatalogError;

/// Something that can GET a page and return its body as text
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns the body
    ///
    /// Non-success status codes must be reported as
    /// `CatalogError::RequestFailed`.
    async fn fetch(&self, url: &Url) -> Result<String, CatalogError>;
}
