// src/session/http.rs
// =============================================================================
// The HTTP session used for one catalog walk.
//
// Lifecycle:
// 1. Session::open() builds a reqwest::Client
// 2. The walker borrows the session and fetches pages through it
// 3. The session is released by close(), or by Drop when it goes out of
//    scope early (for example when the walk returns an error through ?)
//
// Rust concepts:
// - Drop: Runs when a value goes out of scope, on every exit path
// - async/await: reqwest is async, but we only ever await one request at a time
// =============================================================================

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::PageFetcher;
use crate::catalog::CatalogError;

const USER_AGENT: &str = concat!("catalog-scraper/", env!("CARGO_PKG_VERSION"));

/// Settings for the underlying HTTP client
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Per-request timeout. None keeps reqwest's default (no timeout)
    pub timeout: Option<Duration>,
    /// User-Agent header. None sends "catalog-scraper/<version>"
    pub user_agent: Option<String>,
}

/// One HTTP client, alive for the duration of a walk
pub struct Session {
    client: Client,
    requests: AtomicUsize,
}

impl Session {
    /// Acquires the HTTP client
    pub fn open(config: SessionConfig) -> Result<Self, CatalogError> {
        // One client for the whole walk; reqwest pools connections inside it
        let user_agent = config.user_agent.as_deref().unwrap_or(USER_AGENT);
        let mut builder = Client::builder().user_agent(user_agent);

        // Only override the timeout when the caller asked for one
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        // Building fails before any request is sent (e.g. an invalid header
        // value), so it is reported as a client error rather than a network one
        let client = builder.build().map_err(CatalogError::Client)?;
        debug!(timeout = ?config.timeout, "http session opened");

        Ok(Self {
            client,
            requests: AtomicUsize::new(0),
        })
    }

    /// Releases the session explicitly
    ///
    /// Equivalent to dropping it; exists so call sites read as
    /// open / use / close.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        // Dropping the last Client handle closes its pooled connections
        debug!(requests = self.requests.load(Ordering::Relaxed), "http session closed");
    }
}

#[async_trait]
impl PageFetcher for Session {
    async fn fetch(&self, url: &Url) -> Result<String, CatalogError> {
        // Counted for the "session closed" log line
        self.requests.fetch_add(1, Ordering::Relaxed);
        debug!(%url, "GET");

        // Transport failures (DNS, connect, timeout) become CatalogError::Network via ?
        let response = self.client.get(url.clone()).send().await?;

        // Only 200 OK carries a listing page. Anything else, including other
        // 2xx codes such as 204 No Content, fails the walk
        let status = response.status();
        if status != StatusCode::OK {
            return Err(CatalogError::RequestFailed {
                url: url.to_string(),
                status,
            });
        }

        // Read raw bytes and decode strictly; a page that is not UTF-8 is not
        // something the extractor can trust
        let body = response.bytes().await?;
        String::from_utf8(body.to_vec())
            .map_err(|e| CatalogError::parse(format!("body of {} is not UTF-8: {}", url, e)))
    }
}
