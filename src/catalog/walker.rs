// src/catalog/walker.rs
// =============================================================================
// This module walks every page of one catalog segment.
//
// How it works:
// 1. Validate the catalog URL and pull out the segment
//    ("https://www.maxidom.ru/catalog/tovary-dlya-poliva/" -> "tovary-dlya-poliva")
// 2. Fetch page 1, 2, 3, ... one at a time
// 3. Extract the products of each page and append them in order
// 4. Stop on the first page without a "next page" control
//
// Termination relies on the markup, so the loop is also bounded:
// - max_pages caps the number of requests
// - a page that repeats the previous one ends the walk
// Both cases are logged as warnings.
//
// Rust concepts:
// - Generics: Walker works with any PageFetcher (real session or test fake)
// - Lifetimes: The walker borrows the fetcher, it never owns it
// =============================================================================

use tracing::{debug, info, warn};
use url::Url;

use super::error::CatalogError;
use super::page::{parse_page, Page, PageSelectors};
use super::product::Product;
use crate::session::PageFetcher;

pub const DEFAULT_BASE_URL: &str = "https://www.maxidom.ru/";
pub const DEFAULT_PAGE_SIZE: usize = 30;
pub const DEFAULT_MAX_PAGES: usize = 1000;

// Query parameter names understood by the catalog
const PAGE_SIZE_PARAM: &str = "amount";
const PAGE_NUMBER_PARAM: &str = "PAGEN_2";

/// Everything the walker needs to know about the catalog site
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Scheme + host of the catalog; product paths are joined onto it
    pub base: Url,
    /// Products requested per page
    pub page_size: usize,
    /// Upper bound on fetched pages
    pub max_pages: usize,
    /// Page layout
    pub selectors: PageSelectors,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
            selectors: PageSelectors::default(),
        }
    }
}

/// Drives the page-by-page loop for one catalog segment
pub struct Walker<'a, F: PageFetcher + ?Sized> {
    fetcher: &'a F,
    config: WalkerConfig,
}

impl<'a, F: PageFetcher + ?Sized> Walker<'a, F> {
    pub fn new(fetcher: &'a F, config: WalkerConfig) -> Self {
        Self { fetcher, config }
    }

    /// Collects every product of the catalog segment at `catalog_url`
    ///
    /// Products come back in page order, then in on-page order. Any failed
    /// request or unparseable page aborts the walk and nothing is returned.
    pub async fn walk(&self, catalog_url: &str) -> Result<Vec<Product>, CatalogError> {
        let config = &self.config;

        // Reject settings that could never produce a sensible request
        if config.page_size == 0 {
            return Err(CatalogError::invalid("page size must be at least 1"));
        }
        if config.max_pages == 0 {
            return Err(CatalogError::invalid("max pages must be at least 1"));
        }

        // Validate the URL before touching the network
        let segment = parse_segment(catalog_url, &config.base)?;
        info!(%segment, page_size = config.page_size, "walking catalog");

        // Everything collected so far, in page order
        let mut products: Vec<Product> = Vec::new();

        // How many products the previous page added (for the repeat check)
        let mut previous_len = 0;

        // Pages are numbered from 1; the range doubles as the hard cap
        for page in 1..=config.max_pages {
            let url = page_url(&config.base, &segment, config.page_size, page);

            // Any failed request ends the walk here, dropping what we collected
            let body = self.fetcher.fetch(&url).await?;

            // Same for a page we can't make sense of
            let Page {
                is_last,
                products: page_products,
            } = parse_page(&body, &config.selectors, &config.base)?;
            debug!(page, count = page_products.len(), is_last, "page extracted");

            // No "next page" control: this is the final page
            if is_last {
                products.extend(page_products);
                info!(%segment, pages = page, products = products.len(), "catalog walk finished");
                return Ok(products);
            }

            if page_products.is_empty() {
                // Suspicious but not fatal: keep following the next link
                warn!(page, %url, "page links to a next page but lists no products");
            } else if previous_len == page_products.len()
                && products[products.len() - previous_len..] == page_products[..]
            {
                // The site served the same page again (e.g. it ignored
                // PAGEN_2), so following "next" would loop until the cap
                warn!(
                    page,
                    %url,
                    "page repeats the previous page; stopping before the loop runs away"
                );
                return Ok(products);
            }

            previous_len = page_products.len();
            products.extend(page_products);
        }

        // Only reached when every page up to the cap had a "next" control
        warn!(
            %segment,
            max_pages = config.max_pages,
            products = products.len(),
            "page cap reached before the last page; result may be incomplete"
        );
        Ok(products)
    }
}

// Extracts the catalog segment from a catalog URL
//
// Accepted shape: <base scheme>://<base host>/catalog/<segment>[/]
// A query string or fragment is ignored; any further path is rejected,
// since it would name a different listing than the one we'd scrape.
//
// Example:
//   "https://www.maxidom.ru/catalog/tovary-dlya-poliva/" -> "tovary-dlya-poliva"
pub fn parse_segment(catalog_url: &str, base: &Url) -> Result<String, CatalogError> {
    let url = Url::parse(catalog_url)
        .map_err(|e| CatalogError::invalid(format!("'{}' is not a URL: {}", catalog_url, e)))?;

    if url.scheme() != base.scheme()
        || url.host_str() != base.host_str()
        || url.port_or_known_default() != base.port_or_known_default()
    {
        return Err(CatalogError::invalid(format!(
            "'{}' is not on {}",
            catalog_url,
            base.origin().ascii_serialization()
        )));
    }

    let mut segments = url.path_segments().into_iter().flatten();

    // Expect exactly "catalog", the segment, then nothing or a trailing slash
    // (which shows up as one empty item)
    match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some("catalog"), Some(segment), None | Some(""), None) if !segment.is_empty() => {
            Ok(segment.to_string())
        }
        _ => Err(CatalogError::invalid(format!(
            "'{}' is not a catalog URL (expected /catalog/<segment>/)",
            catalog_url
        ))),
    }
}

// Builds the URL of one listing page
//
// Example (page_size = 30, page = 2):
//   https://www.maxidom.ru/catalog/tovary-dlya-poliva/?amount=30&PAGEN_2=2
pub fn page_url(base: &Url, segment: &str, page_size: usize, page: usize) -> Url {
    let mut url = base.clone();
    url.set_path(&format!("/catalog/{}/", segment));
    url.set_query(None);
    url.set_fragment(None);
    url.query_pairs_mut()
        .append_pair(PAGE_SIZE_PARAM, &page_size.to_string())
        .append_pair(PAGE_NUMBER_PARAM, &page.to_string());
    url
}
