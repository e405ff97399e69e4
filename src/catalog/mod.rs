// src/catalog/mod.rs
// =============================================================================
// This module contains the catalog scraping logic.
//
// Submodules:
// - product: The Product record and the name -> price index
// - page: Extracts products from one listing page
// - walker: Fetches pages one after another until the last one
// - error: The error type every step reports
//
// Rust concepts:
// - pub use: Re-export items so callers write catalog::Walker
// =============================================================================

mod error;
mod page;
mod product;
mod walker;

#[cfg(test)]
mod fixtures;

pub use error::CatalogError;
pub use product::{index_by_name, Product};
pub use walker::{Walker, WalkerConfig, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE};
