// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The CLI is the only configuration surface: every setting has a default, so
// running the binary with no arguments scrapes the built-in catalog segment.
//
// Rust concepts:
// - Derive macros: #[derive(Parser)] generates the argument parsing code
// - Option<T>: For settings that may be left unset
// =============================================================================

use clap::Parser;
use std::time::Duration;

use crate::catalog::{WalkerConfig, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE};
use crate::session::SessionConfig;

const DEFAULT_CATALOG_URL: &str = "https://www.maxidom.ru/catalog/tovary-dlya-poliva/";

#[derive(Parser, Debug)]
#[command(
    name = "catalog-scraper",
    version,
    about = "Collects name, URL and price for every product in a catalog segment",
    long_about = "catalog-scraper walks a paginated catalog segment page by page, \
                  extracts every product listing and prints the result."
)]
pub struct Cli {
    /// Catalog segment URL (e.g., https://www.maxidom.ru/catalog/tovary-dlya-poliva/)
    #[arg(default_value = DEFAULT_CATALOG_URL)]
    pub catalog_url: String,

    /// Products requested per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Stop after this many pages even if the catalog claims there are more
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: usize,

    /// Per-request timeout in seconds (no timeout when unset)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Output results in JSON format instead of a table
    #[arg(long)]
    pub json: bool,

    /// Print a "name -> price" table keyed by capitalized name instead of
    /// every listing (later duplicates overwrite earlier prices)
    #[arg(long)]
    pub by_name: bool,

    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            page_size: self.page_size,
            max_pages: self.max_pages,
            ..WalkerConfig::default()
        }
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            timeout: self.timeout_secs.map(Duration::from_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}
