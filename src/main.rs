// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Open an HTTP session and walk the catalog segment
// 3. Print the products (table, JSON, or name -> price index) and the count
// 4. Exit with 0 on success, 1 on any error
//
// Rust concepts used:
// - async/await: reqwest is async, so main runs inside a tokio runtime
// - Result<T, E>: For error handling
// - Drop: The session releases its connections even when the walk fails
// =============================================================================

mod catalog;  // src/catalog/ - page extraction and the page walker
mod cli;      // src/cli.rs - command-line parsing
mod logging;  // src/logging.rs - tracing setup
mod session;  // src/session/ - the HTTP session

use anyhow::{Context, Result};
use clap::Parser;
use indexmap::IndexMap;

use catalog::{index_by_name, Product, Walker};
use cli::Cli;
use session::Session;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let products = scrape(&cli).await?;

    if cli.by_name {
        print_index(&index_by_name(&products), cli.json)?;
    } else {
        print_products(&products, cli.json)?;
    }

    Ok(())
}

// Opens a session, walks the catalog, closes the session
//
// If walk() fails, the ? returns early and the session is dropped on the way
// out, which releases it just like close() would.
async fn scrape(cli: &Cli) -> Result<Vec<Product>> {
    let session = Session::open(cli.session_config()).context("could not open HTTP session")?;

    let products = Walker::new(&session, cli.walker_config())
        .walk(&cli.catalog_url)
        .await
        .with_context(|| format!("failed to scrape {}", cli.catalog_url))?;

    session.close();
    Ok(products)
}

fn print_products(products: &[Product], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(products)?);
        // stdout stays valid JSON, the count goes next to the logs
        eprintln!("Products: {}", products.len());
    } else {
        println!("{:<50} {:>10}  {}", "NAME", "PRICE", "URL");
        println!("{}", "=".repeat(110));

        for product in products {
            println!(
                "{:<50} {:>10}  {}",
                truncate(&product.name, 50),
                product.price,
                product.url
            );
        }
        println!();
        println!("Products: {}", products.len());
    }
    Ok(())
}

fn print_index(index: &IndexMap<String, u64>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(index)?);
        eprintln!("Products: {}", index.len());
    } else {
        println!("{:<50} {:>10}", "NAME", "PRICE");
        println!("{}", "=".repeat(61));

        for (name, price) in index {
            println!("{:<50} {:>10}", truncate(name, 50), price);
        }
        println!();
        println!("Products: {}", index.len());
    }
    Ok(())
}

// Shortens a string to `max` characters, counting chars rather than bytes so
// multi-byte (e.g. Cyrillic) names are never split mid-character
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max - 3).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}
