// src/catalog/product.rs
// =============================================================================
// The record extracted for every listing, plus the name-keyed view over a
// list of records.
//
// The walker always returns an ordered Vec<Product>. Callers that want a
// "name -> price" table derive it with index_by_name(), so the collision
// policy lives in exactly one place.
// =============================================================================

use indexmap::IndexMap;
use serde::Serialize;

/// One product listing
///
/// Identity is structural: two listings with the same name, URL and price
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Display name as shown on the listing
    pub name: String,
    /// Absolute URL of the product detail page
    pub url: String,
    /// Price as a whole number (no minor units)
    pub price: u64,
}

impl Product {
    pub fn new(name: impl Into<String>, url: impl Into<String>, price: u64) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            price,
        }
    }
}

// Builds a "Capitalized name -> price" map from a list of products
//
// - Keys are normalized with capitalize()
// - When two products share a key, the later one's price wins
// - A key keeps the position where it was first inserted
//
// Example:
//   [("hose", 10), ("Pump", 20), ("HOSE", 15)]
//   -> { "Hose": 15, "Pump": 20 }
pub fn index_by_name(products: &[Product]) -> IndexMap<String, u64> {
    let mut index = IndexMap::with_capacity(products.len());

    for product in products {
        // IndexMap::insert replaces the value but keeps the original slot
        index.insert(capitalize(&product.name), product.price);
    }

    index
}

// Upper-cases the first character and lower-cases the rest
//
// Works on Unicode characters, so Cyrillic names are handled too:
//   "шланг САДОВЫЙ" -> "Шланг садовый"
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
