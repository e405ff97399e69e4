// src/catalog/page.rs
// =============================================================================
// This module extracts product records from one catalog page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
//
// The page layout is described by PageSelectors, a small declarative contract:
// which element holds the listing, which elements are products, where the
// name/url/price live inside a product, and which element links to the next
// page. Tests build their own documents against the same contract.
//
// Rust concepts:
// - Result<T, E>: Every missing element is a hard error, not an empty result
// - Iterators: document.select() yields matching elements lazily
// =============================================================================

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::error::CatalogError;
use super::product::Product;

// Layout of the catalog's listing pages
pub const CONTAINER_SELECTOR: &str =
    "div.lvl1__product-body.lvl2.hidden.lvl1__product-body-searchresult";
pub const PRODUCT_SELECTOR: &str = "article.l-product.l-product__horizontal";
pub const NAME_SELECTOR: &str = r#"span[itemprop="name"]"#;
pub const URL_SELECTOR: &str = r#"a[itemprop="url"]"#;
pub const PRICE_SELECTOR: &str = r#"span[itemprop="price"]"#;
pub const NEXT_PAGE_SELECTOR: &str = "a#navigation_2_next_page";

/// The result of extracting one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// True when the page has no "next page" control
    pub is_last: bool,
    /// Products in the order they appear on the page
    pub products: Vec<Product>,
}

/// Compiled CSS selectors describing a listing page
#[derive(Debug, Clone)]
pub struct PageSelectors {
    container: Selector,
    product: Selector,
    name: Selector,
    url: Selector,
    price: Selector,
    next_page: Selector,
}

impl PageSelectors {
    /// Compiles a custom layout
    ///
    /// Returns InvalidInput if any selector string is not valid CSS.
    pub fn new(
        container: &str,
        product: &str,
        name: &str,
        url: &str,
        price: &str,
        next_page: &str,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            container: compile(container)?,
            product: compile(product)?,
            name: compile(name)?,
            url: compile(url)?,
            price: compile(price)?,
            next_page: compile(next_page)?,
        })
    }
}

impl Default for PageSelectors {
    fn default() -> Self {
        // The built-in selectors are constants, so failing here is a
        // programmer error rather than a runtime condition
        Self::new(
            CONTAINER_SELECTOR,
            PRODUCT_SELECTOR,
            NAME_SELECTOR,
            URL_SELECTOR,
            PRICE_SELECTOR,
            NEXT_PAGE_SELECTOR,
        )
        .expect("built-in page selectors are valid CSS")
    }
}

fn compile(selector: &str) -> Result<Selector, CatalogError> {
    Selector::parse(selector)
        .map_err(|e| CatalogError::invalid(format!("bad selector '{}': {:?}", selector, e)))
}

// Parses raw HTML and extracts the page
//
// Parameters:
//   html: the page body
//   selectors: the layout contract
//   base: the catalog host, used to turn relative product paths into URLs
pub fn parse_page(html: &str, selectors: &PageSelectors, base: &Url) -> Result<Page, CatalogError> {
    let document = Html::parse_document(html);
    extract_page(&document, selectors, base)
}

// Extracts (is_last, products) from an already parsed document
//
// Fails with a parse error if the listing container is missing, or if any
// product lacks a name, a link or a numeric price. A single bad product
// fails the whole page.
pub fn extract_page(
    document: &Html,
    selectors: &PageSelectors,
    base: &Url,
) -> Result<Page, CatalogError> {
    let container = document
        .select(&selectors.container)
        .next()
        .ok_or_else(|| CatalogError::parse("product list container not found"))?;

    let products = container
        .select(&selectors.product)
        .enumerate()
        .map(|(position, element)| extract_product(element, selectors, base, position))
        .collect::<Result<Vec<_>, _>>()?;

    // Note the inversion: a "next" control means there IS another page
    let is_last = document.select(&selectors.next_page).next().is_none();

    Ok(Page { is_last, products })
}

fn extract_product(
    element: ElementRef<'_>,
    selectors: &PageSelectors,
    base: &Url,
    position: usize,
) -> Result<Product, CatalogError> {
    let name = element
        .select(&selectors.name)
        .next()
        .map(text_of)
        .ok_or_else(|| CatalogError::parse(format!("product #{}: name not found", position)))?;

    let href = element
        .select(&selectors.url)
        .next()
        .and_then(|link| link.value().attr("href"))
        .ok_or_else(|| CatalogError::parse(format!("product #{}: link not found", position)))?;

    let url = base.join(href).map_err(|e| {
        CatalogError::parse(format!("product #{}: bad link '{}': {}", position, href, e))
    })?;

    let price_text = element
        .select(&selectors.price)
        .next()
        .map(text_of)
        .ok_or_else(|| CatalogError::parse(format!("product #{}: price not found", position)))?;

    let price = price_text.parse::<u64>().map_err(|_| {
        CatalogError::parse(format!(
            "product #{}: price '{}' is not an integer",
            position, price_text
        ))
    })?;

    Ok(Product::new(name, url, price))
}

// Concatenates all text nodes below an element and trims the result
fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why collect::<Result<Vec<_>, _>>()?
//    - The map() produces an iterator of Result<Product, CatalogError>
//    - Collecting into Result<Vec<..>> stops at the first Err and returns it
//    - If every item is Ok, we get Ok(Vec<Product>)
//
// 2. Why is Html not kept around?
//    - scraper::Html is not Send, so it must not live across an .await
//    - parse_page() builds and drops it synchronously
//
// 3. What does base.join() do?
//    - Resolves "/product/123/" against "https://www.maxidom.ru/"
//    - Absolute hrefs are returned unchanged
// -----------------------------------------------------------------------------
