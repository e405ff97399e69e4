// src/catalog/fixtures.rs
// Hand-built listing pages that follow the catalog's markup, for tests only.

pub struct FixtureProduct {
    pub name: String,
    pub path: String,
    pub price: String,
}

impl FixtureProduct {
    pub fn new(name: &str, path: &str, price: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            price: price.to_string(),
        }
    }
}

// Renders a listing page with the given products
//
// has_next adds the "next page" navigation link
pub fn listing_page(products: &[FixtureProduct], has_next: bool) -> String {
    let mut items = String::new();
    for product in products {
        items.push_str(&format!(
            r#"
        <article class="l-product l-product__horizontal">
          <a itemprop="url" href="{path}"><span itemprop="name">{name}</span></a>
          <div class="l-product__price">
            <span itemprop="price">{price}</span>
            <span itemprop="priceCurrency">RUB</span>
          </div>
        </article>"#,
            path = product.path,
            name = product.name,
            price = product.price,
        ));
    }

    let navigation = if has_next {
        r#"<div class="pager"><a id="navigation_2_next_page" href="?PAGEN_2=next">Далее</a></div>"#
    } else {
        r#"<div class="pager"></div>"#
    };

    format!(
        r#"<!DOCTYPE html>
<html>
  <head><title>Каталог</title></head>
  <body>
    <div class="lvl1__product-body lvl2 hidden lvl1__product-body-searchresult">{items}
    </div>
    {navigation}
  </body>
</html>"#
    )
}

// Shorthand for a page of simple products named "<prefix> <n>"
pub fn numbered_page(prefix: &str, count: usize, has_next: bool) -> String {
    let products: Vec<_> = (1..=count)
        .map(|n| FixtureProduct::new(&format!("{} {}", prefix, n), &format!("/p/{}-{}/", prefix, n), &(n * 100).to_string()))
        .collect();
    listing_page(&products, has_next)
}
