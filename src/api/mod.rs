//! Catalog Service Bindings
//!
//! The `CatalogSource` seam plus URL and payload handling shared by every source.

mod http;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::error::{CatalogError, CatalogResult};
use crate::models::{CoffeeItem, FilterState};

pub use http::HttpCatalog;

/// Anything that can answer a catalog request.
///
/// Futures are not `Send`: sources run on the browser's single thread.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Fetch the catalog, filtered server-side when `filter` names a type
    async fn fetch_catalog(&self, filter: FilterState) -> CatalogResult<Vec<CoffeeItem>>;
}

/// `{base}/coffee`, with `?coffeeType=` only when the filter names a type
pub fn catalog_url(base_url: &str, filter: FilterState) -> String {
    let mut url = format!("{}/coffee", base_url.trim_end_matches('/'));
    if let Some(coffee_type) = filter.coffee_type() {
        url.push_str("?coffeeType=");
        url.extend(utf8_percent_encode(coffee_type.as_str(), NON_ALPHANUMERIC));
    }
    url
}

/// Decode a response body and check every record against the data model
pub fn parse_catalog(body: &str) -> CatalogResult<Vec<CoffeeItem>> {
    let items: Vec<CoffeeItem> = serde_json::from_str(body)?;
    for item in &items {
        validate(item)?;
    }
    Ok(items)
}

fn validate(item: &CoffeeItem) -> CatalogResult<()> {
    let reason = if item.name.trim().is_empty() {
        "empty name"
    } else if !item.price.is_finite() || item.price < 0.0 {
        "price must be a non-negative number"
    } else {
        return Ok(());
    };
    Err(CatalogError::Malformed {
        id: item.id,
        reason: reason.to_string(),
    })
}
