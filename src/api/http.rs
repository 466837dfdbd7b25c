//! HTTP Catalog Source
//!
//! Talks to the catalog service over `fetch`.

use async_trait::async_trait;
use gloo_net::http::Request;

use super::{catalog_url, parse_catalog, CatalogSource};
use crate::config::AppConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{CoffeeItem, FilterState};

#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: String,
}

impl HttpCatalog {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.catalog_base_url.clone(),
        }
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalog {
    async fn fetch_catalog(&self, filter: FilterState) -> CatalogResult<Vec<CoffeeItem>> {
        let url = catalog_url(&self.base_url, filter);
        log::debug!("[Catalog] GET {}", url);

        let response = Request::get(&url).send().await?;
        if !response.ok() {
            return Err(CatalogError::Status(response.status()));
        }
        let body = response.text().await?;
        parse_catalog(&body)
    }
}
