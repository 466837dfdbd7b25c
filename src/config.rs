//! Application Configuration
//!
//! Resolved once at startup and handed to the app at construction.

use std::str::FromStr;

use wasm_bindgen::JsCast;

/// Used when neither the page nor the build names a catalog service
pub const DEFAULT_CATALOG_BASE_URL: &str = "http://localhost:8080";

const BASE_URL_META: &str = "catalog-base-url";
const LOG_LEVEL_META: &str = "log-level";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog service root, without trailing slash
    pub catalog_base_url: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_BASE_URL)
    }
}

impl AppConfig {
    pub fn new(catalog_base_url: &str) -> Self {
        Self {
            catalog_base_url: catalog_base_url.trim().trim_end_matches('/').to_string(),
            log_level: log::Level::Info,
        }
    }

    /// Pick the first non-blank base URL: page meta tag, then build env, then default.
    pub fn resolve(
        meta_base_url: Option<String>,
        build_base_url: Option<&str>,
        meta_log_level: Option<String>,
    ) -> Self {
        let base_url = meta_base_url
            .as_deref()
            .into_iter()
            .chain(build_base_url)
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(DEFAULT_CATALOG_BASE_URL);

        let log_level = meta_log_level
            .as_deref()
            .and_then(|level| log::Level::from_str(level.trim()).ok())
            .unwrap_or(log::Level::Info);

        Self {
            log_level,
            ..Self::new(base_url)
        }
    }

    /// Read configuration from the hosting page and the build environment
    pub fn from_environment() -> Self {
        Self::resolve(
            read_meta(BASE_URL_META),
            option_env!("CATALOG_BASE_URL"),
            read_meta(LOG_LEVEL_META),
        )
    }
}

/// Content of `<meta name="...">` in the document head
fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    Some(meta.content())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_tag_wins() {
        let config = AppConfig::resolve(
            Some("https://api.example.com/".to_string()),
            Some("http://build:9000"),
            None,
        );
        assert_eq!(config.catalog_base_url, "https://api.example.com");
    }

    #[test]
    fn test_blank_meta_falls_back_to_build_env() {
        let config = AppConfig::resolve(Some("   ".to_string()), Some("http://build:9000"), None);
        assert_eq!(config.catalog_base_url, "http://build:9000");
    }

    #[test]
    fn test_default_base_url() {
        let config = AppConfig::resolve(None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.catalog_base_url, "http://localhost:8080");
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn test_log_level_parsing() {
        let config = AppConfig::resolve(None, None, Some("debug".to_string()));
        assert_eq!(config.log_level, log::Level::Debug);

        let config = AppConfig::resolve(None, None, Some("chatty".to_string()));
        assert_eq!(config.log_level, log::Level::Info);
    }
}
