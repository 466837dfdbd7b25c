//! Catalog Errors
//!
//! Every way a fetch cycle can fail. The view treats all of them the same.

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),
    #[error("catalog service returned HTTP {0}")]
    Status(u16),
    #[error("invalid catalog payload: {0}")]
    Decode(String),
    #[error("malformed coffee record {id}: {reason}")]
    Malformed { id: i64, reason: String },
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

impl From<gloo_net::Error> for CatalogError {
    fn from(err: gloo_net::Error) -> Self {
        CatalogError::Network(err.to_string())
    }
}
