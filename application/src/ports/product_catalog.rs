//! Product catalog port
//!
//! Read-only access to the remote product database.

use async_trait::async_trait;
use barista_domain::Product;
use thiserror::Error;

/// Errors that can occur while reading the catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Catalog returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Malformed catalog data: {0}")]
    MalformedData(String),

    #[error("No product catalog configured")]
    NotConfigured,
}

/// Source of product records
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetch every product record
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Catalog used when no product source is configured; every fetch fails
/// with [`CatalogError::NotConfigured`].
pub struct NoCatalog;

#[async_trait]
impl ProductCatalog for NoCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        Err(CatalogError::NotConfigured)
    }
}
