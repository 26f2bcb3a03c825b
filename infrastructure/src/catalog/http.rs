//! HTTP product catalog.
//!
//! Reads `GET {base_url}/{collection}.json[?auth=<token>]`. The store returns
//! either an object keyed by record id or, for integer-like ids, an array
//! that may contain `null` holes.

use async_trait::async_trait;
use barista_application::{CatalogError, ProductCatalog};
use barista_domain::Product;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur when reading the catalog over HTTP
#[derive(Error, Debug)]
pub enum CatalogHttpError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Response is not JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Expected an object or array of products, got {0}")]
    UnexpectedShape(&'static str),
}

impl From<CatalogHttpError> for CatalogError {
    fn from(err: CatalogHttpError) -> Self {
        match err {
            CatalogHttpError::Request(e) => CatalogError::ConnectionError(e.to_string()),
            CatalogHttpError::Status(status) => CatalogError::HttpStatus { status },
            other => CatalogError::MalformedData(other.to_string()),
        }
    }
}

/// Product catalog backed by a JSON REST collection
pub struct HttpProductCatalog {
    client: reqwest::Client,
    base_url: String,
    collection: String,
    auth_token: Option<String>,
}

impl HttpProductCatalog {
    pub fn new(base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            collection: collection.into(),
            auth_token: None,
        }
    }

    pub fn with_auth_token(mut self, token: Option<String>) -> Self {
        self.auth_token = token;
        self
    }

    /// Collection URL without the auth query.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}.json",
            self.base_url.trim_end_matches('/'),
            self.collection.trim_matches('/')
        )
    }

    async fn get(&self) -> Result<Vec<Product>, CatalogHttpError> {
        let mut request = self.client.get(self.endpoint());
        if let Some(token) = &self.auth_token {
            request = request.query(&[("auth", token)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogHttpError::Status(status.as_u16()));
        }

        let body: Value = serde_json::from_str(&response.text().await?)?;
        parse_products(body)
    }
}

#[async_trait]
impl ProductCatalog for HttpProductCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        debug!("Fetching products from {}", self.endpoint());
        Ok(self.get().await?)
    }
}

/// Turn a collection body into product records.
///
/// `null` (an empty collection) yields no products. Individual records that
/// do not deserialize are skipped with a warning.
pub fn parse_products(body: Value) -> Result<Vec<Product>, CatalogHttpError> {
    let records: Vec<(String, Value)> = match body {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map.into_iter().collect(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        Value::Bool(_) => return Err(CatalogHttpError::UnexpectedShape("a boolean")),
        Value::Number(_) => return Err(CatalogHttpError::UnexpectedShape("a number")),
        Value::String(_) => return Err(CatalogHttpError::UnexpectedShape("a string")),
    };

    let mut products = Vec::with_capacity(records.len());
    for (id, record) in records {
        if record.is_null() {
            continue;
        }
        match serde_json::from_value::<Product>(record) {
            Ok(product) => products.push(product),
            Err(e) => warn!("Skipping catalog record {}: {}", id, e),
        }
    }
    Ok(products)
}
