//! Product catalog adapter (realtime-database REST endpoint)

pub mod http;

pub use http::{CatalogHttpError, HttpProductCatalog, parse_products};
