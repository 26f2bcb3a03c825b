//! Session-owned caches.
//!
//! - [`menu_cache::MenuCache`]: read-through cache of the product catalog

pub mod menu_cache;
