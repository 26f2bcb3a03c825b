//! Read-through menu cache over the product catalog.
//!
//! ```text
//! get() ──lock──┬─ populated ──────────────→ Arc<MenuItems>
//!               └─ empty ─→ fetch_products ─→ store ─→ Arc<MenuItems>
//! ```
//!
//! The slot is guarded by an async mutex held across the fetch, so callers
//! that arrive while a population is in flight wait for it and then receive
//! the same `Arc` instead of issuing their own fetch (collapse-to-one).

use crate::ports::product_catalog::{CatalogError, ProductCatalog};
use barista_domain::MenuItems;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Product name → price cache owned by a chat session
pub struct MenuCache {
    catalog: Arc<dyn ProductCatalog>,
    slot: Mutex<Option<Arc<MenuItems>>>,
    fetches: AtomicUsize,
}

impl MenuCache {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self {
            catalog,
            slot: Mutex::new(None),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Return the menu, fetching it once if not yet populated.
    ///
    /// A failed fetch is propagated and nothing is stored, so the next call
    /// retries.
    pub async fn get(&self) -> Result<Arc<MenuItems>, CatalogError> {
        let mut slot = self.slot.lock().await;
        if let Some(menu) = slot.as_ref() {
            debug!("Menu cache hit ({} items)", menu.len());
            return Ok(Arc::clone(menu));
        }

        self.fetches.fetch_add(1, Ordering::SeqCst);
        let products = match self.catalog.fetch_products().await {
            Ok(products) => products,
            Err(e) => {
                warn!("Menu fetch failed: {}", e);
                return Err(e);
            }
        };

        let menu = Arc::new(MenuItems::from_products(&products));
        let skipped = products.len().saturating_sub(menu.len());
        if skipped > 0 {
            debug!("Skipped {} catalog records without a usable name or price", skipped);
        }
        info!("Menu loaded: {} items", menu.len());

        *slot = Some(Arc::clone(&menu));
        Ok(menu)
    }

    /// Discard the stored menu; the next [`get`](Self::get) fetches again.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.lock().await;
        if slot.take().is_some() {
            debug!("Menu cache invalidated");
        }
    }

    /// The stored menu, without fetching.
    pub async fn peek(&self) -> Option<Arc<MenuItems>> {
        self.slot.lock().await.clone()
    }

    /// Number of catalog fetches issued so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}
