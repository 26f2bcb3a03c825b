//! Order reconciliation between the agent's reported order and the cart.
//!
//! ```text
//! previous ─┐
//!           ├─ reconcile() ─→ Unchanged
//! incoming ─┘               └→ Replace { snapshot: incoming, added }
//! ```
//!
//! The decision is pure. Applying a `Replace` (clear the cart, then add every
//! line) is the caller's job, see [`CartStore::apply`](crate::cart::store::CartStore::apply).

use super::line::OrderLine;
use super::snapshot::OrderSnapshot;
use serde::Serialize;
use std::collections::HashSet;

/// Outcome of comparing two snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reconciliation {
    /// The cart must not be touched.
    Unchanged,
    /// The cart must be replaced by `snapshot` in full.
    Replace {
        snapshot: OrderSnapshot,
        /// Lines of `snapshot` whose exact `(item, quantity)` pair was not in the previous order
        added: Vec<OrderLine>,
    },
}

impl Reconciliation {
    pub fn is_replace(&self) -> bool {
        matches!(self, Reconciliation::Replace { .. })
    }

    /// Lines newly added by this reconciliation (empty when unchanged)
    pub fn added(&self) -> &[OrderLine] {
        match self {
            Reconciliation::Replace { added, .. } => added,
            Reconciliation::Unchanged => &[],
        }
    }

    /// User-facing notification text, e.g. `Added to cart: 2 Cappuccino, 1 Croissant`.
    ///
    /// Zero-quantity lines never reach the cart and are left out; `None` when
    /// nothing is left to announce.
    pub fn notification(&self) -> Option<String> {
        let items = self
            .added()
            .iter()
            .filter(|line| line.is_present())
            .map(|line| line.to_string())
            .collect::<Vec<_>>();
        if items.is_empty() {
            return None;
        }
        let items = items.join(", ");
        Some(format!("Added to cart: {}", items))
    }
}

/// Decide how `incoming` affects the cart given the previously accepted order.
///
/// An empty `incoming` means "no order in this reply" and never clears the cart.
pub fn reconcile(previous: &OrderSnapshot, incoming: &OrderSnapshot) -> Reconciliation {
    if incoming.is_empty() || !snapshots_differ(previous, incoming) {
        return Reconciliation::Unchanged;
    }

    let prior: HashSet<(&str, u32)> = previous
        .iter()
        .map(|line| (line.item.as_str(), line.quantity))
        .collect();

    let added = incoming
        .iter()
        .filter(|line| !prior.contains(&(line.item.as_str(), line.quantity)))
        .cloned()
        .collect();

    Reconciliation::Replace {
        snapshot: incoming.clone(),
        added,
    }
}

/// Case-insensitive comparison of two snapshots.
///
/// A key missing from one side counts as quantity 0, so `{Latte: 0}` and `{}`
/// are equal while `{Latte: 1}` and `{}` differ.
pub fn snapshots_differ(a: &OrderSnapshot, b: &OrderSnapshot) -> bool {
    let a = a.quantities();
    let b = b.quantities();

    a.keys().chain(b.keys()).any(|key| {
        let left = a.get(key).copied().unwrap_or(0);
        let right = b.get(key).copied().unwrap_or(0);
        left != right
    })
}
