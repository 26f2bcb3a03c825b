//! Cart store entity

use crate::core::error::DomainError;
use crate::menu::entities::MenuItems;
use crate::order::reconcile::Reconciliation;
use serde::Serialize;
use std::collections::BTreeMap;

/// The authoritative client-side cart (Entity)
///
/// Maps item key → quantity. A key with quantity 0 is logically absent but
/// may remain in the map. The store has a single owner; callers that share it
/// across tasks wrap it in a mutex so every operation applies atomically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartStore {
    items: BTreeMap<String, u32>,
}

/// Priced view of the cart
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CartTotal {
    pub total: f64,
    /// Keys with a positive quantity but no menu price
    pub unpriced: Vec<String>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` to the current quantity of `key`, creating it at 0 first.
    pub fn add_to_cart(&mut self, key: impl Into<String>, quantity: u32) {
        let entry = self.items.entry(key.into()).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }

    /// Add `delta` (possibly negative) to `key`, never going below 0.
    pub fn set_quantity_delta(&mut self, key: impl Into<String>, delta: i64) {
        let entry = self.items.entry(key.into()).or_insert(0);
        let next = (i64::from(*entry) + delta).clamp(0, i64::from(u32::MAX));
        *entry = next as u32;
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether any key has a positive quantity.
    pub fn has_items(&self) -> bool {
        self.items.values().any(|&quantity| quantity > 0)
    }

    pub fn quantity(&self, key: &str) -> u32 {
        self.items.get(key).copied().unwrap_or(0)
    }

    /// Entries with a positive quantity, in key order.
    pub fn items(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items
            .iter()
            .filter(|(_, quantity)| **quantity > 0)
            .map(|(key, quantity)| (key.as_str(), *quantity))
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.values().map(|&q| u64::from(q)).sum()
    }

    /// Key of the line a user-typed `name` refers to.
    ///
    /// An exact match wins, then a case-insensitive match among lines with a
    /// positive quantity; otherwise the trimmed name itself.
    pub fn resolve_key(&self, name: &str) -> String {
        let name = name.trim();
        self.items()
            .find(|(key, _)| *key == name)
            .or_else(|| self.items().find(|(key, _)| key.eq_ignore_ascii_case(name)))
            .map_or_else(|| name.to_string(), |(key, _)| key.to_string())
    }

    /// Checked variant of [`add_to_cart`](Self::add_to_cart) for user-initiated
    /// adds. Returns the key the quantity landed on.
    pub fn try_add(&mut self, name: &str, quantity: u32) -> Result<String, DomainError> {
        let key = self.resolve_key(name);
        if key.is_empty() {
            return Err(DomainError::EmptyItemName);
        }
        if quantity == 0 {
            return Err(DomainError::NonPositiveQuantity(key));
        }
        self.add_to_cart(key.clone(), quantity);
        Ok(key)
    }

    /// Checked variant of [`set_quantity_delta`](Self::set_quantity_delta) for
    /// user-initiated changes. Returns the resolved key and its new quantity.
    pub fn try_adjust(&mut self, name: &str, delta: i64) -> Result<(String, u32), DomainError> {
        let key = self.resolve_key(name);
        if key.is_empty() {
            return Err(DomainError::EmptyItemName);
        }
        self.set_quantity_delta(key.clone(), delta);
        let quantity = self.quantity(&key);
        if quantity == 0 {
            self.items.remove(&key);
        }
        Ok((key, quantity))
    }

    /// Apply a reconciliation decision.
    ///
    /// `Replace` clears the cart and then adds every present line in order, so
    /// duplicate lines accumulate. Returns whether the cart was touched.
    pub fn apply(&mut self, reconciliation: &Reconciliation) -> bool {
        let Reconciliation::Replace { snapshot, .. } = reconciliation else {
            return false;
        };

        self.clear();
        for line in snapshot.iter().filter(|line| line.is_present()) {
            self.add_to_cart(line.item.clone(), line.quantity);
        }
        true
    }

    /// Price the cart against the menu.
    pub fn total_price(&self, menu: &MenuItems) -> CartTotal {
        let mut total = CartTotal::default();
        for (key, quantity) in self.items() {
            match menu.price_of(key) {
                Some(price) => total.total += price * f64::from(quantity),
                None => total.unpriced.push(key.to_string()),
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::line::OrderLine;
    use crate::order::reconcile::reconcile;
    use crate::order::snapshot::OrderSnapshot;

    #[test]
    fn test_add_accumulates() {
        let mut cart = CartStore::new();
        cart.add_to_cart("Latte", 1);
        cart.add_to_cart("Latte", 2);
        assert_eq!(cart.quantity("Latte"), 3);
    }

    #[test]
    fn test_delta_never_goes_negative() {
        let mut cart = CartStore::new();
        cart.add_to_cart("Latte", 3);
        cart.set_quantity_delta("Latte", -10);
        assert_eq!(cart.quantity("Latte"), 0);
        assert!(!cart.has_items());

        cart.set_quantity_delta("Latte", 2);
        assert_eq!(cart.quantity("Latte"), 2);
    }

    #[test]
    fn test_delta_on_missing_key_creates_at_zero() {
        let mut cart = CartStore::new();
        cart.set_quantity_delta("Scone", -1);
        assert_eq!(cart.quantity("Scone"), 0);
        assert_eq!(cart.items().count(), 0);
    }

    #[test]
    fn test_clear_and_has_items() {
        let mut cart = CartStore::new();
        assert!(!cart.has_items());
        cart.add_to_cart("Latte", 1);
        assert!(cart.has_items());
        cart.clear();
        assert!(!cart.has_items());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_try_add_validates_input() {
        let mut cart = CartStore::new();
        assert_eq!(cart.try_add("  ", 1), Err(DomainError::EmptyItemName));
        assert_eq!(
            cart.try_add("Latte", 0),
            Err(DomainError::NonPositiveQuantity("Latte".to_string()))
        );
        assert!(cart.try_add(" Latte ", 2).is_ok());
        assert_eq!(cart.quantity("Latte"), 2);
    }

    #[test]
    fn test_user_edits_match_existing_line_ignoring_case() {
        let mut cart = CartStore::new();
        cart.add_to_cart("Latte", 1);

        assert_eq!(cart.try_add("latte", 2).unwrap(), "Latte");
        assert_eq!(cart.quantity("Latte"), 3);

        let (key, left) = cart.try_adjust(" LATTE ", -i64::from(u32::MAX)).unwrap();
        assert_eq!(key, "Latte");
        assert_eq!(left, 0);
        assert!(!cart.has_items());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_resolve_key_falls_back_to_typed_name() {
        let mut cart = CartStore::new();
        cart.add_to_cart("Latte", 1);
        assert_eq!(cart.resolve_key("  Iced Latte "), "Iced Latte");
        assert_eq!(cart.try_adjust("", 1), Err(DomainError::EmptyItemName));
    }

    #[test]
    fn test_apply_replace_clears_first() {
        let mut cart = CartStore::new();
        cart.add_to_cart("Espresso shot", 5);

        let incoming = OrderSnapshot::new(vec![
            OrderLine::new("Cappuccino", 1),
            OrderLine::new("Croissant", 0),
            OrderLine::new("Cappuccino", 2),
        ]);
        let decision = reconcile(&OrderSnapshot::empty(), &incoming);

        assert!(cart.apply(&decision));
        assert_eq!(cart.quantity("Espresso shot"), 0);
        assert_eq!(cart.quantity("Cappuccino"), 3);
        assert_eq!(cart.items().count(), 1);
    }

    #[test]
    fn test_apply_unchanged_is_noop() {
        let mut cart = CartStore::new();
        cart.add_to_cart("Latte", 1);
        assert!(!cart.apply(&Reconciliation::Unchanged));
        assert_eq!(cart.quantity("Latte"), 1);
    }

    #[test]
    fn test_total_price_reports_unpriced() {
        let mut menu = MenuItems::new();
        menu.insert("Latte", 4.0);
        menu.insert("Croissant", 3.25);

        let mut cart = CartStore::new();
        cart.add_to_cart("latte", 2);
        cart.add_to_cart("Croissant", 1);
        cart.add_to_cart("Unicorn Frappe", 1);

        let total = cart.total_price(&menu);
        assert!((total.total - 11.25).abs() < f64::EPSILON);
        assert_eq!(total.unpriced, vec!["Unicorn Frappe".to_string()]);
    }
}
