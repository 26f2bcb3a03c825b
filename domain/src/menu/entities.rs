//! Menu domain entities

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A product record from the catalog (Entity)
///
/// Every field is optional because the remote store does not enforce a schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub name: Option<String>,
    pub price: Option<f64>,
    #[serde(rename = "type")]
    pub category: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Name and price, if this record can appear on the menu.
    ///
    /// Blank names and missing, zero, negative or non-finite prices are rejected.
    pub fn menu_entry(&self) -> Option<(&str, f64)> {
        let name = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())?;
        let price = self.price.filter(|p| p.is_finite() && *p > 0.0)?;
        Some((name, price))
    }
}

/// Product name → price lookup (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItems {
    prices: BTreeMap<String, f64>,
}

impl MenuItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the lookup from catalog records, skipping unusable ones.
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        let prices = products
            .into_iter()
            .filter_map(Product::menu_entry)
            .map(|(name, price)| (name.to_string(), price))
            .collect();
        Self { prices }
    }

    pub fn insert(&mut self, name: impl Into<String>, price: f64) {
        self.prices.insert(name.into(), price);
    }

    /// Exact-name lookup
    pub fn get(&self, name: &str) -> Option<f64> {
        self.prices.get(name).copied()
    }

    /// Lookup that falls back to a case-insensitive match.
    ///
    /// Agent-reported names do not always match catalog casing.
    pub fn price_of(&self, name: &str) -> Option<f64> {
        self.get(name).or_else(|| {
            self.prices
                .iter()
                .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
                .map(|(_, price)| *price)
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.price_of(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.prices.iter().map(|(name, price)| (name.as_str(), *price))
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
