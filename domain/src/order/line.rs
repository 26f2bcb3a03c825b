//! Order line value object and quantity coercion

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One line of a proposed order (Value Object)
///
/// `item` is the product name exactly as the agent reported it; case is
/// preserved here and only folded when snapshots are compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderLine {
    pub item: String,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(item: impl Into<String>, quantity: u32) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }

    /// Case-folded key used for snapshot comparison
    pub fn key(&self) -> String {
        self.item.to_lowercase()
    }

    /// A line with quantity 0 is logically absent
    pub fn is_present(&self) -> bool {
        self.quantity > 0
    }

    /// Decode a single raw line from agent memory.
    ///
    /// Returns `Err(MissingItemName)` when the line cannot be used at all.
    /// A usable line with a bad quantity is returned with quantity 0 together
    /// with the `InvalidQuantity` issue describing the coercion.
    pub fn from_value(
        index: usize,
        value: &Value,
    ) -> Result<(Self, Option<DomainError>), DomainError> {
        let item = value
            .get("item")
            .and_then(item_name)
            .ok_or(DomainError::MissingItemName { index })?;

        match coerce_quantity(&item, value.get("quantity")) {
            Ok(quantity) => Ok((Self::new(item, quantity), None)),
            Err(issue) => Ok((Self::new(item, 0), Some(issue))),
        }
    }
}

impl fmt::Display for OrderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.item)
    }
}

fn item_name(value: &Value) -> Option<String> {
    let name = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!name.is_empty()).then_some(name)
}

/// Best-effort conversion of an agent-reported quantity.
///
/// | raw                          | result                 |
/// |------------------------------|------------------------|
/// | missing / `null`             | `Ok(1)`                |
/// | non-negative integer         | `Ok(n)` (saturating)   |
/// | non-negative float           | `Ok(trunc(n))`         |
/// | numeric string               | parsed as above        |
/// | anything else, or negative   | `Err(InvalidQuantity)` |
pub fn coerce_quantity(item: &str, raw: Option<&Value>) -> Result<u32, DomainError> {
    let invalid = |raw: &Value| DomainError::InvalidQuantity {
        item: item.to_string(),
        raw: raw.to_string(),
    };

    let raw = match raw {
        None | Some(Value::Null) => return Ok(1),
        Some(raw) => raw,
    };

    let number = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() && n >= 0.0 => Ok(n.trunc() as u32),
        _ => Err(invalid(raw)),
    }
}
