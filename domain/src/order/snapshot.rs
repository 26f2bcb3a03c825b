//! Order snapshot: the complete order reported for one chat turn

use super::line::OrderLine;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// An ordered sequence of order lines (Value Object)
///
/// A snapshot is either discarded after comparison or promoted to the
/// "current" order. It never mutates once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderSnapshot {
    lines: Vec<OrderLine>,
}

/// Result of decoding raw agent memory into a snapshot
#[derive(Debug, Clone, Default)]
pub struct DecodedSnapshot {
    pub snapshot: OrderSnapshot,
    /// Coercions applied while decoding (dropped lines, zeroed quantities)
    pub issues: Vec<DomainError>,
}

impl OrderSnapshot {
    pub fn new(lines: Vec<OrderLine>) -> Self {
        Self { lines }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Comparison mapping: case-folded item key → quantity.
    ///
    /// Later lines overwrite earlier ones with the same key.
    pub fn quantities(&self) -> HashMap<String, u32> {
        self.lines
            .iter()
            .map(|line| (line.key(), line.quantity))
            .collect()
    }

    /// Decode the `order` field of agent memory.
    ///
    /// Anything other than an array decodes to an empty snapshot. Individual
    /// lines are coerced with [`OrderLine::from_value`]; every coercion is
    /// reported in [`DecodedSnapshot::issues`].
    pub fn decode(value: &Value) -> DecodedSnapshot {
        let Some(raw_lines) = value.as_array() else {
            return DecodedSnapshot::default();
        };

        let mut lines = Vec::with_capacity(raw_lines.len());
        let mut issues = Vec::new();

        for (index, raw) in raw_lines.iter().enumerate() {
            match OrderLine::from_value(index, raw) {
                Ok((line, issue)) => {
                    lines.push(line);
                    issues.extend(issue);
                }
                Err(e) => issues.push(e),
            }
        }

        DecodedSnapshot {
            snapshot: Self::new(lines),
            issues,
        }
    }
}

impl From<Vec<OrderLine>> for OrderSnapshot {
    fn from(lines: Vec<OrderLine>) -> Self {
        Self::new(lines)
    }
}

impl FromIterator<OrderLine> for OrderSnapshot {
    fn from_iter<I: IntoIterator<Item = OrderLine>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a OrderSnapshot {
    type Item = &'a OrderLine;
    type IntoIter = std::slice::Iter<'a, OrderLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
