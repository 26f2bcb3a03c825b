//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid quantity for '{item}': {raw}")]
    InvalidQuantity { item: String, raw: String },

    #[error("Order line {index} has no item name")]
    MissingItemName { index: usize },

    #[error("Quantity must be positive when adding '{0}' to the cart")]
    NonPositiveQuantity(String),

    #[error("Item name must not be empty")]
    EmptyItemName,
}

impl DomainError {
    /// Check if this error was produced while coercing agent output
    ///
    /// Coercion issues never abort reconciliation; callers log them and move on.
    pub fn is_coercion(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidQuantity { .. } | DomainError::MissingItemName { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_quantity_display() {
        let error = DomainError::InvalidQuantity {
            item: "Latte".to_string(),
            raw: "\"lots\"".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid quantity for 'Latte': \"lots\"");
    }

    #[test]
    fn test_is_coercion_check() {
        assert!(DomainError::MissingItemName { index: 0 }.is_coercion());
        assert!(
            DomainError::InvalidQuantity {
                item: "x".to_string(),
                raw: "-1".to_string()
            }
            .is_coercion()
        );
        assert!(!DomainError::EmptyItemName.is_coercion());
        assert!(!DomainError::NonPositiveQuantity("Latte".to_string()).is_coercion());
    }
}
