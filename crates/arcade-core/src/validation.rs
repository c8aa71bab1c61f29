//! # Validation Module
//!
//! Field-level checks shared by the factories.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input collaborator                                           │
//! │  └── Reads primitives (string, integer, decimal)                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Blank strings, price range                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Factories                                                    │
//! │  └── Wrap failures into InvalidUser / InvalidGame                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 4: Store engine                                                 │
//! │  └── Registry rules (duplicates, balance, ownership)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks that `value` is neither empty nor whitespace-only.
///
/// ```rust
/// use arcade_core::validation::validate_required;
///
/// assert!(validate_required("login", "mauro").is_ok());
/// assert!(validate_required("login", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Checks that a game price is not negative. Free games are fine.
///
/// ```rust
/// use arcade_core::money::Money;
/// use arcade_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(0)).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("name", "Mauro").is_ok());
        assert!(validate_required("name", " x ").is_ok());

        assert_eq!(
            validate_required("name", ""),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
        assert!(validate_required("name", "\t\n").is_err());
        assert!(validate_required("name", &"a".repeat(500)).is_ok());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(1099)).is_ok());
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }
}
