//! # Error Types
//!
//! Domain-specific error types for arcade-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  arcade-core errors (this file)                                        │
//! │  ├── CoreError        - Store rule violations                          │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  arcade-desk errors (app crate)                                        │
//! │  └── ApiError         - What the desk caller sees (serialized)         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → caller                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation that returns an error leaves the store untouched.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Store rule violations.
///
/// Factories wrap [`ValidationError`]s into [`CoreError::InvalidUser`] or
/// [`CoreError::InvalidGame`], so callers only match on this enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Blank name or login, or no recognised initial tier.
    #[error("Invalid user: {0}")]
    InvalidUser(String),

    /// Login is already taken in the registry.
    #[error("Login already registered: {0}")]
    DuplicateUser(String),

    /// No customer is registered under this login.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Game could not be built (blank name, negative price, unknown
    /// category or playstyle).
    #[error("Invalid game: {0}")]
    InvalidGame(String),

    /// The customer already owns a game with this exact name.
    #[error("Game already sold to this user: {0}")]
    DuplicateGame(String),

    /// Balance is below the discounted price.
    ///
    /// ## User Workflow
    /// ```text
    /// sell_game("Final Fantasy X", $50.00) for an Entry customer
    ///      │
    ///      ▼
    /// discounted price: $45.00, balance: $22.00
    ///      │
    ///      ▼
    /// InsufficientBalance { login: "mauro", available: $22.00, required: $45.00 }
    /// ```
    #[error("Insufficient balance for {login}: available {available}, required {required}")]
    InsufficientBalance {
        login: String,
        available: Money,
        required: Money,
    },

    /// Manual upgrade requested for a customer that fails the tier guard.
    #[error("User {0} is not eligible for an upgrade")]
    UserIneligible(String),

    /// Reward or punishment for a game the customer never bought.
    #[error("Game not owned: {0}")]
    GameNotOwned(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when raw input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., unparseable decimal).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientBalance {
            login: "mauro".to_string(),
            available: Money::from_cents(2200),
            required: Money::from_cents(4500),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance for mauro: available $22.00, required $45.00"
        );

        let err = CoreError::InvalidGame("unknown playstyle: SOLO".to_string());
        assert_eq!(err.to_string(), "Invalid game: unknown playstyle: SOLO");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "login".to_string(),
        };
        assert_eq!(err.to_string(), "login is required");

        let err = ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: 10,
        };
        assert_eq!(err.to_string(), "price must be between 0 and 10");
    }
}
