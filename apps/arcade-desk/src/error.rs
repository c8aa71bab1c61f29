//! # API Error Type
//!
//! Unified error type for desk commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Arcade Desk                        │
//! │                                                                         │
//! │  Caller                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  sell_game(&store, request)                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad price text? ─── ValidationError::InvalidFormat ──┐         │  │
//! │  │         │                                             │         │  │
//! │  │         ▼                                             ▼         │  │
//! │  │  Rule broken? ─── CoreError::InsufficientBalance ── ApiError ──►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "INSUFFICIENT_BALANCE",                                      │
//! │    "message": "Insufficient balance for mauro: available $22.00, ..." } │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use arcade_core::{CoreError, ValidationError};
use serde::Serialize;

/// API error returned from desk commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "User not found: mauro"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Customer or owned game not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Login or game name already taken
    Conflict,

    /// Balance does not cover the discounted price
    InsufficientBalance,

    /// Business rule refused the request
    BusinessLogic,

    /// Internal error (poisoned lock, seed I/O)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
///
/// Every rejected operation passes through here, so this is where
/// rejections are logged.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InvalidUser(_) | CoreError::InvalidGame(_) => ErrorCode::ValidationError,
            CoreError::DuplicateUser(_) | CoreError::DuplicateGame(_) => ErrorCode::Conflict,
            CoreError::UserNotFound(_) | CoreError::GameNotOwned(_) => ErrorCode::NotFound,
            CoreError::InsufficientBalance { .. } => ErrorCode::InsufficientBalance,
            CoreError::UserIneligible(_) => ErrorCode::BusinessLogic,
        };

        tracing::warn!(?code, error = %err, "Operation rejected");
        ApiError::new(code, err.to_string())
    }
}

/// Converts input parsing failures to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        tracing::warn!(error = %err, "Invalid input");
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
