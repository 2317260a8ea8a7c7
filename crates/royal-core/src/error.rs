//! # Error Types
//!
//! Domain-specific error types for royal-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  royal-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  royal-store errors (separate crate)                                   │
//! │  └── StoreError       - Repository operation failures                  │
//! │                                                                         │
//! │  Dashboard API errors (in app)                                         │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError/StoreError → ApiError → UI toast    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, field, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Cart mutations and invoice composition never fail; these errors come from
/// the boundaries around them (looking items up, guarding an empty bill).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Menu item cannot be found.
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    /// Menu item exists but is marked unavailable.
    ///
    /// ## When This Occurs
    /// - The kitchen ran out and the item was toggled off
    /// - A stale menu on the billing screen still shows the item
    #[error("Menu item {0} is not available")]
    MenuItemUnavailable(String),

    /// An invoice was requested for a cart with no lines.
    #[error("Cannot generate an invoice for an empty bill")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// They are raised before any mutation, so a rejected input leaves state
/// unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
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
        let err = CoreError::MenuItemUnavailable("f6".to_string());
        assert_eq!(err.to_string(), "Menu item f6 is not available");

        let err = CoreError::EmptyCart;
        assert_eq!(
            err.to_string(),
            "Cannot generate an invoice for an empty bill"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "deal_price".to_string(),
        };
        assert_eq!(err.to_string(), "deal_price must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "description".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
