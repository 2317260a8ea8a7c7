//! # API Error Type
//!
//! Unified error type for dashboard commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Royal POS                              │
//! │                                                                         │
//! │  Dashboard UI                Rust Backend                               │
//! │  ────────────                ────────────                               │
//! │                                                                         │
//! │  invoke('add_to_cart')                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store Error? ─── StoreError::NotFound { .. } ─────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Billing Error? ─── CoreError::EmptyCart ──────── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  catch (e) {                                                            │
//! │    // e.code = "CART_ERROR"                                             │
//! │    // e.message = "Cannot generate an invoice for an empty bill"        │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use royal_core::{CoreError, ValidationError};
use royal_store::StoreError;
use serde::Serialize;
use thiserror::Error;

/// API error returned from dashboard commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Menu item not found: f42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
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
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation refused (unavailable item, empty bill)
    CartError,

    /// Writing the invoice file failed
    ExportError,

    /// Internal error (poisoned lock, bad seed data)
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }

    pub fn export(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ExportError, message)
    }
}

/// Converts repository errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            StoreError::Validation(e) => ApiError::validation(e.to_string()),
            StoreError::Seed(e) => {
                tracing::error!("Seed data failed to load: {}", e);
                ApiError::internal("Seed data failed to load")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MenuItemNotFound(id) => ApiError::not_found("Menu item", &id),
            e @ CoreError::MenuItemUnavailable(_) => ApiError::cart(e.to_string()),
            e @ CoreError::EmptyCart => ApiError::cart(e.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Result type for dashboard commands.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_screaming_code() {
        let err = ApiError::export("disk full");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "EXPORT_ERROR");
        assert_eq!(json["message"], "disk full");
    }

    #[test]
    fn test_core_error_mapping() {
        let err = ApiError::from(CoreError::EmptyCart);
        assert_eq!(err.code, ErrorCode::CartError);

        let err = ApiError::from(CoreError::MenuItemNotFound("f42".to_string()));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Menu item not found: f42");

        let err = ApiError::from(CoreError::MenuItemUnavailable("f6".to_string()));
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[test]
    fn test_store_error_mapping() {
        let err = ApiError::from(StoreError::NotFound {
            entity: "Deal".to_string(),
            id: "d9".to_string(),
        });
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Deal not found: d9");

        let err = ApiError::from(StoreError::Validation(ValidationError::Required {
            field: "name".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn test_display() {
        let err = ApiError::not_found("Staff member", "s9");
        assert_eq!(err.to_string(), "[NotFound] Staff member not found: s9");

        let boxed: Box<dyn std::error::Error> = Box::new(ApiError::cart("empty bill"));
        assert_eq!(boxed.to_string(), "[CartError] empty bill");
    }
}
