//! # Store Error Types
//!
//! Error types for repository operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (royal-core)      unknown id                           │
//! │       │                                │                                │
//! │       ▼                                ▼                                │
//! │  StoreError (this module) ← Adds entity context                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (dashboard app) ← Serialized for the UI                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use royal_core::ValidationError;
use thiserror::Error;

/// Repository operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with this id.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Input rejected before mutation; the repository is unchanged.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Embedded seed data could not be parsed.
    #[error("Invalid seed data: {0}")]
    Seed(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn not_found(entity: &str, id: &str) -> Self {
        StoreError::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }
}

/// Convenience type alias for repository results.
pub type StoreResult<T> = Result<T, StoreError>;
