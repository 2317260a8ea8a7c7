//! # Validation Module
//!
//! Input validation utilities for Royal POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Dashboard form (external)                                    │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Repository boundary (royal-store)                            │
//! │  └── THIS MODULE: checks run before any mutation                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Rejected input → ValidationError → toast; state unchanged             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use royal_core::validation::{parse_invoice_date, validate_name};
//!
//! assert!(validate_name("name", "Chicken Biryani").is_ok());
//! assert!(parse_invoice_date("2025-01-31").is_ok());
//! assert!(parse_invoice_date("31/01/2025").is_err());
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted name or title.
pub const MAX_NAME_LEN: usize = 100;

/// Longest accepted description.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Highest accepted menu or deal price: Rs. 10,000,000.
pub const MAX_PRICE: Money = Money::from_major(10_000_000);

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required, single-line name (menu item, staff member, deal title).
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_NAME_LEN`] characters
/// - No line breaks or other control characters
pub fn validate_name(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    if value.chars().any(char::is_control) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a single line".to_string(),
        });
    }

    Ok(())
}

/// Validates a required description.
pub fn validate_description(value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    if value.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

/// Validates a search query and returns it trimmed and lowercased.
///
/// An empty query matches everything.
pub fn normalize_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(query.to_lowercase())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a menu price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (complimentary items)
/// - At most [`MAX_PRICE`]
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() || price > MAX_PRICE {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_PRICE.minor(),
        });
    }

    Ok(())
}

/// Validates a price that must be strictly positive (deal prices).
pub fn validate_positive_price(field: &str, price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    validate_price(field, price)
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10_000,
        });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Parses an ISO calendar date (`YYYY-MM-DD`).
///
/// Invoice dates and deal windows arrive from the UI as strings; anything
/// other than a real calendar date in that exact shape is rejected.
pub fn parse_invoice_date(value: &str) -> ValidationResult<NaiveDate> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: "date".to_string(),
        });
    }

    // %Y accepts short years and signs; the fixed width pins the format.
    if value.len() != 10 {
        return Err(invalid_date());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid_date())
}

fn invalid_date() -> ValidationError {
    ValidationError::InvalidFormat {
        field: "date".to_string(),
        reason: "must be an ISO date (YYYY-MM-DD)".to_string(),
    }
}

/// Validates that a date window does not end before it starts.
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> ValidationResult<()> {
    if end < start {
        return Err(ValidationError::InvalidFormat {
            field: "end_date".to_string(),
            reason: "must not be before start_date".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
