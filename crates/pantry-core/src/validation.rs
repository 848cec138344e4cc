//! # Validation Module
//!
//! Field rules shared by the domain constructors in [`crate::types`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Line grammar (crate::grammar)                                │
//! │  ├── Quote count / segment count                                       │
//! │  └── Token count                                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Conversion (crate::parser)                                   │
//! │  ├── Decimal / integer parsing                                         │
//! │  └── Calendar date parsing                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE, called only from constructors                   │
//! │  ├── Non-empty names                                                   │
//! │  ├── Sign rules (price >= 0, count > 0, volume > 0)                    │
//! │  └── Date shape / date ordering                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pantry_core::validation::{validate_count, validate_delivery_date};
//!
//! assert!(validate_delivery_date("2023.12.25").is_ok());
//! assert!(validate_delivery_date("25.12.2023").is_err());
//! assert!(validate_count(0).is_err());
//! ```

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::volume::Volume;

/// Exact shape of a delivery date. Shape only, not calendar validity.
static DELIVERY_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}\.\d{2}\.\d{2}$").expect("delivery date pattern"));

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required free-text field and returns it trimmed.
///
/// ## Example
/// ```rust
/// use pantry_core::validation::validate_required_text;
///
/// assert_eq!(validate_required_text("name", "  Milk ").unwrap(), "Milk");
/// assert!(validate_required_text("provider", "   ").is_err());
/// ```
pub fn validate_required_text(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    Ok(value.to_string())
}

/// Validates the `YYYY.MM.DD` shape of a delivery date.
///
/// `2023.13.45` passes: deliveries keep the date as text and only the shape
/// is checked.
pub fn validate_delivery_date(date: &str) -> ValidationResult<()> {
    if !DELIVERY_DATE_RE.is_match(date) {
        return Err(ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: "expected YYYY.MM.DD".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price. Zero is allowed (free items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a delivered unit count (> 0).
pub fn validate_count(count: i64) -> ValidationResult<()> {
    if count <= 0 {
        return Err(ValidationError::must_be_positive("count"));
    }

    Ok(())
}

/// Validates a drink volume (> 0).
pub fn validate_volume(volume: Volume) -> ValidationResult<()> {
    if !volume.is_positive() {
        return Err(ValidationError::must_be_positive("volume"));
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates that a shelf life ends strictly after it starts.
pub fn validate_date_order(start: NaiveDate, end: NaiveDate) -> ValidationResult<()> {
    if end <= start {
        return Err(ValidationError::DateOrder { start, end });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
