//! # Error Types
//!
//! Domain-specific error types for pantry-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pantry-core errors (this file)                                        │
//! │  ├── ValidationError  - Domain invariant violations (constructors)     │
//! │  ├── LineError        - What went wrong in one line (classification)   │
//! │  └── ParsingError     - The one error callers see: message + line      │
//! │                                                                         │
//! │  pantry-ingest errors (separate crate)                                 │
//! │  └── IngestError      - Missing files, I/O, configuration              │
//! │                                                                         │
//! │  Flow: ValidationError → LineError → ParsingError → driver log         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every `ParsingError` carries the offending line verbatim
//! 3. The cause stays reachable through `Error::source()`

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::RecordKind;

// =============================================================================
// Validation Error
// =============================================================================

/// Domain invariant violations.
///
/// Raised by the fallible constructors in [`crate::types`]. A value that
/// exists has passed every one of these checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g. delivery date not shaped like YYYY.MM.DD).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Shelf life end date is not after its start date.
    #[error("end date {end} must be after start date {start}")]
    DateOrder { start: NaiveDate, end: NaiveDate },
}

impl ValidationError {
    pub(crate) fn required(field: &str) -> Self {
        ValidationError::Required {
            field: field.to_string(),
        }
    }

    pub(crate) fn must_be_positive(field: &str) -> Self {
        ValidationError::MustBePositive {
            field: field.to_string(),
        }
    }
}

// =============================================================================
// Line Error
// =============================================================================

/// Classification of a failure inside a single input line.
///
/// Each conversion step of a record parser maps its failure to exactly one
/// of these variants before it is wrapped into a [`ParsingError`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    /// Fewer quote-delimited segments than the record shape needs.
    #[error("expected {expected} quote-delimited segments, found {found}")]
    MissingSegments { expected: usize, found: usize },

    /// More quote characters than the record shape allows.
    ///
    /// Names cannot contain a literal `"`; such lines are rejected here.
    #[error("unbalanced or embedded quotes: found {found} quote characters")]
    UnbalancedQuotes { found: usize },

    /// Not enough whitespace-separated tokens after the quoted name.
    #[error("expected {expected} tokens after the name ({fields}), found {found}")]
    MissingTokens {
        fields: &'static str,
        expected: usize,
        found: usize,
    },

    /// A numeric token could not be converted.
    #[error("{field} '{value}' is not a valid number: {reason}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// A date token did not match the `YYYY.MM.DD` calendar format.
    #[error("{field} '{value}' is not a valid YYYY.MM.DD date: {source}")]
    InvalidDate {
        field: &'static str,
        value: String,
        source: chrono::ParseError,
    },

    /// The converted fields were rejected by a domain constructor.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

// =============================================================================
// Parsing Error
// =============================================================================

/// The single error kind reported by every record parser.
///
/// ## What Callers Get
/// ```text
/// "Apple" abc "Fresh Farms"
///      │
///      ▼
/// LineError::InvalidNumber { field: "price", value: "abc", .. }
///      │
///      ▼
/// ParsingError {
///     message: "failed to parse product line: price 'abc' is not a valid number: ...",
///     line:    "\"Apple\" abc \"Fresh Farms\"",
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}\nLine: {line}")]
pub struct ParsingError {
    kind: RecordKind,
    message: String,
    line: String,
    #[source]
    cause: LineError,
}

impl ParsingError {
    /// Wraps a line failure together with the offending line.
    pub fn new(kind: RecordKind, line: impl Into<String>, cause: LineError) -> Self {
        ParsingError {
            kind,
            message: format!("failed to parse {} line: {}", kind, cause),
            line: line.into(),
            cause,
        }
    }

    /// Human-readable description of the violated rule.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The original raw line.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Which parser rejected the line.
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// The classified cause.
    pub fn cause(&self) -> &LineError {
        &self.cause
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for domain constructors.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for record parsers.
pub type ParseResult<T> = Result<T, ParsingError>;

// =============================================================================
// Unit Tests
// =============================================================================
