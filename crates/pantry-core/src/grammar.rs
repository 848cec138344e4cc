//! # Line Grammar
//!
//! Splits a raw line on `"` into positional segments.
//!
//! ## Segment Layout
//! ```text
//!   "Apple" 1.99 "Fresh Farms"
//!   ▲      ▲    ▲            ▲
//!   │      │    │            └─ segment 4: ""              (outside)
//!   │      │    └─ segment 3: "Fresh Farms"                (inside)
//!   │      └─ segment 2: " 1.99 "                          (outside)
//!   └─ segment 0: "" / segment 1: "Apple"                  (outside / inside)
//!
//!   Even index = outside quotes (numbers, dates)
//!   Odd index  = inside quotes  (free-text names)
//! ```
//!
//! Meaning comes from the index alone. There is no escaping, so a name
//! containing `"` shifts every later segment; [`Segments::expect_shape`]
//! rejects that by requiring an exact quote count.

use crate::error::LineError;

/// The quote character delimiting free-text fields.
pub const QUOTE: char = '"';

/// A line split on [`QUOTE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments<'a> {
    parts: Vec<&'a str>,
}

impl<'a> Segments<'a> {
    /// Splits `line` on every quote character.
    ///
    /// ```rust
    /// use pantry_core::grammar::Segments;
    ///
    /// let segments = Segments::split("2023.12.25 \"Milk\" 3");
    /// assert_eq!(segments.len(), 3);
    /// assert_eq!(segments.get(1), Some("Milk"));
    /// ```
    pub fn split(line: &'a str) -> Self {
        Segments {
            parts: line.split(QUOTE).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Number of quote characters in the line.
    pub fn quote_count(&self) -> usize {
        self.parts.len().saturating_sub(1)
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.parts.get(index).copied()
    }

    /// Requires exactly `quoted_fields` quoted fields, i.e. `2 * quoted_fields`
    /// quote characters and `2 * quoted_fields + 1` segments.
    pub fn expect_shape(&self, quoted_fields: usize) -> Result<(), LineError> {
        let expected = quoted_fields * 2 + 1;

        if self.len() < expected {
            return Err(LineError::MissingSegments {
                expected,
                found: self.len(),
            });
        }

        if self.len() > expected {
            return Err(LineError::UnbalancedQuotes {
                found: self.quote_count(),
            });
        }

        Ok(())
    }

    /// Segment `index`, trimmed. Empty if the segment does not exist.
    pub fn trimmed(&self, index: usize) -> &'a str {
        self.get(index).map(str::trim).unwrap_or_default()
    }

    /// Whitespace-separated tokens of segment `index`.
    pub fn tokens(&self, index: usize) -> Vec<&'a str> {
        self.get(index)
            .map(|segment| segment.split_whitespace().collect())
            .unwrap_or_default()
    }
}
