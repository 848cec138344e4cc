//! # Money Module
//!
//! Provides the `Money` type for handling prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Parsing "2.49" as f64 gives 2.4900000000000002                        │
//! │  Summing a few hundred of those drifts visibly.                         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "2.49" ──► Decimal(2.49) ──► 249 cents                               │
//! │    Anything finer than a cent ("2.499") is rejected, never rounded.    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pantry_core::money::Money;
//!
//! let price: Money = "1.99".parse().unwrap();
//! assert_eq!(price.cents(), 199);
//! assert_eq!(price.to_string(), "$1.99");
//!
//! let total = price.checked_add(Money::from_cents(500));
//! assert_eq!(total, Some(Money::from_cents(699)));
//!
//! // 10^28 dollars does not fit in i64 cents.
//! assert!("10000000000000000000000000000".parse::<Money>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of fractional digits a price may carry.
pub const MINOR_UNIT_DIGITS: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Negative values are representable so validation can
///   report them, instead of failing inside the parser
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts an exact decimal amount into cents.
    ///
    /// ## Example
    /// ```rust
    /// use pantry_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let price = Money::from_decimal(Decimal::new(599, 2)).unwrap(); // 5.99
    /// assert_eq!(price.cents(), 599);
    ///
    /// assert!(Money::from_decimal(Decimal::new(5999, 3)).is_err()); // 5.999
    /// ```
    pub fn from_decimal(amount: Decimal) -> Result<Self, ParseMoneyError> {
        let amount = amount.normalize();
        if amount.scale() > MINOR_UNIT_DIGITS {
            return Err(ParseMoneyError::TooPrecise {
                digits: amount.scale(),
            });
        }

        amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .map(Money)
            .ok_or(ParseMoneyError::Overflow)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, `None` if the result leaves the i64 cent range.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Sums `amounts`, `None` on overflow.
    ///
    /// ```rust
    /// use pantry_core::money::Money;
    ///
    /// let prices = [Money::from_cents(199), Money::from_cents(599)];
    /// assert_eq!(Money::checked_sum(prices), Some(Money::from_cents(798)));
    /// assert_eq!(Money::checked_sum([Money::from_cents(i64::MAX), Money::from_cents(1)]), None);
    /// ```
    pub fn checked_sum<I: IntoIterator<Item = Money>>(amounts: I) -> Option<Money> {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |total, amount| total.checked_add(amount))
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Why a decimal string could not become [`Money`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    /// Not a decimal number at all.
    #[error("{0}")]
    Syntax(String),

    /// More fractional digits than a cent can hold.
    #[error("{digits} decimal places, at most 2 allowed")]
    TooPrecise { digits: u32 },

    /// Amount does not fit in i64 cents.
    #[error("amount out of range")]
    Overflow,
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount =
            Decimal::from_str(s.trim()).map_err(|e| ParseMoneyError::Syntax(e.to_string()))?;
        Money::from_decimal(amount)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$10.99` / `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            (self.0 / 100).unsigned_abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
