//! # Volume
//!
//! Drink volume in litres, kept as an exact decimal.
//!
//! ```rust
//! use pantry_core::volume::Volume;
//!
//! let volume: Volume = "1.50".parse().unwrap();
//! assert_eq!(volume.to_string(), "1.5L");
//! assert!(volume.is_positive());
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A volume in litres.
///
/// Any sign is representable; positivity is a [`crate::types::Drink`]
/// invariant, not a property of the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Volume(Decimal);

impl Volume {
    #[inline]
    pub const fn from_litres(litres: Decimal) -> Self {
        Volume(litres)
    }

    #[inline]
    pub const fn litres(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl FromStr for Volume {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Volume)
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}L", self.0.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let volume: Volume = "1.5".parse().unwrap();
        assert_eq!(volume.litres(), Decimal::new(15, 1));
        assert_eq!(volume.to_string(), "1.5L");

        let whole: Volume = "2.000".parse().unwrap();
        assert_eq!(whole.to_string(), "2L");
    }

    #[test]
    fn test_positivity() {
        assert!("0.33".parse::<Volume>().unwrap().is_positive());
        assert!(!"0".parse::<Volume>().unwrap().is_positive());
        assert!(!"-1".parse::<Volume>().unwrap().is_positive());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!("one".parse::<Volume>().is_err());
        assert!("".parse::<Volume>().is_err());
    }
}
