//! # Record Parsers
//!
//! One parser per record kind, each built on [`crate::grammar::Segments`].
//!
//! ## Line Formats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Kind      Shape                                            Quotes     │
//! │  ────────  ───────────────────────────────────────────────  ──────     │
//! │  product   "Name" price "Provider"                          4          │
//! │  delivery  YYYY.MM.DD "Name" count                          2          │
//! │  food      "Name" YYYY.MM.DD YYYY.MM.DD price               2          │
//! │  drink     "Name" YYYY.MM.DD YYYY.MM.DD price volume        2          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## All-or-Nothing
//! ```text
//! line ──► Segments ──► typed fields ──► constructor ──► catalog.add_*()
//!             │              │                │
//!             └──────────────┴────────────────┴──► ParsingError (catalog untouched)
//! ```
//! The catalog is only touched after the record has been fully built.
//!
//! ## Usage
//! ```rust
//! use pantry_core::{parse_delivery, parse_product, Catalog};
//!
//! let mut catalog = Catalog::new();
//!
//! let apple = parse_product(&mut catalog, r#""Apple" 1.99 "Fresh Farms""#).unwrap();
//! assert_eq!(apple.provider(), "Fresh Farms");
//!
//! let err = parse_delivery(&mut catalog, r#"2023.12.25 "Milk" three"#).unwrap_err();
//! assert_eq!(err.line(), r#"2023.12.25 "Milk" three"#);
//! assert_eq!(catalog.deliveries().len(), 0);
//! ```

use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::error::{LineError, ParseResult, ParsingError};
use crate::grammar::Segments;
use crate::money::Money;
use crate::types::{Delivery, Drink, Food, Product, Record, RecordKind, DATE_FORMAT};
use crate::volume::Volume;

// =============================================================================
// Public Parsers
// =============================================================================

/// Parses `"<name>" <price> "<provider>"` and appends it to `catalog`.
pub fn parse_product(catalog: &mut Catalog, line: &str) -> ParseResult<Product> {
    let product = read_product(line).map_err(|cause| fail(RecordKind::Product, line, cause))?;
    catalog.add_product(product.clone());
    Ok(product)
}

/// Parses `<date> "<name>" <count>` and appends it to `catalog`.
pub fn parse_delivery(catalog: &mut Catalog, line: &str) -> ParseResult<Delivery> {
    let delivery = read_delivery(line).map_err(|cause| fail(RecordKind::Delivery, line, cause))?;
    catalog.add_delivery(delivery.clone());
    Ok(delivery)
}

/// Parses `"<name>" <start> <end> <price>` and appends it to `catalog`.
pub fn parse_food(catalog: &mut Catalog, line: &str) -> ParseResult<Food> {
    let food = read_food(line).map_err(|cause| fail(RecordKind::Food, line, cause))?;
    catalog.add_food(food.clone());
    Ok(food)
}

/// Parses `"<name>" <start> <end> <price> <volume>` and appends it to `catalog`.
pub fn parse_drinks(catalog: &mut Catalog, line: &str) -> ParseResult<Drink> {
    let drink = read_drink(line).map_err(|cause| fail(RecordKind::Drink, line, cause))?;
    catalog.add_drink(drink.clone());
    Ok(drink)
}

/// Routes `line` to the parser for `kind`.
pub fn parse_record(catalog: &mut Catalog, kind: RecordKind, line: &str) -> ParseResult<Record> {
    match kind {
        RecordKind::Product => parse_product(catalog, line).map(Record::Product),
        RecordKind::Delivery => parse_delivery(catalog, line).map(Record::Delivery),
        RecordKind::Food => parse_food(catalog, line).map(Record::Food),
        RecordKind::Drink => parse_drinks(catalog, line).map(Record::Drink),
    }
}

fn fail(kind: RecordKind, line: &str, cause: LineError) -> ParsingError {
    ParsingError::new(kind, line, cause)
}

// =============================================================================
// Line Readers
// =============================================================================

fn read_product(line: &str) -> Result<Product, LineError> {
    let segments = Segments::split(line);
    segments.expect_shape(2)?;

    let price = parse_price(segments.trimmed(2))?;
    Ok(Product::new(segments.trimmed(1), price, segments.trimmed(3))?)
}

fn read_delivery(line: &str) -> Result<Delivery, LineError> {
    let segments = Segments::split(line);
    segments.expect_shape(1)?;

    // Only the first token before the quote is the date.
    let date = segments.tokens(0).first().copied().unwrap_or_default();
    let count = parse_count(segments.trimmed(2))?;
    Ok(Delivery::new(date, segments.trimmed(1), count)?)
}

fn read_food(line: &str) -> Result<Food, LineError> {
    let segments = Segments::split(line);
    segments.expect_shape(1)?;

    let tokens = segments.tokens(2);
    require_tokens(&tokens, 3, "start_date end_date price")?;

    let start_date = parse_date("start_date", tokens[0])?;
    let end_date = parse_date("end_date", tokens[1])?;
    let price = parse_price(tokens[2])?;
    Ok(Food::new(segments.trimmed(1), price, start_date, end_date)?)
}

fn read_drink(line: &str) -> Result<Drink, LineError> {
    let segments = Segments::split(line);
    segments.expect_shape(1)?;

    let tokens = segments.tokens(2);
    require_tokens(&tokens, 4, "start_date end_date price volume")?;

    let start_date = parse_date("start_date", tokens[0])?;
    let end_date = parse_date("end_date", tokens[1])?;
    let price = parse_price(tokens[2])?;
    let volume = parse_volume(tokens[3])?;
    Ok(Drink::new(
        segments.trimmed(1),
        price,
        start_date,
        end_date,
        volume,
    )?)
}

// =============================================================================
// Token Conversions
// =============================================================================

fn require_tokens(tokens: &[&str], expected: usize, fields: &'static str) -> Result<(), LineError> {
    if tokens.len() < expected {
        return Err(LineError::MissingTokens {
            fields,
            expected,
            found: tokens.len(),
        });
    }
    Ok(())
}

fn parse_price(token: &str) -> Result<Money, LineError> {
    token.parse::<Money>().map_err(|e| LineError::InvalidNumber {
        field: "price",
        value: token.to_string(),
        reason: e.to_string(),
    })
}

fn parse_count(token: &str) -> Result<i64, LineError> {
    token.parse::<i64>().map_err(|e| LineError::InvalidNumber {
        field: "count",
        value: token.to_string(),
        reason: e.to_string(),
    })
}

fn parse_volume(token: &str) -> Result<Volume, LineError> {
    token.parse::<Volume>().map_err(|e| LineError::InvalidNumber {
        field: "volume",
        value: token.to_string(),
        reason: e.to_string(),
    })
}

fn parse_date(field: &'static str, token: &str) -> Result<NaiveDate, LineError> {
    NaiveDate::parse_from_str(token, DATE_FORMAT).map_err(|source| LineError::InvalidDate {
        field,
        value: token.to_string(),
        source,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_product_with_trailing_text_after_provider_is_ignored() {
        let mut catalog = Catalog::new();
        let product = parse_product(&mut catalog, r#""Pear" 0 "Orchard" extra"#).unwrap();
        assert_eq!(product.price(), Money::zero());
        assert_eq!(product.provider(), "Orchard");
    }

    #[test]
    fn test_product_names_are_trimmed() {
        let mut catalog = Catalog::new();
        let product = parse_product(&mut catalog, r#"" Apple " 1.99 " Fresh Farms ""#).unwrap();
        assert_eq!(product.name(), "Apple");
        assert_eq!(product.provider(), "Fresh Farms");
    }

    #[test]
    fn test_product_missing_provider_quotes() {
        let mut catalog = Catalog::new();
        let err = parse_product(&mut catalog, r#""Apple" 1.99 Fresh Farms"#).unwrap_err();
        assert_eq!(
            err.cause(),
            &LineError::MissingSegments {
                expected: 5,
                found: 3
            }
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_product_sub_cent_price_rejected() {
        let mut catalog = Catalog::new();
        let err = parse_product(&mut catalog, r#""Apple" 1.999 "Fresh Farms""#).unwrap_err();
        assert!(matches!(
            err.cause(),
            LineError::InvalidNumber { field: "price", .. }
        ));
    }

    #[test]
    fn test_out_of_range_price_is_a_parsing_error() {
        let mut catalog = Catalog::new();
        let err = parse_product(&mut catalog, r#""Gold" 79228162514264337593543950335 "Mint""#)
            .unwrap_err();
        assert!(matches!(
            err.cause(),
            LineError::InvalidNumber { field: "price", .. }
        ));

        let err = parse_food(&mut catalog, r#""Caviar" 2023.01.01 2023.12.31 92233720368547758.08"#)
            .unwrap_err();
        assert!(matches!(
            err.cause(),
            LineError::InvalidNumber { field: "price", .. }
        ));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_delivery_uses_first_token_before_quote() {
        let mut catalog = Catalog::new();
        let delivery = parse_delivery(&mut catalog, r#"2023.12.25 morning "Milk" 3"#).unwrap();
        assert_eq!(delivery.date(), "2023.12.25");
    }

    #[test]
    fn test_delivery_without_date() {
        let mut catalog = Catalog::new();
        let err = parse_delivery(&mut catalog, r#""Milk" 3"#).unwrap_err();
        assert!(matches!(
            err.cause(),
            LineError::Invalid(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_delivery_count_rules() {
        let mut catalog = Catalog::new();
        let err = parse_delivery(&mut catalog, r#"2023.12.25 "Milk" 0"#).unwrap_err();
        assert!(matches!(
            err.cause(),
            LineError::Invalid(ValidationError::MustBePositive { .. })
        ));

        let err = parse_delivery(&mut catalog, r#"2023.12.25 "Milk" 2.5"#).unwrap_err();
        assert!(matches!(
            err.cause(),
            LineError::InvalidNumber { field: "count", .. }
        ));
        assert!(catalog.deliveries().is_empty());
    }

    #[test]
    fn test_food_invalid_calendar_date() {
        let mut catalog = Catalog::new();
        let err = parse_food(&mut catalog, r#""Cheese" 2023.02.30 2023.12.31 5.99"#).unwrap_err();
        assert!(matches!(
            err.cause(),
            LineError::InvalidDate {
                field: "start_date",
                ..
            }
        ));
    }

    #[test]
    fn test_food_extra_tokens_are_ignored() {
        let mut catalog = Catalog::new();
        let food = parse_food(&mut catalog, r#""Cheese" 2023.01.01 2023.12.31 5.99 1.5"#).unwrap();
        assert_eq!(food.price().cents(), 599);
        assert_eq!(catalog.foods().len(), 1);
    }

    #[test]
    fn test_drink_missing_volume() {
        let mut catalog = Catalog::new();
        let err = parse_drinks(&mut catalog, r#""Cola" 2023.01.01 2023.12.31 2.49"#).unwrap_err();
        assert_eq!(
            err.cause(),
            &LineError::MissingTokens {
                fields: "start_date end_date price volume",
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn test_drink_bad_volume() {
        let mut catalog = Catalog::new();
        let err = parse_drinks(&mut catalog, r#""Cola" 2023.01.01 2023.12.31 2.49 big"#).unwrap_err();
        assert!(matches!(
            err.cause(),
            LineError::InvalidNumber { field: "volume", .. }
        ));

        let err = parse_drinks(&mut catalog, r#""Cola" 2023.01.01 2023.12.31 2.49 -1"#).unwrap_err();
        assert!(matches!(
            err.cause(),
            LineError::Invalid(ValidationError::MustBePositive { .. })
        ));
        assert!(catalog.drinks().is_empty());
    }

    #[test]
    fn test_parse_record_dispatch() {
        let mut catalog = Catalog::new();
        let record = parse_record(&mut catalog, RecordKind::Delivery, r#"2023.12.25 "Milk" 3"#).unwrap();
        assert_eq!(record.kind(), RecordKind::Delivery);

        let err = parse_record(&mut catalog, RecordKind::Food, r#"2023.12.25 "Milk" 3"#).unwrap_err();
        assert_eq!(err.kind(), RecordKind::Food);
        assert_eq!(catalog.len(), 1);
    }
}
