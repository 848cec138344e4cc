//! # pantry-core: Pure Parsing & Domain Logic for Pantry
//!
//! Turns quote-delimited inventory lines into validated, strongly-typed
//! records and collects them into a [`Catalog`]. Zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pantry Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 pantry-ingest (files, config, logs)             │   │
//! │  │    read_file_lines ──► process_source ──► summary report       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ one trimmed line at a time             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pantry-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌───────────┐     │   │
//! │  │   │ grammar  │─►│  parser  │─►│  types   │─►│  catalog  │     │   │
//! │  │   │ Segments │  │ parse_*  │  │ Product  │  │  Catalog  │     │   │
//! │  │   └──────────┘  └────┬─────┘  │ Food ... │  └───────────┘     │   │
//! │  │                      │        └──────────┘                     │   │
//! │  │                      ▼                                          │   │
//! │  │                 ParsingError (message + line)                   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`grammar`] - Splits a line on `"` into positional segments
//! - [`parser`] - The four record parsers
//! - [`types`] - Domain records (Product, Delivery, Food, Drink)
//! - [`catalog`] - Per-kind collections and the merged product view
//! - [`money`] - Integer-cent prices
//! - [`volume`] - Decimal litres
//! - [`validation`] - Field rules used by constructors
//! - [`error`] - Validation, line and parsing errors
//!
//! ## Example Usage
//!
//! ```rust
//! use pantry_core::{parse_drinks, parse_food, parse_product, Catalog};
//!
//! let mut catalog = Catalog::new();
//! parse_product(&mut catalog, r#""Apple" 1.99 "Fresh Farms""#).unwrap();
//! parse_food(&mut catalog, r#""Cheese" 2023.01.01 2023.12.31 5.99"#).unwrap();
//! parse_drinks(&mut catalog, r#""Cola" 2023.01.01 2023.12.31 2.49 1.5"#).unwrap();
//!
//! let names: Vec<&str> = catalog.get_all_products().iter().map(|p| p.name()).collect();
//! assert_eq!(names, ["Apple", "Cheese", "Cola"]);
//!
//! // Equal dates are not a valid shelf life.
//! assert!(parse_food(&mut catalog, r#""Cheese" 2023.01.01 2023.01.01 5.99"#).is_err());
//! assert_eq!(catalog.foods().len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod grammar;
pub mod money;
pub mod parser;
pub mod types;
pub mod validation;
pub mod volume;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, CatalogSummary};
pub use error::{LineError, ParseResult, ParsingError, ValidationError, ValidationResult};
pub use money::Money;
pub use parser::{parse_delivery, parse_drinks, parse_food, parse_product, parse_record};
pub use types::*;
pub use volume::Volume;
