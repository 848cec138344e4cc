//! # Domain Types
//!
//! Inventory records produced by the line parsers.
//!
//! ## Type Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │  BaseProduct    │◄──── embedded by ────┬──────────────┐             │
//! │  │  name, price    │                      │              │             │
//! │  └─────────────────┘              ┌───────┴───────┐ ┌────┴──────────┐  │
//! │                                   │   Product     │ │     Food      │  │
//! │                                   │  + provider   │ │ + ShelfLife   │  │
//! │                                   └───────────────┘ └────┬──────────┘  │
//! │                                                          │ embedded by │
//! │  ┌─────────────────┐                              ┌──────┴────────┐    │
//! │  │    Delivery     │  (independent, no FK)        │     Drink     │    │
//! │  │ date,name,count │                              │   + volume    │    │
//! │  └─────────────────┘                              └───────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Valid By Construction
//! Every field is private and every constructor is fallible. If you hold a
//! `Food`, its end date is after its start date; if you hold a `Delivery`,
//! its count is positive. There is no setter that could undo that.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationResult;
use crate::money::Money;
use crate::validation::{
    validate_count, validate_date_order, validate_delivery_date, validate_price,
    validate_required_text, validate_volume,
};
use crate::volume::Volume;

/// Date format used by every line kind and every rendering.
pub const DATE_FORMAT: &str = "%Y.%m.%d";

// =============================================================================
// Record Kind
// =============================================================================

/// The four kinds of line this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    #[serde(alias = "products")]
    Product,
    #[serde(alias = "deliveries")]
    Delivery,
    #[serde(alias = "foods")]
    Food,
    #[serde(alias = "drinks")]
    Drink,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Product,
        RecordKind::Delivery,
        RecordKind::Food,
        RecordKind::Drink,
    ];

    /// Plural label used in report headers.
    pub fn plural(&self) -> &'static str {
        match self {
            RecordKind::Product => "Products",
            RecordKind::Delivery => "Deliveries",
            RecordKind::Food => "Foods",
            RecordKind::Drink => "Drinks",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Product => write!(f, "product"),
            RecordKind::Delivery => write!(f, "delivery"),
            RecordKind::Food => write!(f, "food"),
            RecordKind::Drink => write!(f, "drink"),
        }
    }
}

/// Error for an unrecognised record kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown record kind '{0}'. Valid options: product, delivery, food, drink")]
pub struct UnknownRecordKind(pub String);

impl FromStr for RecordKind {
    type Err = UnknownRecordKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "product" | "products" => Ok(RecordKind::Product),
            "delivery" | "deliveries" => Ok(RecordKind::Delivery),
            "food" | "foods" => Ok(RecordKind::Food),
            "drink" | "drinks" => Ok(RecordKind::Drink),
            other => Err(UnknownRecordKind(other.to_string())),
        }
    }
}

// =============================================================================
// Base Product
// =============================================================================

/// Fields shared by everything that has a price on the shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseProduct {
    name: String,
    price: Money,
}

impl BaseProduct {
    /// ## Rules
    /// - `name` must not be blank (stored trimmed)
    /// - `price` must be >= 0
    pub fn new(name: &str, price: Money) -> ValidationResult<Self> {
        let name = validate_required_text("name", name)?;
        validate_price(price)?;
        Ok(BaseProduct { name, price })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

impl fmt::Display for BaseProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.price)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A supplier-sourced item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    #[serde(flatten)]
    base: BaseProduct,
    provider: String,
}

impl Product {
    pub fn new(name: &str, price: Money, provider: &str) -> ValidationResult<Self> {
        let base = BaseProduct::new(name, price)?;
        let provider = validate_required_text("provider", provider)?;
        Ok(Product { base, provider })
    }

    pub fn base(&self) -> &BaseProduct {
        &self.base
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    pub fn price(&self) -> Money {
        self.base.price()
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, provider: {}", self.base, self.provider)
    }
}

// =============================================================================
// Delivery
// =============================================================================

/// A shipment event.
///
/// `name` is free text; nothing ties it to a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delivery {
    date: String,
    name: String,
    count: i64,
}

impl Delivery {
    /// ## Rules
    /// - `date` must match `^\d{4}\.\d{2}\.\d{2}$` (shape only)
    /// - `name` must not be blank (stored trimmed)
    /// - `count` must be > 0
    pub fn new(date: &str, name: &str, count: i64) -> ValidationResult<Self> {
        validate_delivery_date(date)?;
        let name = validate_required_text("name", name)?;
        validate_count(count)?;
        Ok(Delivery {
            date: date.to_string(),
            name,
            count,
        })
    }

    /// Date text exactly as it appeared in the line.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> i64 {
        self.count
    }
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Delivery: {} x{} on {}", self.name, self.count, self.date)
    }
}

// =============================================================================
// Shelf Life
// =============================================================================

/// A validity window whose end is strictly after its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShelfLife {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl ShelfLife {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> ValidationResult<Self> {
        validate_date_order(start_date, end_date)?;
        Ok(ShelfLife {
            start_date,
            end_date,
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }
}

impl fmt::Display for ShelfLife {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start_date.format(DATE_FORMAT),
            self.end_date.format(DATE_FORMAT)
        )
    }
}

// =============================================================================
// Food
// =============================================================================

/// A perishable item with a shelf life.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Food {
    #[serde(flatten)]
    base: BaseProduct,
    #[serde(flatten)]
    shelf_life: ShelfLife,
}

impl Food {
    pub fn new(
        name: &str,
        price: Money,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ValidationResult<Self> {
        let base = BaseProduct::new(name, price)?;
        let shelf_life = ShelfLife::new(start_date, end_date)?;
        Ok(Food { base, shelf_life })
    }

    pub fn base(&self) -> &BaseProduct {
        &self.base
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    pub fn price(&self) -> Money {
        self.base.price()
    }

    pub fn shelf_life(&self) -> ShelfLife {
        self.shelf_life
    }

    pub fn start_date(&self) -> NaiveDate {
        self.shelf_life.start_date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.shelf_life.end_date()
    }
}

impl fmt::Display for Food {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, shelf life: {}", self.base, self.shelf_life)
    }
}

// =============================================================================
// Drink
// =============================================================================

/// A food that also has a volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Drink {
    #[serde(flatten)]
    food: Food,
    volume: Volume,
}

impl Drink {
    /// Food's rules plus `volume > 0`.
    pub fn new(
        name: &str,
        price: Money,
        start_date: NaiveDate,
        end_date: NaiveDate,
        volume: Volume,
    ) -> ValidationResult<Self> {
        let food = Food::new(name, price, start_date, end_date)?;
        validate_volume(volume)?;
        Ok(Drink { food, volume })
    }

    /// The drink viewed as a plain food.
    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn base(&self) -> &BaseProduct {
        self.food.base()
    }

    pub fn name(&self) -> &str {
        self.food.name()
    }

    pub fn price(&self) -> Money {
        self.food.price()
    }

    pub fn shelf_life(&self) -> ShelfLife {
        self.food.shelf_life()
    }

    pub fn start_date(&self) -> NaiveDate {
        self.food.start_date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.food.end_date()
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }
}

impl fmt::Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, volume: {}", self.food, self.volume)
    }
}

// =============================================================================
// Record (owned union)
// =============================================================================

/// Any successfully parsed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Product(Product),
    Delivery(Delivery),
    Food(Food),
    Drink(Drink),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Product(_) => RecordKind::Product,
            Record::Delivery(_) => RecordKind::Delivery,
            Record::Food(_) => RecordKind::Food,
            Record::Drink(_) => RecordKind::Drink,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Product(product) => fmt::Display::fmt(product, f),
            Record::Delivery(delivery) => fmt::Display::fmt(delivery, f),
            Record::Food(food) => fmt::Display::fmt(food, f),
            Record::Drink(drink) => fmt::Display::fmt(drink, f),
        }
    }
}

// =============================================================================
// Catalog Item (borrowed merged view)
// =============================================================================

/// One entry of the catalog's merged product view.
///
/// Deliveries are not products and never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogItem<'a> {
    Product(&'a Product),
    Food(&'a Food),
    Drink(&'a Drink),
}

impl<'a> CatalogItem<'a> {
    /// The shared name/price fields.
    pub fn base(&self) -> &'a BaseProduct {
        match self {
            CatalogItem::Product(product) => product.base(),
            CatalogItem::Food(food) => food.base(),
            CatalogItem::Drink(drink) => drink.base(),
        }
    }

    pub fn name(&self) -> &'a str {
        self.base().name()
    }

    pub fn price(&self) -> Money {
        self.base().price()
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            CatalogItem::Product(_) => RecordKind::Product,
            CatalogItem::Food(_) => RecordKind::Food,
            CatalogItem::Drink(_) => RecordKind::Drink,
        }
    }
}

impl fmt::Display for CatalogItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogItem::Product(product) => fmt::Display::fmt(product, f),
            CatalogItem::Food(food) => fmt::Display::fmt(food, f),
            CatalogItem::Drink(drink) => fmt::Display::fmt(drink, f),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_record_kind_parsing() {
        assert_eq!("product".parse::<RecordKind>().unwrap(), RecordKind::Product);
        assert_eq!("Deliveries".parse::<RecordKind>().unwrap(), RecordKind::Delivery);
        assert_eq!("foods".parse::<RecordKind>().unwrap(), RecordKind::Food);
        assert_eq!(" drink ".parse::<RecordKind>().unwrap(), RecordKind::Drink);
        assert!("snack".parse::<RecordKind>().is_err());
    }

    #[test]
    fn test_record_kind_display_round_trips() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.to_string().parse::<RecordKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_base_product_rules() {
        let base = BaseProduct::new("  Apple ", Money::from_cents(199)).unwrap();
        assert_eq!(base.name(), "Apple");
        assert_eq!(base.to_string(), "Apple ($1.99)");

        assert!(BaseProduct::new("Free sample", Money::zero()).is_ok());
        assert_eq!(
            BaseProduct::new("Apple", Money::from_cents(-1)),
            Err(ValidationError::MustNotBeNegative {
                field: "price".to_string()
            })
        );
        assert!(BaseProduct::new(" ", Money::from_cents(1)).is_err());
    }

    #[test]
    fn test_product_requires_provider() {
        let product = Product::new("Apple", Money::from_cents(199), "Fresh Farms").unwrap();
        assert_eq!(product.provider(), "Fresh Farms");
        assert_eq!(product.to_string(), "Apple ($1.99), provider: Fresh Farms");

        assert_eq!(
            Product::new("Apple", Money::from_cents(199), "  "),
            Err(ValidationError::Required {
                field: "provider".to_string()
            })
        );
    }

    #[test]
    fn test_delivery_rules() {
        let delivery = Delivery::new("2023.12.25", "Milk", 3).unwrap();
        assert_eq!(delivery.date(), "2023.12.25");
        assert_eq!(delivery.to_string(), "Delivery: Milk x3 on 2023.12.25");

        assert!(Delivery::new("2023/12/25", "Milk", 3).is_err());
        assert!(Delivery::new("2023.12.25", "", 3).is_err());
        assert!(Delivery::new("2023.12.25", "Milk", 0).is_err());
        assert!(Delivery::new("2023.12.25", "Milk", -1).is_err());
    }

    #[test]
    fn test_food_rejects_equal_or_reversed_dates() {
        let food = Food::new(
            "Cheese",
            Money::from_cents(599),
            date(2023, 1, 1),
            date(2023, 12, 31),
        )
        .unwrap();
        assert_eq!(
            food.to_string(),
            "Cheese ($5.99), shelf life: 2023.01.01-2023.12.31"
        );

        assert!(matches!(
            Food::new("Cheese", Money::from_cents(599), date(2023, 1, 1), date(2023, 1, 1)),
            Err(ValidationError::DateOrder { .. })
        ));
        assert!(
            Food::new("Cheese", Money::from_cents(599), date(2023, 2, 1), date(2023, 1, 1))
                .is_err()
        );
    }

    #[test]
    fn test_drink_rules() {
        let volume: Volume = "1.5".parse().unwrap();
        let drink = Drink::new(
            "Cola",
            Money::from_cents(249),
            date(2023, 1, 1),
            date(2023, 12, 31),
            volume,
        )
        .unwrap();
        assert_eq!(
            drink.to_string(),
            "Cola ($2.49), shelf life: 2023.01.01-2023.12.31, volume: 1.5L"
        );
        assert_eq!(drink.food().name(), "Cola");

        let zero: Volume = "0".parse().unwrap();
        assert!(Drink::new(
            "Cola",
            Money::from_cents(249),
            date(2023, 1, 1),
            date(2023, 12, 31),
            zero
        )
        .is_err());

        // Inherits the food date rule.
        assert!(Drink::new(
            "Cola",
            Money::from_cents(249),
            date(2023, 12, 31),
            date(2023, 1, 1),
            volume
        )
        .is_err());
    }

    #[test]
    fn test_catalog_item_base_view() {
        let product = Product::new("Apple", Money::from_cents(199), "Fresh Farms").unwrap();
        let item = CatalogItem::Product(&product);
        assert_eq!(item.name(), "Apple");
        assert_eq!(item.price().cents(), 199);
        assert_eq!(item.kind(), RecordKind::Product);
    }

    #[test]
    fn test_record_serializes_with_kind_tag() {
        let record = Record::Delivery(Delivery::new("2023.12.25", "Milk", 3).unwrap());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "delivery");
        assert_eq!(json["name"], "Milk");
        assert_eq!(json["count"], 3);
    }
}
