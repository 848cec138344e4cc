//! # Catalog
//!
//! In-memory aggregate of every record parsed in one session.
//!
//! ## Collections
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Catalog                                       │
//! │                                                                         │
//! │   products ──┐                                                          │
//! │   foods ─────┼──► get_all_products()  (products, foods, drinks order)  │
//! │   drinks ────┘                                                          │
//! │   deliveries      (kept apart, not a product)                          │
//! │                                                                         │
//! │   Append-only. No de-duplication, names are not keys.                  │
//! │   clear() empties all four at once.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is plain owned data with no interior mutability. Callers
//! that ingest from several threads keep one catalog per thread and merge
//! with [`Catalog::extend`] afterwards.

use std::fmt;

use serde::Serialize;

use crate::money::Money;
use crate::types::{CatalogItem, Delivery, Drink, Food, Product, RecordKind};

/// Per-kind collections of parsed records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    deliveries: Vec<Delivery>,
    foods: Vec<Food>,
    drinks: Vec<Drink>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Appends (parsers only)
    // =========================================================================

    pub(crate) fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    pub(crate) fn add_delivery(&mut self, delivery: Delivery) {
        self.deliveries.push(delivery);
    }

    pub(crate) fn add_food(&mut self, food: Food) {
        self.foods.push(food);
    }

    pub(crate) fn add_drink(&mut self, drink: Drink) {
        self.drinks.push(drink);
    }

    /// Moves every record of `other` into this catalog, keeping order.
    pub fn extend(&mut self, other: Catalog) {
        self.products.extend(other.products);
        self.deliveries.extend(other.deliveries);
        self.foods.extend(other.foods);
        self.drinks.extend(other.drinks);
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn drinks(&self) -> &[Drink] {
        &self.drinks
    }

    /// Every product-like record: products, then foods, then drinks.
    pub fn get_all_products(&self) -> Vec<CatalogItem<'_>> {
        self.products
            .iter()
            .map(CatalogItem::Product)
            .chain(self.foods.iter().map(CatalogItem::Food))
            .chain(self.drinks.iter().map(CatalogItem::Drink))
            .collect()
    }

    /// Size of [`Catalog::get_all_products`] without building it.
    pub fn product_count(&self) -> usize {
        self.products.len() + self.foods.len() + self.drinks.len()
    }

    /// Number of records of one kind.
    pub fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Product => self.products.len(),
            RecordKind::Delivery => self.deliveries.len(),
            RecordKind::Food => self.foods.len(),
            RecordKind::Drink => self.drinks.len(),
        }
    }

    /// Records across all four collections.
    pub fn len(&self) -> usize {
        self.product_count() + self.deliveries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empties all four collections.
    pub fn clear(&mut self) {
        self.products.clear();
        self.deliveries.clear();
        self.foods.clear();
        self.drinks.clear();
    }

    /// Counts and price total for the summary report.
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            products: self.products.len(),
            deliveries: self.deliveries.len(),
            foods: self.foods.len(),
            drinks: self.drinks.len(),
            all_products: self.product_count(),
            total_price: Money::checked_sum(self.get_all_products().iter().map(CatalogItem::price)),
        }
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Snapshot of catalog sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub products: usize,
    pub deliveries: usize,
    pub foods: usize,
    pub drinks: usize,
    pub all_products: usize,
    /// `None` when the total does not fit in i64 cents.
    pub total_price: Option<Money>,
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Products: {}", self.products)?;
        writeln!(f, "Deliveries: {}", self.deliveries)?;
        writeln!(f, "Foods: {}", self.foods)?;
        writeln!(f, "Drinks: {}", self.drinks)?;
        writeln!(f, "All products: {}", self.all_products)?;
        match self.total_price {
            Some(total) => write!(f, "Total price: {}", total),
            None => write!(f, "Total price: out of range"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filled() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_drink(
            Drink::new(
                "Cola",
                Money::from_cents(249),
                date(2023, 1, 1),
                date(2023, 12, 31),
                "1.5".parse().unwrap(),
            )
            .unwrap(),
        );
        catalog.add_food(
            Food::new("Cheese", Money::from_cents(599), date(2023, 1, 1), date(2023, 12, 31))
                .unwrap(),
        );
        catalog.add_product(Product::new("Apple", Money::from_cents(199), "Fresh Farms").unwrap());
        catalog.add_delivery(Delivery::new("2023.12.25", "Milk", 3).unwrap());
        catalog
    }

    #[test]
    fn test_merged_view_order() {
        let catalog = filled();
        let kinds: Vec<RecordKind> = catalog.get_all_products().iter().map(|i| i.kind()).collect();
        assert_eq!(
            kinds,
            vec![RecordKind::Product, RecordKind::Food, RecordKind::Drink]
        );
        assert_eq!(catalog.product_count(), 3);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut catalog = Catalog::new();
        let apple = Product::new("Apple", Money::from_cents(199), "Fresh Farms").unwrap();
        catalog.add_product(apple.clone());
        catalog.add_product(apple);
        assert_eq!(catalog.count(RecordKind::Product), 2);
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut catalog = filled();
        catalog.clear();

        assert!(catalog.is_empty());
        assert!(catalog.get_all_products().is_empty());
        for kind in RecordKind::ALL {
            assert_eq!(catalog.count(kind), 0);
        }
    }

    #[test]
    fn test_summary() {
        let summary = filled().summary();
        assert_eq!(summary.all_products, 3);
        assert_eq!(summary.deliveries, 1);
        assert_eq!(summary.total_price, Some(Money::from_cents(199 + 599 + 249)));
        assert_eq!(
            summary.to_string(),
            "Products: 1\nDeliveries: 1\nFoods: 1\nDrinks: 1\nAll products: 3\nTotal price: $10.47"
        );
    }

    #[test]
    fn test_extend_merges_catalogs() {
        let mut left = filled();
        left.extend(filled());
        assert_eq!(left.len(), 8);
        assert_eq!(left.get_all_products().len(), 6);
    }

    #[test]
    fn test_summary_total_overflow_is_reported() {
        let mut catalog = Catalog::new();
        let price: Money = "50000000000000000".parse().unwrap();
        catalog.add_product(Product::new("A", price, "B").unwrap());
        catalog.add_product(Product::new("A", price, "B").unwrap());

        let summary = catalog.summary();
        assert_eq!(summary.all_products, 2);
        assert_eq!(summary.total_price, None);
        assert!(summary.to_string().ends_with("Total price: out of range"));
    }
}
