//! # View Projection
//!
//! Derives the displayed rows from the product list and the three filter inputs. Everything
//! here is pure: the same inputs always give the same ordered rows, and the product list
//! passed in is never reordered.

use crate::model::{CategoryFilter, Product, StatusFilter, StockStatus};
use std::cmp::Ordering;

/// The inputs of the list view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewQuery {
    /// Case-insensitive substring matched against name or SKU. Empty matches everything.
    pub search: String,
    pub category: CategoryFilter,
    pub status: StatusFilter,
}

impl ViewQuery {
    /// Whether `product` passes all three filters.
    pub fn matches(&self, product: &Product) -> bool {
        self.passes(product, &self.search.to_lowercase())
    }

    /// `needle` is the already lower-cased search text.
    fn passes(&self, product: &Product, needle: &str) -> bool {
        let found = needle.is_empty()
            || product.name.to_lowercase().contains(needle)
            || product.sku.to_lowercase().contains(needle);
        found && self.category.matches(&product.category) && self.status.matches(&product.status())
    }
}

/// Filters `products` by `query` and orders the result by name, Z before A.
pub fn project(products: &[Product], query: &ViewQuery) -> Vec<Product> {
    let needle = query.search.to_lowercase();
    let mut rows: Vec<Product> = products
        .iter()
        .filter(|p| query.passes(p, &needle))
        .cloned()
        .collect();
    rows.sort_by(|a, b| locale_cmp(&b.name, &a.name));
    rows
}

/// Collation used for names: letters compare without regard to case, and on a tie the
/// lower-case spelling comes first ("apple" < "Apple" < "banana").
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
    folded(a).cmp(&folded(b)).then_with(|| {
        a.chars()
            .map(char::is_uppercase)
            .cmp(b.chars().map(char::is_uppercase))
    })
}

/// Header counts for a set of rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventorySummary {
    pub total: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

impl InventorySummary {
    pub fn of(rows: &[Product]) -> Self {
        rows.iter()
            .fold(Self::default(), |mut summary, product| {
                summary.total += 1;
                match product.status() {
                    StockStatus::InStock => summary.in_stock += 1,
                    StockStatus::LowStock => summary.low_stock += 1,
                    StockStatus::OutOfStock => summary.out_of_stock += 1,
                }
                summary
            })
    }
}
