//! Fixed enumerations shown in the dropdowns: categories, stock status and the `All`-or-one
//! filters built on them.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Label used by every filter dropdown for "no restriction".
pub const ALL_LABEL: &str = "All";

/// Highest quantity still reported as [`StockStatus::LowStock`].
pub const LOW_STOCK_MAX: u32 = 10;

/// A string did not match any known label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

/// Product category. Labels are kept exactly as the catalogue has always stored them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "electronics")]
    Electronics,
    #[serde(rename = "furniture")]
    Furniture,
    #[serde(rename = "stationery")]
    Stationery,
    Clothing,
    Home,
    Books,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Electronics,
        Category::Furniture,
        Category::Stationery,
        Category::Clothing,
        Category::Home,
        Category::Books,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Furniture => "furniture",
            Category::Stationery => "stationery",
            Category::Clothing => "Clothing",
            Category::Home => "Home",
            Category::Books => "Books",
            Category::Accessories => "Accessories",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseLabelError {
                kind: "category",
                value: s.to_string(),
            })
    }
}

/// Stock level label derived from a quantity. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub const ALL: [StockStatus; 3] = [
        StockStatus::InStock,
        StockStatus::LowStock,
        StockStatus::OutOfStock,
    ];

    pub fn from_quantity(quantity: u32) -> Self {
        match quantity {
            0 => StockStatus::OutOfStock,
            1..=LOW_STOCK_MAX => StockStatus::LowStock,
            _ => StockStatus::InStock,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

impl Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StockStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| ParseLabelError {
                kind: "stock status",
                value: s.to_string(),
            })
    }
}

/// Dropdown filter: either everything, or one specific value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

pub type CategoryFilter = Filter<Category>;
pub type StatusFilter = Filter<StockStatus>;

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

impl<T: Display> Display for Filter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Filter::All => f.write_str(ALL_LABEL),
            Filter::Only(value) => value.fmt(f),
        }
    }
}

impl<T: FromStr<Err = ParseLabelError>> FromStr for Filter<T> {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_LABEL {
            return Ok(Filter::All);
        }
        s.parse().map(Filter::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_thresholds() {
        assert_eq!(StockStatus::from_quantity(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_quantity(1), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(10), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(11), StockStatus::InStock);
        assert_eq!(StockStatus::from_quantity(u32::MAX), StockStatus::InStock);
    }

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert!("Electronics".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::Stationery).unwrap();
        assert_eq!(json, "\"stationery\"");
        let back: Category = serde_json::from_str("\"Accessories\"").unwrap();
        assert_eq!(back, Category::Accessories);
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("All".parse::<CategoryFilter>(), Ok(Filter::All));
        assert_eq!(
            "furniture".parse::<CategoryFilter>(),
            Ok(Filter::Only(Category::Furniture))
        );
        assert_eq!(
            "Low Stock".parse::<StatusFilter>(),
            Ok(Filter::Only(StockStatus::LowStock))
        );
        assert_eq!(
            "Sold Out".parse::<StatusFilter>(),
            Err(ParseLabelError {
                kind: "stock status",
                value: "Sold Out".to_string()
            })
        );
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(&Category::Books));
        assert!(Filter::Only(Category::Books).matches(&Category::Books));
        assert!(!Filter::Only(Category::Home).matches(&Category::Books));
    }

    #[test]
    fn test_filter_display_matches_dropdown_labels() {
        assert_eq!(StatusFilter::All.to_string(), "All");
        assert_eq!(Filter::Only(StockStatus::OutOfStock).to_string(), "Out of Stock");
    }
}
