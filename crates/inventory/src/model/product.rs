//! Represents a product in the inventory.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
//! allowing it to be kept by a [`ResourceActor`](resource_actor::ResourceActor).
//!
//! See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
//! - the SKU uniqueness key ([`Product::sku_key`])
//! - the demo seed ([`demo_products`](crate::product_actor::demo_products))

use crate::model::{Category, StockStatus};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Length of generated product ids.
const ID_LEN: usize = 10;

/// Opaque, immutable identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    /// Generates a short, practically unique id from a random UUID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string().chars().take(ID_LEN).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    /// Always positive, rounded to cents.
    pub price: f64,
    pub quantity: u32,
    pub category: Category,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Identifier, kept for the product's whole life
    /// * `name` - Display name
    /// * `sku` - Stock keeping unit, unique regardless of case
    /// * `price` - Unit price
    /// * `quantity` - Units on hand
    /// * `category` - One of the fixed [`Category`] values
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        sku: impl Into<String>,
        price: f64,
        quantity: u32,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sku: sku.into(),
            price,
            quantity,
            category,
        }
    }

    /// Stock status derived from the quantity on hand.
    pub fn status(&self) -> StockStatus {
        StockStatus::from_quantity(self.quantity)
    }

    /// Normalised form of a SKU used for uniqueness checks.
    pub fn sku_key(sku: &str) -> String {
        sku.trim().to_lowercase()
    }
}
