//! `ActorEntity` binding for [`Product`].
//!
//! Products are identified by their [`ProductId`] and kept unique by their normalised SKU.

use super::seed::demo_products;
use crate::model::{Product, ProductId};
use resource_actor::ActorEntity;

impl ActorEntity for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Case-insensitive, whitespace-trimmed SKU.
    fn unique_key(&self) -> Option<String> {
        Some(Product::sku_key(&self.sku))
    }

    fn seed() -> Vec<Self> {
        demo_products()
    }
}
