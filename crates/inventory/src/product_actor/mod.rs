//! # Product Actor
//!
//! The single source of truth for the product collection.
//!
//! ## Overview
//!
//! The Product actor is a [`ResourceActor<Product>`](resource_actor::ResourceActor): it loads
//! the list from storage (or installs the demo set), then serves list, get, upsert, delete and
//! SKU lookups one request at a time, writing the whole list back after every change.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`seed`] - the demo products
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use inventory::clients::ProductClient;
//! use inventory::product_actor;
//! use resource_actor::storage::MemoryStorage;
//! use resource_actor::ActorClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(MemoryStorage::new(), product_actor::STORAGE_KEY);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run());
//!
//!     // Nothing was persisted, so the demo set is installed.
//!     assert_eq!(client.list().await?.len(), 6);
//!     assert!(client.sku_exists("lmp-007", None).await?);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod seed;

pub use error::*;
pub use seed::demo_products;

use crate::model::Product;
use resource_actor::storage::KeyValueStorage;
use resource_actor::{ResourceActor, ResourceClient};

/// Storage key the product list is persisted under.
pub const STORAGE_KEY: &str = "products_v1";

/// Creates a new Product actor and its client.
pub fn new(
    storage: impl KeyValueStorage,
    key: impl Into<String>,
) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(32, storage, key)
}
