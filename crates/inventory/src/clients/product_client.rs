//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain-specific methods.
use crate::model::{Product, ProductId};
use crate::product_actor::ProductError;
use resource_actor::{ActorClient, FrameworkError, ResourceClient, UpsertOutcome};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}

impl ProductClient {
    /// Inserts a new product at the front of the list, or replaces the one with the same id.
    ///
    /// Fails with [`ProductError::DuplicateSku`] if another product holds the SKU.
    #[instrument(skip(self, product), fields(id = %product.id, sku = %product.sku))]
    pub async fn save_product(&self, product: Product) -> Result<UpsertOutcome, ProductError> {
        debug!(?product, "Sending request");
        self.inner.upsert(product).await.map_err(Self::map_error)
    }

    /// Case-insensitive SKU lookup across every product except `except`.
    ///
    /// Pass the id of the product being edited so it may keep its own SKU.
    #[instrument(skip(self))]
    pub async fn sku_exists(
        &self,
        sku: &str,
        except: Option<ProductId>,
    ) -> Result<bool, ProductError> {
        debug!("Checking SKU");
        self.inner
            .key_exists(Product::sku_key(sku), except)
            .await
            .map_err(Self::map_error)
    }

    /// Fetches a product that must exist.
    #[instrument(skip(self))]
    pub async fn require(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id.clone()).await?.ok_or(ProductError::NotFound(id))
    }
}
