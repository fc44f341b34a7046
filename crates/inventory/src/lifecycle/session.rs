use crate::clients::ProductClient;
use crate::form::{Field, FieldError, FormError, ProductForm};
use crate::model::{CategoryFilter, Product, ProductId, StatusFilter};
use crate::product_actor::{self, ProductError};
use crate::view::{project, InventorySummary, ViewQuery};
use resource_actor::storage::KeyValueStorage;
use resource_actor::ActorClient;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument};

/// Blocking yes/no question asked before a destructive action.
///
/// Any `FnMut(&str) -> bool` closure is a prompt.
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Actor task failed: {0}")]
    ActorTask(String),
}

/// One user's inventory screen: the running product actor, the filter inputs, the form and
/// the rows currently shown.
///
/// Every mutation and every filter change recomputes the visible rows, so
/// [`visible`](Self::visible) always reflects the store.
///
/// # Example
///
/// ```rust
/// use inventory::lifecycle::InventorySession;
/// use resource_actor::storage::MemoryStorage;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut session = InventorySession::start(MemoryStorage::new(), "products_v1").await?;
///
/// session.set_search("lamp");
/// assert_eq!(session.visible().len(), 1);
///
/// let lamp = session.visible()[0].id.clone();
/// session.delete(lamp, &mut |_: &str| true).await?;
/// assert!(session.visible().is_empty());
///
/// session.shutdown().await?;
/// # Ok(())
/// # }
/// ```
pub struct InventorySession {
    client: ProductClient,
    handle: JoinHandle<()>,
    /// Last snapshot of the store, in storage order.
    products: Vec<Product>,
    query: ViewQuery,
    visible: Vec<Product>,
    form: ProductForm,
}

impl InventorySession {
    /// Spawns the product actor on `storage` and takes the first snapshot.
    ///
    /// The actor loads (or seeds) the list before answering, so the snapshot already
    /// contains whatever the storage held.
    pub async fn start(
        storage: impl KeyValueStorage,
        key: impl Into<String>,
    ) -> Result<Self, SessionError> {
        let (actor, generic_client) = product_actor::new(storage, key);
        let handle = tokio::spawn(actor.run());

        let mut session = Self {
            client: ProductClient::new(generic_client),
            handle,
            products: Vec::new(),
            query: ViewQuery::default(),
            visible: Vec::new(),
            form: ProductForm::new(),
        };
        session.refresh().await?;
        info!(size = session.products.len(), "Inventory session started");
        Ok(session)
    }

    pub fn client(&self) -> &ProductClient {
        &self.client
    }

    /// Every product, in storage order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The filtered rows, Z to A by name.
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary::of(&self.visible)
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.search = text.into();
        self.recompute();
    }

    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.query.category = filter;
        self.recompute();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.query.status = filter;
        self.recompute();
    }

    pub fn open_add(&mut self) {
        self.form.open_add();
    }

    /// Opens the form on a copy of the stored product.
    pub async fn open_edit(&mut self, id: ProductId) -> Result<(), SessionError> {
        let product = self.client.require(id).await?;
        self.form.open_edit(&product);
        Ok(())
    }

    pub fn edit_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), SessionError> {
        Ok(self.form.set_field(field, value)?)
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
    }

    /// Validates the open form and saves the product it describes.
    ///
    /// On success the form closes and the rows are recomputed. On failure the form stays
    /// open with its field errors and the store is untouched.
    #[instrument(skip(self))]
    pub async fn submit_form(&mut self) -> Result<Product, SessionError> {
        let sku_taken = match self.form.sku_probe() {
            Some((sku, except)) => self.client.sku_exists(&sku, except).await?,
            None => false,
        };

        let product = match self.form.validate(sku_taken) {
            Ok(product) => product,
            Err(e) => {
                debug!(error = %e, "Form rejected");
                return Err(e.into());
            }
        };

        match self.client.save_product(product.clone()).await {
            Ok(outcome) => {
                info!(id = %product.id, ?outcome, "Product saved");
                self.form.finish();
                self.refresh().await?;
                Ok(product)
            }
            // Another save took the SKU between the check and the write.
            Err(ProductError::DuplicateSku(_)) => {
                let errors = self.form.reject(Field::Sku, FieldError::SkuTaken)?;
                Err(FormError::Invalid(errors).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes `id` once `prompt` agrees. Returns whether a product was removed.
    ///
    /// Declining is not an error: nothing is sent to the store and `Ok(false)` comes back.
    #[instrument(skip(self, prompt))]
    pub async fn delete(
        &mut self,
        id: ProductId,
        prompt: &mut impl ConfirmPrompt,
    ) -> Result<bool, SessionError> {
        let message = match self.products.iter().find(|p| p.id == id) {
            Some(product) => format!("Delete \"{}\"?", product.name),
            None => "Delete this product?".to_string(),
        };
        if !prompt.confirm(&message) {
            debug!("Delete declined");
            return Ok(false);
        }

        let removed = self.client.delete(id).await?;
        self.refresh().await?;
        Ok(removed)
    }

    /// Drops the client and waits for the actor to finish.
    pub async fn shutdown(self) -> Result<(), SessionError> {
        info!("Shutting down inventory session...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Actor task failed");
            return Err(SessionError::ActorTask(e.to_string()));
        }

        info!("Inventory session shutdown complete.");
        Ok(())
    }

    async fn refresh(&mut self) -> Result<(), SessionError> {
        self.products = self.client.list().await?;
        self.recompute();
        Ok(())
    }

    fn recompute(&mut self) {
        self.visible = project(&self.products, &self.query);
        debug!(rows = self.visible.len(), "View recomputed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Filter, StockStatus};
    use resource_actor::storage::MemoryStorage;

    async fn session() -> InventorySession {
        InventorySession::start(MemoryStorage::new(), "products_v1")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_start_shows_seed_sorted() {
        let session = session().await;

        let names: Vec<_> = session.visible().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Wireless Mouse",
                "Office Chair",
                "Notebook A5",
                "Leather Wallet",
                "Desk Lamp",
                "Cotton T-Shirt",
            ]
        );
        assert_eq!(session.summary().total, 6);
    }

    #[tokio::test]
    async fn test_filter_changes_recompute() {
        let mut session = session().await;

        session.set_category_filter(Filter::Only(Category::Furniture));
        assert_eq!(session.visible().len(), 1);

        session.set_category_filter(Filter::All);
        session.set_status_filter(Filter::Only(StockStatus::OutOfStock));
        assert_eq!(session.visible()[0].id, ProductId::from("p3"));

        session.set_status_filter(Filter::All);
        session.set_search("zzz");
        assert!(session.visible().is_empty());
        // The store itself is untouched by filtering.
        assert_eq!(session.products().len(), 6);
    }

    #[tokio::test]
    async fn test_add_prepends_and_closes_form() {
        let mut session = session().await;

        session.open_add();
        session.edit_field(Field::Name, "Bookshelf").unwrap();
        session.edit_field(Field::Sku, "SHF-010").unwrap();
        session.edit_field(Field::Price, "89.5").unwrap();
        session.edit_field(Field::Quantity, "3").unwrap();
        session.edit_field(Field::Category, "furniture").unwrap();
        let saved = session.submit_form().await.unwrap();

        assert!(!session.form().is_open());
        assert_eq!(session.products()[0], saved);
        assert_eq!(session.products().len(), 7);
    }

    #[tokio::test]
    async fn test_invalid_form_keeps_store_unchanged() {
        let mut session = session().await;

        session.open_add();
        let err = session.submit_form().await.unwrap_err();

        assert!(matches!(err, SessionError::Form(FormError::Invalid(_))));
        assert!(session.form().is_open());
        assert_eq!(session.products().len(), 6);
    }

    #[tokio::test]
    async fn test_edit_keeps_own_sku() {
        let mut session = session().await;

        session.open_edit(ProductId::from("p6")).await.unwrap();
        session.edit_field(Field::Sku, "lmp-007").unwrap();
        let saved = session.submit_form().await.unwrap();

        assert_eq!(saved.id, ProductId::from("p6"));
        assert_eq!(saved.sku, "lmp-007");
        assert_eq!(session.products().len(), 6);
    }

    #[tokio::test]
    async fn test_open_edit_unknown_id() {
        let mut session = session().await;

        let err = session.open_edit(ProductId::from("nope")).await.unwrap_err();

        assert!(matches!(
            err,
            SessionError::Product(ProductError::NotFound(_))
        ));
        assert!(!session.form().is_open());
    }

    #[tokio::test]
    async fn test_delete_prompt_names_product() {
        let mut session = session().await;
        let mut asked = Vec::new();

        let removed = session
            .delete(ProductId::from("p2"), &mut |message: &str| {
                asked.push(message.to_string());
                true
            })
            .await
            .unwrap();

        assert!(removed);
        assert_eq!(asked, ["Delete \"Office Chair\"?"]);
        assert_eq!(session.products().len(), 5);
    }

    #[tokio::test]
    async fn test_shutdown_joins_actor() {
        let session = session().await;

        assert!(session.shutdown().await.is_ok());
    }
}
