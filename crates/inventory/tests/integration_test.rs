use inventory::form::{Field, FieldError, FormError};
use inventory::lifecycle::{InventorySession, SessionError};
use inventory::model::{Category, Filter, Product, ProductId, StockStatus};
use inventory::product_actor::STORAGE_KEY;
use resource_actor::storage::{FileStorage, KeyValueStorage, MemoryStorage};

async fn start(storage: MemoryStorage) -> InventorySession {
    InventorySession::start(storage, STORAGE_KEY)
        .await
        .expect("Failed to start session")
}

fn persisted(storage: &MemoryStorage) -> Vec<Product> {
    let raw = storage
        .get_item(STORAGE_KEY)
        .unwrap()
        .expect("product list persisted");
    serde_json::from_str(&raw).expect("persisted list parses")
}

async fn fill(session: &mut InventorySession, values: [(Field, &str); 5]) {
    for (field, value) in values {
        session.edit_field(field, value).expect("form is open");
    }
}

/// First start with nothing stored installs the demo set and writes it straight away.
#[tokio::test]
async fn test_first_load_seeds_and_persists_six_products() {
    let storage = MemoryStorage::new();
    let session = start(storage.clone()).await;

    assert_eq!(session.products().len(), 6);
    assert_eq!(persisted(&storage), session.products());
    assert!(session
        .products()
        .iter()
        .any(|p| p.name == "Desk Lamp" && p.sku == "LMP-007"));

    session.shutdown().await.unwrap();
}

/// A stored value that does not parse yields an empty list and is not replaced.
#[tokio::test]
async fn test_corrupt_storage_starts_empty() {
    let storage = MemoryStorage::with_item(STORAGE_KEY, "not json at all");
    let session = start(storage.clone()).await;

    assert!(session.products().is_empty());
    assert!(session.visible().is_empty());
    assert_eq!(
        storage.get_item(STORAGE_KEY).unwrap().as_deref(),
        Some("not json at all")
    );
}

/// Adding a second "Desk Lamp" with an existing SKU fails and changes nothing.
#[tokio::test]
async fn test_duplicate_sku_is_rejected() {
    let storage = MemoryStorage::new();
    let mut session = start(storage.clone()).await;
    let before = session.products().to_vec();

    session.open_add();
    fill(
        &mut session,
        [
            (Field::Name, "Desk Lamp"),
            (Field::Sku, "LMP-007"),
            (Field::Price, "19.99"),
            (Field::Quantity, "4"),
            (Field::Category, "Home"),
        ],
    )
    .await;
    let err = session.submit_form().await.unwrap_err();

    let SessionError::Form(FormError::Invalid(errors)) = err else {
        panic!("expected field errors");
    };
    assert_eq!(errors.get(Field::Sku), Some(FieldError::SkuTaken));
    assert_eq!(errors.len(), 1);
    assert_eq!(session.products(), before);
    assert_eq!(persisted(&storage), before);
    assert!(session.form().is_open());
}

/// The uniqueness check ignores case and surrounding spaces.
#[tokio::test]
async fn test_duplicate_sku_ignores_case() {
    let mut session = start(MemoryStorage::new()).await;

    session.open_add();
    fill(
        &mut session,
        [
            (Field::Name, "Mouse Pad"),
            (Field::Sku, "  mse-001 "),
            (Field::Price, "5"),
            (Field::Quantity, "40"),
            (Field::Category, "electronics"),
        ],
    )
    .await;

    assert!(matches!(
        session.submit_form().await,
        Err(SessionError::Form(FormError::Invalid(_)))
    ));
    assert_eq!(session.products().len(), 6);
}

/// Restocking p3 moves it from Out of Stock to Low Stock.
#[tokio::test]
async fn test_edit_quantity_changes_status() {
    let storage = MemoryStorage::new();
    let mut session = start(storage.clone()).await;
    let p3 = ProductId::from("p3");

    session.set_status_filter(Filter::Only(StockStatus::OutOfStock));
    assert_eq!(session.visible().len(), 1);

    session.open_edit(p3.clone()).await.unwrap();
    session.edit_field(Field::Quantity, "5").unwrap();
    let saved = session.submit_form().await.unwrap();

    assert_eq!(saved.id, p3);
    assert_eq!(saved.status(), StockStatus::LowStock);
    assert!(session.visible().is_empty());
    // Edits replace in place: storage order is unchanged.
    let ids: Vec<_> = persisted(&storage).into_iter().map(|p| p.id).collect();
    let before: Vec<_> = ["p1", "p2", "p3", "p4", "p5", "p6"]
        .into_iter()
        .map(ProductId::from)
        .collect();
    assert_eq!(ids, before);

    session.set_status_filter(Filter::Only(StockStatus::LowStock));
    assert!(session.visible().iter().any(|p| p.id == p3));
}

/// Declining the prompt leaves the list alone.
#[tokio::test]
async fn test_declined_delete_is_noop() {
    let storage = MemoryStorage::new();
    let mut session = start(storage.clone()).await;

    let removed = session
        .delete(ProductId::from("p1"), &mut |_: &str| false)
        .await
        .unwrap();

    assert!(!removed);
    assert_eq!(session.products().len(), 6);
    assert_eq!(persisted(&storage).len(), 6);
}

#[tokio::test]
async fn test_confirmed_delete_persists() {
    let storage = MemoryStorage::new();
    let mut session = start(storage.clone()).await;

    let removed = session
        .delete(ProductId::from("p1"), &mut |_: &str| true)
        .await
        .unwrap();

    assert!(removed);
    assert_eq!(persisted(&storage).len(), 5);
    assert!(session.visible().iter().all(|p| p.id != ProductId::from("p1")));

    // Deleting again finds nothing.
    let again = session
        .delete(ProductId::from("p1"), &mut |_: &str| true)
        .await
        .unwrap();
    assert!(!again);
}

/// New products go to the front of the stored list, with cleaned-up fields.
#[tokio::test]
async fn test_add_is_prepended_and_normalised() {
    let storage = MemoryStorage::new();
    let mut session = start(storage.clone()).await;

    session.open_add();
    fill(
        &mut session,
        [
            (Field::Name, "  Paperback  "),
            (Field::Sku, " BK-100 "),
            (Field::Price, "7.456"),
            (Field::Quantity, "12.0"),
            (Field::Category, "Books"),
        ],
    )
    .await;
    session.submit_form().await.unwrap();

    let stored = persisted(&storage);
    assert_eq!(stored.len(), 7);
    let first = &stored[0];
    assert_eq!(first.name, "Paperback");
    assert_eq!(first.sku, "BK-100");
    assert_eq!(first.price, 7.46);
    assert_eq!(first.quantity, 12);
    assert_eq!(first.category, Category::Books);
    assert_eq!(first.status(), StockStatus::InStock);
    assert!(!session.form().is_open());
}

/// A cancelled form leaves no trace.
#[tokio::test]
async fn test_cancel_discards_draft() {
    let storage = MemoryStorage::new();
    let mut session = start(storage.clone()).await;

    session.open_add();
    session.edit_field(Field::Name, "Half typed").unwrap();
    session.cancel_form();

    assert!(!session.form().is_open());
    assert_eq!(persisted(&storage).len(), 6);
    assert!(matches!(
        session.edit_field(Field::Name, "late"),
        Err(SessionError::Form(FormError::NotOpen))
    ));
}

/// Saving and reloading from disk gives back the identical list.
#[tokio::test]
async fn test_file_round_trip_across_sessions() {
    let dir = tempfile::tempdir().unwrap();

    let mut session = InventorySession::start(FileStorage::new(dir.path()), STORAGE_KEY)
        .await
        .unwrap();
    session.open_edit(ProductId::from("p2")).await.unwrap();
    session.edit_field(Field::Price, "155.559").unwrap();
    session.submit_form().await.unwrap();
    let before = session.products().to_vec();
    session.shutdown().await.unwrap();

    let reloaded = InventorySession::start(FileStorage::new(dir.path()), STORAGE_KEY)
        .await
        .unwrap();

    assert_eq!(reloaded.products(), before);
    assert_eq!(reloaded.products()[1].price, 155.56);
}

/// A failed write is logged, not fatal: the session keeps working with the change applied.
#[tokio::test]
async fn test_write_failure_keeps_session_alive() {
    let storage = MemoryStorage::new();
    let mut session = start(storage.clone()).await;
    storage.set_fail_writes(true);

    let removed = session
        .delete(ProductId::from("p4"), &mut |_: &str| true)
        .await
        .unwrap();

    assert!(removed);
    assert_eq!(session.products().len(), 5);
    assert_eq!(persisted(&storage).len(), 6);
}

/// A price too large to store is refused, so the persisted list still reloads.
#[tokio::test]
async fn test_overflowing_price_is_refused_and_list_survives_restart() {
    let storage = MemoryStorage::new();
    let mut session = start(storage.clone()).await;

    session.open_add();
    fill(
        &mut session,
        [
            (Field::Name, "Yacht"),
            (Field::Sku, "YCT-001"),
            (Field::Price, "1e307"),
            (Field::Quantity, "1"),
            (Field::Category, "Home"),
        ],
    )
    .await;
    let err = session.submit_form().await.unwrap_err();

    let SessionError::Form(FormError::Invalid(errors)) = err else {
        panic!("expected field errors");
    };
    assert_eq!(errors.get(Field::Price), Some(FieldError::PriceInvalid));
    session.shutdown().await.unwrap();

    let reloaded = start(storage.clone()).await;
    assert_eq!(reloaded.products().len(), 6);
    assert!(persisted(&storage).iter().all(|p| p.price.is_finite()));
}
