//! # Inventory Demo
//!
//! Walks through one session against the file store:
//! 1.  Loading (or seeding) the product list.
//! 2.  Filtering the view.
//! 3.  Adding, editing and deleting a [`Product`](inventory::model::Product).
//!
//! Set `INVENTORY_DATA_DIR` to choose where the list is kept and `RUST_LOG` for verbosity.

use inventory::config::AppConfig;
use inventory::form::Field;
use inventory::lifecycle::{InventorySession, SessionError};
use inventory::model::{Filter, ProductId, StockStatus};
use resource_actor::tracing::setup_tracing;
use tracing::{info, warn, Instrument};

fn log_rows(session: &InventorySession) {
    let summary = session.summary();
    info!(
        total = summary.total,
        in_stock = summary.in_stock,
        low_stock = summary.low_stock,
        out_of_stock = summary.out_of_stock,
        "Rows"
    );
    for product in session.visible() {
        info!(
            id = %product.id,
            name = %product.name,
            sku = %product.sku,
            price = product.price,
            quantity = product.quantity,
            status = %product.status(),
            "  row"
        );
    }
}

async fn fill_and_submit(
    session: &mut InventorySession,
    values: [(Field, &str); 5],
) -> Result<(), SessionError> {
    for (field, value) in values {
        session.edit_field(field, value)?;
    }
    match session.submit_form().await {
        Ok(product) => {
            info!(id = %product.id, name = %product.name, "Saved");
            Ok(())
        }
        Err(SessionError::Form(e)) => {
            warn!(error = %e, "Form rejected, cancelling");
            session.cancel_form();
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = AppConfig::from_env().map_err(|e| e.to_string())?;
    info!(data_dir = %config.data_dir.display(), key = %config.storage_key, "Starting inventory");

    let mut session = InventorySession::start(config.storage(), config.storage_key.clone())
        .await
        .map_err(|e| e.to_string())?;
    log_rows(&session);

    async {
        info!("Showing low stock only");
        session.set_status_filter(Filter::Only(StockStatus::LowStock));
        log_rows(&session);
        session.set_status_filter(Filter::All);
    }
    .instrument(tracing::info_span!("filtering"))
    .await;

    let added = async {
        session.open_add();
        fill_and_submit(
            &mut session,
            [
                (Field::Name, "Bookshelf"),
                (Field::Sku, "SHF-010"),
                (Field::Price, "89.999"),
                (Field::Quantity, "3"),
                (Field::Category, "furniture"),
            ],
        )
        .await?;

        info!("Adding a second Desk Lamp, expecting a SKU clash");
        session.open_add();
        fill_and_submit(
            &mut session,
            [
                (Field::Name, "Desk Lamp"),
                (Field::Sku, "lmp-007"),
                (Field::Price, "19.99"),
                (Field::Quantity, "2"),
                (Field::Category, "Home"),
            ],
        )
        .await
    }
    .instrument(tracing::info_span!("adding"))
    .await;
    added.map_err(|e| e.to_string())?;

    let edited = async {
        match session.open_edit(ProductId::from("p3")).await {
            Ok(()) => {
                session.edit_field(Field::Quantity, "5")?;
                let product = session.submit_form().await?;
                info!(id = %product.id, status = %product.status(), "Restocked");
            }
            Err(e) => warn!(error = %e, "Nothing to restock"),
        }
        Ok::<_, SessionError>(())
    }
    .instrument(tracing::info_span!("editing"))
    .await;
    edited.map_err(|e| e.to_string())?;
    log_rows(&session);

    let shelf = session
        .products()
        .iter()
        .find(|p| p.sku == "SHF-010")
        .map(|p| p.id.clone());
    if let Some(id) = shelf {
        let removed = session
            .delete(id, &mut |message: &str| {
                info!(prompt = message, "Confirming");
                true
            })
            .instrument(tracing::info_span!("deleting"))
            .await
            .map_err(|e| e.to_string())?;
        info!(removed, "Deleted bookshelf");
    }
    log_rows(&session);

    session.shutdown().await.map_err(|e| e.to_string())?;

    info!("Demo completed successfully");
    Ok(())
}
