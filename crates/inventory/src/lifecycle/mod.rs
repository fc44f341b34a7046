//! # Session Lifecycle
//!
//! Wires the product actor, the view projection and the form into one
//! [`InventorySession`], and tears it down again.
//!
//! ## Control Flow
//!
//! ```text
//! submit_form ─► sku_exists ─► ProductForm::validate ─► save_product ─► refresh ─► project
//! delete      ─► ConfirmPrompt ─► (declined: stop) ─► delete ─► refresh ─► project
//! set_*       ─► project
//! ```
//!
//! The store is the only owner of the product list. The session keeps a snapshot that it
//! refreshes after every mutation it makes, and the visible rows are always recomputed from
//! that snapshot.
//!
//! ## Graceful Shutdown
//!
//! [`InventorySession::shutdown`] drops the client, which closes the actor's channel. The
//! actor drains what is queued, logs its final size and exits; the session then joins the
//! task. Every change was already written to storage as it happened, so nothing is flushed
//! at shutdown.
//!
//! ## Observability
//!
//! Call [`setup_tracing`](resource_actor::tracing::setup_tracing) once at startup:
//!
//! ```bash
//! RUST_LOG=info cargo run      # State changes
//! RUST_LOG=debug cargo run     # Full payloads and recomputes
//! ```

pub mod session;

pub use session::*;
