//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter driven by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: load/seed outcome, startup size, shutdown size
//! - **Mutations**: Upsert (with outcome) and Delete at `info`, rejected upserts at `warn`
//! - **Persistence**: every failed read, parse or write at `error`; these never stop the actor
//! - **Payloads**: request bodies at `debug`
//!
//! ## Usage Examples
//!
//! ```bash
//! # State changes only
//! RUST_LOG=info cargo run
//!
//! # Show full payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the framework
//! RUST_LOG=resource_actor=debug cargo run
//! ```
//!
//! Fields are structured, so with `RUST_LOG=info` a session start looks like:
//!
//! ```text
//! INFO Seeded entity_type="Product" key=products_v1 size=6
//! INFO Actor started entity_type="Product" size=6
//! INFO Upserted entity_type="Product" id=k3f9a0c21e outcome=Inserted size=7
//! ```

/// Initializes the global subscriber. Call once, from `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
