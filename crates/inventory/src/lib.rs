//! # Inventory
//!
//! Product inventory kept by a single [`ResourceActor`](resource_actor::ResourceActor) and
//! persisted to a key-value store after every change.
//!
//! ## Modules
//!
//! - **[model]**: [`Product`](model::Product), categories, stock status and the dropdown filters.
//! - **[product_actor]**: binds `Product` to the actor (SKU uniqueness key, demo seed).
//! - **[clients]**: [`ProductClient`](clients::ProductClient), the typed handle to the actor.
//! - **[view]**: the filtered, sorted rows and their summary.
//! - **[form]**: the add/edit form and its validation rules.
//! - **[lifecycle]**: [`InventorySession`](lifecycle::InventorySession), which ties them together.
//! - **[config]**: environment configuration.
//!
//! ## Testing
//!
//! See [`resource_actor::mock`] for utilities to test clients without spawning full actors,
//! and [`resource_actor::storage::MemoryStorage`] to inspect what was persisted.

pub mod clients;
pub mod config;
pub mod form;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod view;
