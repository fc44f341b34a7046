//! # Resource Actor
//!
//! This crate provides the building blocks for keeping a collection of records behind a single
//! Tokio actor that writes the whole collection through to a key-value store after every change.
//!
//! ## Why an Actor?
//!
//! A form-driven application mutates its records only in response to discrete user actions.
//! Routing every action through one actor gives that model for free:
//!
//! - **One writer**: requests are handled one at a time, in arrival order
//! - **No locks**: the actor exclusively owns its collection
//! - **Write-through**: the persisted document is rewritten before the reply is sent; a failed
//!   write is logged and the in-memory change is kept
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - your record type, its id, uniqueness key and seed data
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing, ordering, persistence
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe async access
//! 4. **Storage Layer** ([`storage`]) - where the serialized collection lives
//!
//! ## Quick Example
//!
//! ```rust
//! use resource_actor::{ActorEntity, FrameworkError, ResourceActor, UpsertOutcome};
//! use resource_actor::storage::MemoryStorage;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Book { id: String, isbn: String }
//!
//! impl ActorEntity for Book {
//!     type Id = String;
//!     fn id(&self) -> &String { &self.id }
//!     fn unique_key(&self) -> Option<String> { Some(self.isbn.to_lowercase()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Book>::new(10, MemoryStorage::new(), "books");
//!     tokio::spawn(actor.run());
//!
//!     let first = Book { id: "a".into(), isbn: "X1".into() };
//!     assert_eq!(client.upsert(first).await, Ok(UpsertOutcome::Inserted));
//!
//!     // Same key, different id: refused.
//!     let clash = Book { id: "b".into(), isbn: "x1".into() };
//!     assert!(matches!(client.upsert(clash).await, Err(FrameworkError::Conflict(_))));
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers client requests from a queue of expectations, so wrappers can be
//! tested without an actor. [`storage::MemoryStorage`] lets a test see exactly what was persisted.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod storage;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::{FrameworkError, StorageError};
pub use message::{ResourceRequest, Response, UpsertOutcome};
