//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a record type must satisfy to be kept by the
//! generic [`ResourceActor`](crate::ResourceActor). The actor owns an *ordered* list of entities,
//! persists the whole list after every mutation, and enforces an optional uniqueness key.
//!
//! # Associated Types
//! We use an associated `Id` so a `ResourceClient<Product>` only ever accepts product ids.
//! You can't accidentally delete a product with some other resource's identifier.
//!
//! # Provided Methods
//! - [`ActorEntity::unique_key`] - defaults to `None` (no uniqueness constraint)
//! - [`ActorEntity::seed`] - defaults to an empty list
//!
//! Override them only when the resource needs it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by `ResourceActor`.
///
/// Entities are persisted as a JSON array, so they must round-trip through serde.
pub trait ActorEntity: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The immutable identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Returns the entity's identifier.
    fn id(&self) -> &Self::Id;

    /// Normalised key that must be unique across the collection.
    ///
    /// Two entities with different ids may never share a key. Return `None` for records
    /// that do not participate in the constraint.
    fn unique_key(&self) -> Option<String> {
        None
    }

    /// Records installed when storage holds nothing under the actor's key.
    ///
    /// The seed is persisted immediately after it is installed.
    fn seed() -> Vec<Self> {
        Vec::new()
    }
}
