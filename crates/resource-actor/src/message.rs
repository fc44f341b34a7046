//! # Resource Messages
//!
//! Defines the request enum the client sends to the actor and the `Response` alias
//! for the one-shot reply channel.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// What an upsert did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No entity had the id; the item was prepended.
    Inserted,
    /// An entity with the same id was replaced in place.
    Replaced,
}

/// Internal message type sent to the actor to request operations.
///
/// # Collection-Oriented Requests
/// The actor keeps one ordered collection and writes it through to storage as a whole.
/// Requests therefore address the collection rather than single-entity lifecycles:
///
/// - **List**: Snapshot of every entity in storage order.
/// - **Get**: Fetches one entity by id.
/// - **Upsert**: Insert-or-replace by id, guarded by the unique key.
/// - **Delete**: Removes an entity; unknown ids are a no-op.
/// - **KeyExists**: Uniqueness probe that can ignore one entity (the one being edited).
///
/// Every mutating variant is followed by a full-document save before the reply is sent.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Upsert {
        item: T,
        respond_to: Response<UpsertOutcome>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
    KeyExists {
        key: String,
        except: Option<T::Id>,
        respond_to: Response<bool>,
    },
}
