use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response, UpsertOutcome};
use tokio::sync::{mpsc, oneshot};

/// ## ResourceClient
///
/// The `ResourceClient<T>` provides a type-safe, async API for interacting with a
/// `ResourceActor<T>`. It forwards requests over a Tokio mpsc channel and returns results via
/// oneshot channels.
///
/// * **Cloneable** - holds only a sender, so cloning is inexpensive.
/// * **Shutdown** - the actor stops once the last clone is dropped.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Snapshot of the whole collection in storage order.
    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// Inserts or replaces `item`; fails with [`FrameworkError::Conflict`] on a unique key clash.
    pub async fn upsert(&self, item: T) -> Result<UpsertOutcome, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Upsert { item, respond_to })
            .await
    }

    /// Removes an entity. Returns `false` when no entity had that id.
    pub async fn delete(&self, id: T::Id) -> Result<bool, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    /// Checks whether any entity other than `except` holds the normalised `key`.
    pub async fn key_exists(
        &self,
        key: impl Into<String>,
        except: Option<T::Id>,
    ) -> Result<bool, FrameworkError> {
        let key = key.into();
        self.request(|respond_to| ResourceRequest::KeyExists {
            key,
            except,
            respond_to,
        })
        .await
    }
}
