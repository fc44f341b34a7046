use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::{FrameworkError, StorageError};
use crate::message::{ResourceRequest, UpsertOutcome};
use crate::storage::KeyValueStorage;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// The generic actor that owns a persisted, ordered collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the collection (`items`), the
/// storage backend and the receiver end of the channel.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially* in a loop, so every mutation is applied and
/// written through to storage before the next request is even looked at. No `Mutex` is needed
/// around `items`, and the persisted document never lags behind the in-memory list.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` with a storage backend and key.
/// 2.  **Run**: Spawn `actor.run()`; it loads (or seeds) the collection before serving requests.
/// 3.  **Use**: Talk to it through the returned [`ResourceClient`].
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
/// use resource_actor::storage::MemoryStorage;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Note { id: u32, text: String }
///
/// impl ActorEntity for Note {
///     type Id = u32;
///     fn id(&self) -> &u32 { &self.id }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10, MemoryStorage::new(), "notes");
///     tokio::spawn(actor.run());
///
///     client.upsert(Note { id: 1, text: "hello".into() }).await.unwrap();
///     assert_eq!(client.list().await.unwrap().len(), 1);
/// }
/// ```
///
/// # Operations
///
/// * **Upsert**: rejects the item if a *different* entity holds its unique key; otherwise
///   replaces the entity with the same id in place, or prepends it. Then saves.
/// * **Delete**: removes the entity and saves; an unknown id changes nothing and reports `false`.
/// * **List / Get / KeyExists**: read-only, never touch storage.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    items: Vec<T>,
    storage: Box<dyn KeyValueStorage>,
    key: String,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel.
    /// * `storage` - Backend the collection is loaded from and written to.
    /// * `key` - Storage key holding the serialized collection.
    pub fn new(
        buffer_size: usize,
        storage: impl KeyValueStorage,
        key: impl Into<String>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            items: Vec::new(),
            storage: Box::new(storage),
            key: key.into(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Loads the collection, then processes messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Product" instead of "inventory::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        self.load(entity_type);
        info!(entity_type, size = self.items.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.items.len(), "List");
                    let _ = respond_to.send(Ok(self.items.clone()));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.items.iter().find(|e| e.id() == &id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Upsert { item, respond_to } => {
                    debug!(entity_type, ?item, "Upsert");
                    let id = item.id().clone();
                    match self.upsert(item) {
                        Ok(outcome) => {
                            self.save(entity_type);
                            info!(entity_type, %id, ?outcome, size = self.items.len(), "Upserted");
                            let _ = respond_to.send(Ok(outcome));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Upsert rejected");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let before = self.items.len();
                    self.items.retain(|e| e.id() != &id);
                    let removed = self.items.len() != before;
                    if removed {
                        self.save(entity_type);
                        info!(entity_type, %id, size = self.items.len(), "Deleted");
                    } else {
                        debug!(entity_type, %id, "Delete of unknown id ignored");
                    }
                    let _ = respond_to.send(Ok(removed));
                }
                ResourceRequest::KeyExists {
                    key,
                    except,
                    respond_to,
                } => {
                    let exists = self.key_taken(&key, except.as_ref());
                    debug!(entity_type, %key, exists, "KeyExists");
                    let _ = respond_to.send(Ok(exists));
                }
            }
        }

        info!(entity_type, size = self.items.len(), "Shutdown");
    }

    /// Reads the persisted collection, seeding it when the key is absent.
    ///
    /// A present-but-unreadable document leaves the collection empty and is not overwritten.
    fn load(&mut self, entity_type: &str) {
        match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(items) => {
                    info!(entity_type, key = %self.key, size = items.len(), "Loaded");
                    self.items = items;
                }
                Err(e) => {
                    error!(entity_type, key = %self.key, error = %e, "Failed to parse persisted collection");
                }
            },
            Ok(None) => {
                self.items = T::seed();
                info!(entity_type, key = %self.key, size = self.items.len(), "Seeded");
                self.save(entity_type);
            }
            Err(e) => {
                error!(entity_type, key = %self.key, error = %e, "Failed to read persisted collection");
            }
        }
    }

    /// Overwrites the stored document with the whole collection.
    fn save(&mut self, entity_type: &str) {
        let result = serde_json::to_string(&self.items)
            .map_err(StorageError::from)
            .and_then(|raw| self.storage.set_item(&self.key, &raw));
        if let Err(e) = result {
            error!(entity_type, key = %self.key, error = %e, "Failed to persist collection");
        }
    }

    fn upsert(&mut self, item: T) -> Result<UpsertOutcome, FrameworkError> {
        if let Some(key) = item.unique_key() {
            if self.key_taken(&key, Some(item.id())) {
                return Err(FrameworkError::Conflict(key));
            }
        }
        let id = item.id().clone();
        match self.items.iter_mut().find(|e| e.id() == &id) {
            Some(existing) => {
                *existing = item;
                Ok(UpsertOutcome::Replaced)
            }
            None => {
                self.items.insert(0, item);
                Ok(UpsertOutcome::Inserted)
            }
        }
    }

    fn key_taken(&self, key: &str, except: Option<&T::Id>) -> bool {
        self.items
            .iter()
            .filter(|e| Some(e.id()) != except)
            .any(|e| e.unique_key().as_deref() == Some(key))
    }
}
