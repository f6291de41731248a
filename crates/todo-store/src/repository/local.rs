//! Local Storage Backend
//!
//! Keeps the whole collection as one JSON array under a fixed key.
//! Ids are derived from the collection length; rows are addressed by index.

use async_trait::async_trait;
use log::{debug, warn};

use crate::domain::{BackendError, ItemRef, TodoCollection, TodoItem};
use super::kv::KeyValueStore;
use super::traits::{Removal, TodoBackend};

/// Key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "todos";

pub struct LocalBackend<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> LocalBackend<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<TodoCollection, BackendError> {
        let Some(raw) = self.storage.get(&self.key)? else {
            debug!("[LocalBackend] No data under '{}', starting empty", self.key);
            return Ok(TodoCollection::new());
        };
        match serde_json::from_str::<TodoCollection>(&raw) {
            Ok(collection) => Ok(collection),
            Err(e) => {
                warn!("[LocalBackend] Ignoring invalid data under '{}': {}", self.key, e);
                Ok(TodoCollection::new())
            }
        }
    }

    fn write(&self, collection: &TodoCollection) -> Result<(), BackendError> {
        let raw = serde_json::to_string(collection)?;
        self.storage.set(&self.key, &raw)?;
        debug!("[LocalBackend] Stored {} items under '{}'", collection.len(), self.key);
        Ok(())
    }
}

#[async_trait(?Send)]
impl<S: KeyValueStore> TodoBackend for LocalBackend<S> {
    async fn load(&self) -> Result<TodoCollection, BackendError> {
        self.read()
    }

    async fn add(&self, _current: &TodoCollection, content: &str) -> Result<TodoCollection, BackendError> {
        // storage is the system of record; the caller's snapshot may predate it
        let stored = self.read()?;
        let item = TodoItem::new(stored.next_local_id(), content);
        let updated = stored.with_appended(item);
        self.write(&updated)?;
        Ok(updated)
    }

    async fn delete(&self, current: &TodoCollection, target: &ItemRef) -> Result<Removal, BackendError> {
        let stored = self.read()?;
        let updated = match target {
            // indexes point into the list the caller displayed
            ItemRef::Index(index) => match current.get(*index) {
                Some(shown) => match stored.without_id(&shown.id) {
                    Some(updated) => updated,
                    None => {
                        warn!("[LocalBackend] Delete of index {} ignored, item {} is no longer stored", index, shown.id);
                        return Ok(Removal::Unchanged);
                    }
                },
                None => {
                    // the list shifted under the caller; nothing to remove
                    warn!("[LocalBackend] Delete of index {} ignored, list has {} items", index, current.len());
                    return Ok(Removal::Unchanged);
                }
            },
            ItemRef::Id(id) => stored
                .without_id(id)
                .ok_or_else(|| BackendError::NotFound(target.to_string()))?,
        };
        self.write(&updated)?;
        Ok(Removal::Removed(updated))
    }

    fn item_ref(&self, index: usize, _item: &TodoItem) -> ItemRef {
        ItemRef::Index(index)
    }
}
