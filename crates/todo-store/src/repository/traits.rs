//! Repository Layer - Core Traits
//!
//! Defines the abstract interface every persistence backend implements.
//! Futures are not required to be `Send`: browser storage handles and
//! `fetch` futures are bound to the page's single thread.

use async_trait::async_trait;
use crate::domain::{BackendError, ItemRef, TodoCollection, TodoItem};

/// Result of a deletion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The item was removed and this collection was persisted
    Removed(TodoCollection),
    /// Nothing matched and nothing was written
    Unchanged,
}

/// System of record for the todo collection
#[async_trait(?Send)]
pub trait TodoBackend {
    /// Read the whole collection
    async fn load(&self) -> Result<TodoCollection, BackendError>;

    /// Append `content` to `current` and persist the result
    ///
    /// Returns the collection the backend now holds.
    async fn add(&self, current: &TodoCollection, content: &str) -> Result<TodoCollection, BackendError>;

    /// Remove the item `target` refers to and persist the result
    async fn delete(&self, current: &TodoCollection, target: &ItemRef) -> Result<Removal, BackendError>;

    /// Identifier a view should hand back to `delete` for the row at `index`
    fn item_ref(&self, _index: usize, item: &TodoItem) -> ItemRef {
        ItemRef::Id(item.id.clone())
    }
}
