//! Todo Store
//!
//! Owns the current collection snapshot and keeps it in step with a
//! persistence backend. The snapshot is only ever replaced by a value the
//! backend has accepted; views learn about replacements by subscribing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info};
use tokio::sync::Mutex;

use crate::domain::{BackendError, CreationError, DeletionError, ItemRef, TodoCollection, TodoItem};
use crate::repository::{Removal, TodoBackend};

/// Callback invoked with the new snapshot after every replacement
pub type Observer = Rc<dyn Fn(&TodoCollection)>;

/// Handle returned by [`TodoStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct TodoStore {
    backend: Box<dyn TodoBackend>,
    snapshot: RefCell<Rc<TodoCollection>>,
    observers: RefCell<Vec<(SubscriptionId, Observer)>>,
    next_subscription: Cell<u64>,
    /// Serializes round-trips so each mutation starts from the previous result
    round_trip: Mutex<()>,
}

impl TodoStore {
    pub fn new(backend: impl TodoBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            snapshot: RefCell::new(Rc::new(TodoCollection::new())),
            observers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
            round_trip: Mutex::new(()),
        }
    }

    /// Last collection accepted by the backend
    pub fn snapshot(&self) -> Rc<TodoCollection> {
        self.snapshot.borrow().clone()
    }

    /// Identifier to pass to [`TodoStore::delete`] for a displayed row
    pub fn item_ref(&self, index: usize, item: &TodoItem) -> ItemRef {
        self.backend.item_ref(index, item)
    }

    /// Replace the snapshot with the backend's current collection
    pub async fn load(&self) -> Result<Rc<TodoCollection>, BackendError> {
        let _guard = self.round_trip.lock().await;
        let loaded = self.backend.load().await?;
        debug!("[TodoStore] Loaded {} items", loaded.len());
        Ok(self.replace(loaded))
    }

    /// Append a new item with `content`
    ///
    /// Blank content is rejected before anything is sent to the backend.
    pub async fn add(&self, content: &str) -> Result<Rc<TodoCollection>, CreationError> {
        if content.trim().is_empty() {
            return Err(CreationError::EmptyContent);
        }

        let _guard = self.round_trip.lock().await;
        let current = self.snapshot();
        let updated = self
            .backend
            .add(&current, content)
            .await
            .map_err(CreationError::Persistence)?;
        info!("[TodoStore] Added todo, {} items now", updated.len());
        Ok(self.replace(updated))
    }

    /// Remove the item `target` refers to
    ///
    /// An index past the end of a locally stored list is accepted and leaves
    /// the collection as it was.
    pub async fn delete(&self, target: ItemRef) -> Result<Rc<TodoCollection>, DeletionError> {
        let _guard = self.round_trip.lock().await;
        let current = self.snapshot();
        match self.backend.delete(&current, &target).await {
            Ok(Removal::Removed(updated)) => {
                info!("[TodoStore] Deleted {}, {} items now", target, updated.len());
                Ok(self.replace(updated))
            }
            Ok(Removal::Unchanged) => Ok(current),
            Err(BackendError::NotFound(_)) => Err(DeletionError::NotFound(target.to_string())),
            Err(e) => Err(DeletionError::Persistence(e)),
        }
    }

    /// Register `observer` to be called after every snapshot replacement
    pub fn subscribe(&self, observer: impl Fn(&TodoCollection) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.observers.borrow_mut().push((id, Rc::new(observer)));
        id
    }

    /// Returns false if `id` was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(registered, _)| *registered != id);
        observers.len() != before
    }

    fn replace(&self, next: TodoCollection) -> Rc<TodoCollection> {
        let next = Rc::new(next);
        *self.snapshot.borrow_mut() = next.clone();

        // observers may (un)subscribe while being notified
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in observers {
            observer(&next);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{LocalBackend, MemoryStorage};

    fn local_store() -> TodoStore {
        TodoStore::new(LocalBackend::new(MemoryStorage::new()))
    }

    #[tokio::test]
    async fn test_observers_see_each_mutation() {
        let store = local_store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |collection| sink.borrow_mut().push(collection.len()));

        store.load().await.unwrap();
        store.add("Buy milk").await.unwrap();
        store.add("Walk dog").await.unwrap();
        store.delete(ItemRef::Index(0)).await.unwrap();

        assert_eq!(*seen.borrow(), vec![0, 1, 2, 1]);
    }

    #[tokio::test]
    async fn test_failed_mutation_does_not_notify() {
        let store = local_store();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        store.subscribe(move |_| counter.set(counter.get() + 1));

        assert!(matches!(store.add("").await, Err(CreationError::EmptyContent)));
        assert!(matches!(
            store.delete(ItemRef::Id("404".into())).await,
            Err(DeletionError::NotFound(_))
        ));
        store.delete(ItemRef::Index(3)).await.unwrap();

        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn test_unsubscribe() {
        let store = local_store();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let id = store.subscribe(move |_| counter.set(counter.get() + 1));

        store.add("one").await.unwrap();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add("two").await.unwrap();

        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_snapshots_are_not_mutated() {
        let store = local_store();
        let before = store.add("Buy milk").await.unwrap();
        let after = store.add("Walk dog").await.unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
        assert_eq!(*store.snapshot(), *after);
    }

    #[tokio::test]
    async fn test_whitespace_content_is_rejected() {
        let store = local_store();
        assert!(matches!(store.add("   ").await, Err(CreationError::EmptyContent)));
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_queued() {
        let store = local_store();
        let (first, second) = tokio::join!(store.add("first"), store.add("second"));
        first.unwrap();
        second.unwrap();

        let contents: Vec<_> = store.snapshot().items().iter().map(|i| i.content.clone()).collect();
        assert_eq!(contents, vec!["first", "second"]);
        assert_eq!(store.snapshot().items()[1].id, "2");
    }
}
