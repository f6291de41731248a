//! Todo Store
//!
//! Layered architecture:
//! - domain: todo entities, the immutable collection and error types
//! - repository: persistence backends (key-value storage, REST)
//! - store: the owned application state views subscribe to
//! - config: backend selection

mod domain;
mod repository;
mod store;
mod config;

pub use domain::{
    BackendError, CreationError, DeletionError, Entity, ItemRef, TodoCollection, TodoItem,
};
pub use repository::{
    KeyValueStore, LocalBackend, MemoryStorage, Removal, RestBackend, TodoBackend,
    DEFAULT_STORAGE_KEY, ITEMS_PATH,
};
pub use store::{Observer, SubscriptionId, TodoStore};
pub use config::{BackendKind, StoreConfig, DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_MS};
