//! Repository Layer
//!
//! Persistence backends for the todo collection.

mod traits;
mod kv;
mod local;
mod remote;
mod timeout;


pub use traits::{TodoBackend, Removal};
pub use kv::{KeyValueStore, MemoryStorage};
pub use local::{LocalBackend, DEFAULT_STORAGE_KEY};
pub use remote::{RestBackend, ITEMS_PATH};
