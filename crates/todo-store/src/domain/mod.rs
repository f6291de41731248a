//! Domain Layer
//!
//! Todo entities, the immutable collection value and the error types.
//! Nothing in here knows how the collection is persisted.

mod entity;
mod item;
mod collection;
mod error;

pub use entity::Entity;
pub use item::{TodoItem, ItemRef};
pub use collection::TodoCollection;
pub use error::{BackendError, CreationError, DeletionError};
