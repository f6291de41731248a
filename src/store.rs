//! View State Store
//!
//! Mirror of the todo store's latest snapshot for rendering.
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_store::{TodoCollection, TodoItem};

/// What the views render
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Last collection the todo store accepted
    pub todos: Vec<TodoItem>,
    /// Error of the last failed operation, cleared by the next success
    pub status: Option<String>,
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

/// Get the view store from context
pub fn use_view_store() -> ViewStore {
    expect_context::<ViewStore>()
}

/// Replace the rendered todos with a new snapshot
pub fn store_set_todos(store: &ViewStore, collection: &TodoCollection) {
    *store.todos().write() = collection.items().to_vec();
}

pub fn store_set_status(store: &ViewStore, status: Option<String>) {
    *store.status().write() = status;
}
