//! Application Context
//!
//! Owns the todo store and exposes its operations to components.
//! Provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_store::{ItemRef, SubscriptionId, TodoItem, TodoStore};

use crate::store::{store_set_status, ViewStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Todo store; not `Send`, so it lives in local arena storage
    todo_store: StoredValue<Rc<TodoStore>, LocalStorage>,
    view: ViewStore,
}

impl AppContext {
    pub fn new(todo_store: Rc<TodoStore>, view: ViewStore) -> Self {
        Self {
            todo_store: StoredValue::new_local(todo_store),
            view,
        }
    }

    pub fn todo_store(&self) -> Rc<TodoStore> {
        self.todo_store.get_value()
    }

    /// Identifier the todo store expects for the row at `index`
    pub fn item_ref(&self, index: usize, item: &TodoItem) -> ItemRef {
        self.todo_store.with_value(|store| store.item_ref(index, item))
    }

    /// Drop a store subscription; no-op once the store has been disposed
    pub fn unsubscribe(&self, subscription: SubscriptionId) {
        self.todo_store.try_with_value(|store| store.unsubscribe(subscription));
    }

    /// Reload the collection from the backend
    pub fn load(&self) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.todo_store().load().await {
                Ok(_) => ctx.clear_status(),
                Err(e) => ctx.report(format!("Could not load todos: {}", e)),
            }
        });
    }

    /// Add a todo; `on_added` runs only when the backend accepted it
    pub fn add(&self, content: String, on_added: impl FnOnce() + 'static) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.todo_store().add(&content).await {
                Ok(_) => {
                    ctx.clear_status();
                    on_added();
                }
                Err(e) => ctx.report(e.to_string()),
            }
        });
    }

    pub fn delete(&self, target: ItemRef) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.todo_store().delete(target).await {
                Ok(_) => ctx.clear_status(),
                Err(e) => ctx.report(e.to_string()),
            }
        });
    }

    fn report(&self, message: String) {
        log::error!("[App] {}", message);
        store_set_status(&self.view, Some(message));
    }

    fn clear_status(&self) {
        store_set_status(&self.view, None);
    }
}
