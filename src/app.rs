//! Todo Frontend App
//!
//! Builds the todo store from configuration, mirrors its snapshots into the
//! view store and lays out the page.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;
use todo_store::{LocalBackend, MemoryStorage, StoreConfig, TodoStore};

use crate::components::{NewTodoForm, StatusLine, TodoList};
use crate::config::app_config;
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::{store_set_status, store_set_todos, ViewState, ViewStateStoreFields, ViewStore};

#[component]
pub fn App() -> impl IntoView {
    let view_store: ViewStore = Store::new(ViewState::default());
    provide_context(view_store);

    let todo_store = Rc::new(build_todo_store(&app_config(), &view_store));

    // Views follow the todo store through this subscription only
    let subscription = todo_store.subscribe(move |collection| store_set_todos(&view_store, collection));

    let ctx = AppContext::new(todo_store, view_store);
    provide_context(ctx);

    on_cleanup(move || ctx.unsubscribe(subscription));

    // Load todos on mount
    Effect::new(move |_| ctx.load());

    view! {
        <main class="todo-app">
            <h1>"Todo"</h1>

            <NewTodoForm />

            <StatusLine />

            <TodoList />

            <p class="item-count">{move || format!("{} items", view_store.todos().read().len())}</p>
        </main>
    }
}

/// Store for the configured backend, falling back to in-memory storage
fn build_todo_store(config: &StoreConfig, view_store: &ViewStore) -> TodoStore {
    let built = match BrowserStorage::open() {
        Some(storage) => config.build_store(storage),
        None => {
            log::warn!("[App] localStorage unavailable, todos will not survive a reload");
            config.build_store(MemoryStorage::new())
        }
    };

    built.unwrap_or_else(|e| {
        log::error!("[App] Could not create backend: {}", e);
        store_set_status(view_store, Some(format!("Could not create backend: {}", e)));
        TodoStore::new(LocalBackend::with_key(MemoryStorage::new(), config.storage_key.clone()))
    })
}
