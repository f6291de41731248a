//! Todo List Component
//!
//! Renders the current collection, or a placeholder when it is empty.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_view_store, ViewStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let view_store = use_view_store();

    let rows = move || {
        view_store
            .todos()
            .get()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <Show
            when=move || !view_store.todos().read().is_empty()
            fallback=|| view! { <p class="todo-placeholder">"Nothing to do"</p> }
        >
            <ul class="todo-list">
                <For
                    each=rows
                    // index is part of the key: local rows are deleted by position
                    key=|(index, item)| (*index, item.id.clone())
                    children=move |(index, item)| view! { <TodoRow index=index item=item /> }
                />
            </ul>
        </Show>
    }
}
