//! Todo Row Component

use leptos::prelude::*;
use todo_store::TodoItem;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;

/// A single todo with its delete control
#[component]
pub fn TodoRow(index: usize, item: TodoItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let target = ctx.item_ref(index, &item);
    let on_confirm = Callback::new(move |_| ctx.delete(target.clone()));

    view! {
        <li class="todo-row">
            <span class="todo-content">{item.content}</span>
            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_confirm />
        </li>
    }
}
