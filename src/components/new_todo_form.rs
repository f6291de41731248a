//! New Todo Form Component
//!
//! Text input plus submit button for adding todos.

use leptos::prelude::*;

use crate::context::AppContext;

/// Form for creating new todos
///
/// Empty input is passed through so the store's rejection shows up in the
/// status line. The input is only cleared once the backend accepted the item.
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.add(new_text.get(), move || set_new_text.set(String::new()));
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
