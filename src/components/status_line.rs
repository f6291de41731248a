//! Status Line Component
//!
//! Shows the error of the last failed store operation.

use leptos::prelude::*;

use crate::store::{use_view_store, ViewStateStoreFields};

#[component]
pub fn StatusLine() -> impl IntoView {
    let view_store = use_view_store();

    move || {
        view_store
            .status()
            .get()
            .map(|message| view! { <p class="status-error" role="alert">{message}</p> })
    }
}
