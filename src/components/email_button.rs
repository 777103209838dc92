//! Email Chores Button Component

use leptos::prelude::*;

use crate::actions;
use crate::context::AppContext;

/// Triggers the server-side email digest
#[component]
pub fn EmailChoresButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let busy = RwSignal::new(false);

    view! {
        <button
            id="email-chores-btn"
            type="button"
            class="outline"
            aria-busy=move || busy.get().to_string()
            disabled=move || busy.get()
            on:click=move |_| actions::email_chores(ctx, busy)
        >
            {move || if busy.get() { "Sending..." } else { "Email Chores List" }}
        </button>
    }
}
