//! Delete Confirm Button Component
//!
//! Inline two-step delete: the first click asks, the second deletes.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows "Delete" initially. When clicked, asks "Delete this chore?" with
/// confirm / cancel buttons. `disabled` greys everything out while a
/// request is in flight.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                type="button"
                class="delete-btn secondary"
                disabled=move || disabled.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm" role="group">
                <span class="delete-confirm-text">"Delete this chore?"</span>
                <button
                    type="button"
                    class="confirm-btn"
                    disabled=move || disabled.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_confirm.run(());
                    }
                >
                    "Yes, delete"
                </button>
                <button
                    type="button"
                    class="cancel-btn outline"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "Cancel"
                </button>
            </span>
        </Show>
    }
}
