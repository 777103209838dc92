//! Add Chore Dialog Component
//!
//! Modal form for creating a chore.

use leptos::prelude::*;

use crate::actions;
use crate::clock::today;
use crate::components::ChoreFormFields;
use crate::context::AppContext;
use crate::form::ChoreForm;
use crate::store::use_board_store;

/// Add-chore modal, shown while `open` is true
#[component]
pub fn AddChoreDialog(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_board_store();

    let form = RwSignal::new(ChoreForm::blank(today()));
    let error = RwSignal::new(None::<String>);
    let on_change = Callback::new(move |next: ChoreForm| form.set(next));
    let on_done = Callback::new(move |_: ()| open.set(false));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        actions::add_chore(ctx, store, form, error, on_done);
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| open.set(false)>
                <article
                    class="add-chore-modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <header>
                        <button type="button" class="close" aria-label="Close" on:click=move |_| open.set(false)>"×"</button>
                        <h3>"Add Chore"</h3>
                    </header>
                    <form id="add-chore-form" on:submit=on_submit>
                        <ChoreFormFields form=form on_change=on_change />
                        {move || error.get().map(|err| view! { <p class="form-error" role="alert">{err}</p> })}
                        <footer>
                            <button type="button" class="secondary" on:click=move |_| open.set(false)>"Cancel"</button>
                            <button type="submit">"Add"</button>
                        </footer>
                    </form>
                </article>
            </div>
        </Show>
    }
}
