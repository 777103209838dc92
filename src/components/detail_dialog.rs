//! Chore Detail Dialog Component
//!
//! Modal showing one chore, with a read-only summary and an edit mode.

use leptos::prelude::*;

use crate::actions;
use crate::components::{ChoreFormFields, DeleteConfirmButton};
use crate::context::AppContext;
use crate::detail::{summary_rows, DetailDialog, DetailMode};
use crate::form::ChoreForm;
use crate::store::{use_board_store, BoardStateStoreFields};

/// Detail dialog; all of its state lives in `dialog`
#[component]
pub fn DetailDialogView(dialog: RwSignal<DetailDialog>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_board_store();

    let mode = Memo::new(move |_| dialog.with(|d| d.mode));
    let busy = Signal::derive(move || dialog.with(|d| d.busy));
    let title = move || {
        dialog.with(|d| match (&d.mode, &d.chore) {
            (DetailMode::Loading(_), _) => "Loading...".to_string(),
            (_, Some(chore)) => chore.title.clone(),
            _ => String::new(),
        })
    };

    let close = move || dialog.update(|d| d.close());
    let form = Signal::derive(move || dialog.with(|d| d.form.clone()));
    let on_form_change = Callback::new(move |next: ChoreForm| dialog.update(|d| d.form = next));
    let on_delete = Callback::new(move |_: ()| {
        if let Some(id) = dialog.get_untracked().chore_id() {
            actions::delete_chore(ctx, store, dialog, id);
        }
    });

    let summary = move || {
        dialog.with(|d| d.chore.clone()).map(|chore| {
            let rows = summary_rows(&chore);
            view! {
                <dl class="chore-detail-summary">
                    {rows.into_iter().map(|(label, value)| {
                        let status_class = (label == "Status").then(|| chore.status.css_class());
                        view! {
                            <dt>{label}</dt>
                            <dd class=status_class.unwrap_or_default()>{value}</dd>
                        }
                    }).collect_view()}
                </dl>
                {chore.notes.clone().map(|notes| view! { <blockquote class="chore-notes">{notes}</blockquote> })}
            }
        })
    };

    view! {
        <Show when=move || mode.get() != DetailMode::Closed>
            <div class="modal-backdrop" on:click=move |_| close()>
                <article
                    class="chore-detail-modal"
                    role="dialog"
                    aria-modal="true"
                    aria-busy=move || matches!(mode.get(), DetailMode::Loading(_)).to_string()
                    on:click=|ev| ev.stop_propagation()
                >
                    <header>
                        <button type="button" class="close" aria-label="Close" on:click=move |_| close()>"×"</button>
                        <h3>{title}</h3>
                    </header>

                    {move || match mode.get() {
                        DetailMode::Viewing => view! {
                            {summary}
                            <footer>
                                <DeleteConfirmButton on_confirm=on_delete disabled=busy />
                                <button
                                    type="button"
                                    on:click=move |_| {
                                        let users = store.users().get_untracked();
                                        dialog.update(|d| d.begin_edit(&users));
                                    }
                                >
                                    "Edit"
                                </button>
                            </footer>
                        }.into_any(),
                        DetailMode::Editing => view! {
                            <form on:submit=move |ev: web_sys::SubmitEvent| {
                                ev.prevent_default();
                                actions::save_detail(ctx, store, dialog);
                            }>
                                <ChoreFormFields form=form on_change=on_form_change show_priority=true />
                                {move || dialog.with(|d| d.form_error.clone()).map(|err| view! {
                                    <p class="form-error" role="alert">{err}</p>
                                })}
                                <footer>
                                    <button
                                        type="button"
                                        class="secondary"
                                        on:click=move |_| dialog.update(|d| d.cancel_edit())
                                    >
                                        "Cancel"
                                    </button>
                                    <button type="submit" disabled=move || busy.get()>"Save"</button>
                                </footer>
                            </form>
                        }.into_any(),
                        DetailMode::Loading(_) | DetailMode::Closed => view! {
                            <p aria-busy="true">"Loading chore..."</p>
                        }.into_any(),
                    }}
                </article>
            </div>
        </Show>
    }
}
