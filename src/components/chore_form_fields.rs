//! Chore Form Fields Component
//!
//! Inputs shared by the add dialog and the detail dialog's edit mode.

use leptos::prelude::*;

use crate::form::ChoreForm;
use crate::store::{use_board_store, BoardStateStoreFields};

/// Editable chore fields
///
/// # Arguments
/// * `form` - Current values
/// * `on_change` - Receives the whole form after every edit
/// * `show_priority` - Edit mode: render the priority checkbox, allow a blank date
#[component]
pub fn ChoreFormFields(
    #[prop(into)] form: Signal<ChoreForm>,
    #[prop(into)] on_change: Callback<ChoreForm>,
    #[prop(optional)] show_priority: bool,
) -> impl IntoView {
    let store = use_board_store();

    // Apply one field edit on top of the latest values
    let edit = move |apply: fn(&mut ChoreForm, String), value: String| {
        let mut next = form.get_untracked();
        apply(&mut next, value);
        on_change.run(next);
    };

    view! {
        <label>
            "Title"
            <input
                type="text"
                name="title"
                required=true
                prop:value=move || form.get().title
                on:input=move |ev| edit(|f, v| f.title = v, event_target_value(&ev))
            />
        </label>

        <label>
            "Assignee"
            <select
                name="user_id"
                prop:value=move || form.get().user_id
                on:change=move |ev| edit(|f, v| f.user_id = v, event_target_value(&ev))
            >
                <option value="">"Choose..."</option>
                <For
                    each=move || store.users().get()
                    key=|user| user.id
                    children=move |user| {
                        let value = user.id.to_string();
                        let selected_value = value.clone();
                        view! {
                            <option
                                value=value
                                selected=move || form.get().user_id == selected_value
                            >
                                {user.name}
                            </option>
                        }
                    }
                />
            </select>
        </label>

        <div class="grid">
            <label>
                "Category"
                <input
                    type="text"
                    name="category"
                    prop:value=move || form.get().category
                    on:input=move |ev| edit(|f, v| f.category = v, event_target_value(&ev))
                />
            </label>
            <label>
                "Every (days)"
                <input
                    type="number"
                    name="frequency"
                    min="1"
                    required=true
                    prop:value=move || form.get().frequency
                    on:input=move |ev| edit(|f, v| f.frequency = v, event_target_value(&ev))
                />
            </label>
            <label>
                "Last completed"
                <input
                    type="date"
                    name="last_completed"
                    required=!show_priority
                    prop:value=move || form.get().last_completed
                    on:input=move |ev| edit(|f, v| f.last_completed = v, event_target_value(&ev))
                />
            </label>
        </div>

        <label>
            "Notes"
            <textarea
                name="notes"
                rows="3"
                prop:value=move || form.get().notes
                on:input=move |ev| edit(|f, v| f.notes = v, event_target_value(&ev))
            />
        </label>

        {show_priority.then(|| view! {
            <label class="priority-toggle">
                <input
                    type="checkbox"
                    role="switch"
                    name="is_priority"
                    prop:checked=move || form.get().is_priority
                    on:change=move |ev| {
                        let mut next = form.get_untracked();
                        next.is_priority = event_target_checked(&ev);
                        on_change.run(next);
                    }
                />
                "Priority"
            </label>
        })}
    }
}
