//! Filter Tab Bar Component
//!
//! Tabs for switching between the All, per-assignee and Priorities lists.

use leptos::prelude::*;

use crate::list::ChoreFilter;
use crate::store::{use_board_store, BoardStateStoreFields};

/// Filter tab bar component
#[component]
pub fn FilterTabBar() -> impl IntoView {
    let store = use_board_store();

    let tabs = move || {
        let mut tabs = vec![ChoreFilter::All];
        tabs.extend(store.users().get().into_iter().map(|u| ChoreFilter::Assignee(u.name)));
        tabs.push(ChoreFilter::Priorities);
        tabs
    };

    view! {
        <nav class="filter-tab-bar" role="tablist">
            <For
                each=tabs
                key=|filter| filter.clone()
                children=move |filter| {
                    let label = match &filter {
                        ChoreFilter::Assignee(name) => name.clone(),
                        ChoreFilter::Priorities => "★ Priorities".to_string(),
                        ChoreFilter::All => "All".to_string(),
                    };
                    let tab = filter.clone();
                    let is_active = Memo::new(move |_| store.filter().get() == tab);
                    let tab_class = move || {
                        if is_active.get() { "filter-tab active" } else { "filter-tab" }
                    };

                    view! {
                        <button
                            class=tab_class
                            role="tab"
                            aria-selected=move || is_active.get().to_string()
                            on:click=move |_| *store.filter().write() = filter.clone()
                        >
                            {label}
                        </button>
                    }
                }
            />
        </nav>
    }
}
