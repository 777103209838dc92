//! Chore Board App
//!
//! Main application component: header actions, tabs, list and dialogs.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::{AppConfig, PageData};
use crate::context::AppContext;
use crate::detail::DetailDialog;
use crate::store::{BoardState, BoardStateStoreFields};
use crate::components::{AddChoreDialog, ChoreList, DetailDialogView, EmailChoresButton, FilterTabBar, NoticeBar};

#[component]
pub fn App(config: AppConfig, data: PageData) -> impl IntoView {
    log::info!("[APP] Loaded {} chores, {} users", data.chores.len(), data.users.len());

    // State
    let store = Store::new(BoardState::new(data.chores, data.users));
    let detail = RwSignal::new(DetailDialog::default());
    let adding = RwSignal::new(false);

    // Provide context to all children
    provide_context(AppContext::new(config));
    provide_context(store);

    view! {
        <main class="container chore-board">
            <header class="board-header">
                <h1>{move || store.filter().get().title()}</h1>
                <div class="board-actions">
                    <EmailChoresButton />
                    <button type="button" on:click=move |_| adding.set(true)>"Add Chore"</button>
                </div>
            </header>

            <FilterTabBar />

            <ChoreList dialog=detail />

            <p class="chore-count">
                {move || format!("{} chores", store.chores().read().len())}
            </p>

            <AddChoreDialog open=adding />
            <DetailDialogView dialog=detail />
            <NoticeBar />
        </main>
    }
}
