//! Notice Bar Component
//!
//! Transient success / error messages, with Undo after a completion.

use leptos::prelude::*;

use crate::actions;
use crate::context::{AppContext, NoticeKind};
use crate::store::use_board_store;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_board_store();

    move || {
        ctx.notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Info => "notice-bar",
                NoticeKind::Error => "notice-bar error",
            };
            let role = match notice.kind {
                NoticeKind::Info => "status",
                NoticeKind::Error => "alert",
            };
            view! {
                <div class=class role=role>
                    <span class="notice-text">{notice.text}</span>
                    {notice.undo_chore.map(|chore_id| view! {
                        <button
                            type="button"
                            class="notice-undo"
                            on:click=move |_| actions::undo_completion(ctx, store, chore_id)
                        >
                            "Undo"
                        </button>
                    })}
                    <button type="button" class="notice-dismiss" aria-label="Dismiss" on:click=move |_| ctx.dismiss_notice()>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
