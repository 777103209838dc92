//! Chore List Component
//!
//! Displays the current tab's chores with swipe-to-act rows.
//! Swipe right completes, swipe left toggles priority, tap opens details.

use leptos::prelude::*;
use leptos_swipe::*;

use crate::actions;
use crate::context::AppContext;
use crate::detail::DetailDialog;
use crate::list::visible_chores;
use crate::models::{display_date, Chore};
use crate::reconcile::RowAction;
use crate::store::{use_board_store, BoardStateStoreFields};

/// Chore list with swipe gestures
#[component]
pub fn ChoreList(dialog: RwSignal<DetailDialog>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_board_store();

    let (swipe_config, snap_back_ms) = ctx.config.with_value(|c| (c.swipe(), c.snap_back_ms));
    let swipe = create_swipe_signals(swipe_config, snap_back_ms);

    let on_release = Callback::new(move |(chore_id, release): (u32, Release)| match release {
        Release::Tap => actions::open_detail(ctx, dialog, chore_id),
        Release::Commit(direction) => {
            actions::commit_swipe(ctx, store, swipe, chore_id, RowAction::from_direction(direction))
        }
        Release::SnapBack | Release::Scroll => {}
    });

    let rows = move || visible_chores(&store.chores().get(), &store.filter().get());

    view! {
        <div class="chore-list">
            <Show when=move || rows().is_empty()>
                <p class="chore-list-empty">"Nothing here."</p>
            </Show>
            <For
                each=rows
                key=|chore| {
                    // Every field the row renders, so a patch re-renders it
                    (
                        chore.id,
                        chore.title.clone(),
                        chore.assignee.clone(),
                        chore.status,
                        chore.next_due,
                        chore.is_priority,
                    )
                }
                children=move |chore| {
                    view! {
                        <ChoreRow chore=chore swipe=swipe dialog=dialog on_release=on_release />
                    }
                }
            />
        </div>
    }
}

/// A single swipeable chore row
#[component]
fn ChoreRow(
    chore: Chore,
    swipe: SwipeSignals,
    dialog: RwSignal<DetailDialog>,
    on_release: Callback<(u32, Release)>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_board_store();

    let id = chore.id;
    let on_touchstart = make_on_touchstart(swipe, id);
    let on_touchmove = make_on_touchmove(swipe, id);
    let on_touchend = make_on_touchend(swipe, id, move |row_id, release| on_release.run((row_id, release)));
    let on_touchcancel = make_on_touchcancel(swipe, id);

    // Mouse users click; the click emulated after a touch is ignored
    let on_click = move |_| {
        if !swipe.touch_just_ended_read.get_untracked() {
            actions::open_detail(ctx, dialog, id);
        }
    };

    let row_class = move || {
        let mut c = String::from("chore-row");
        if store.fading().get().contains(&id) { c.push_str(" fading"); }
        if store.pending().get().contains(&id) { c.push_str(" pending"); }
        c
    };
    let fg_class = move || {
        let mut c = String::from("chore-row-fg");
        if swipe.is_active(id) && !swipe.settling_read.get() { c.push_str(" swiping"); }
        if swipe.is_active(id) && swipe.settling_read.get() { c.push_str(" snap-back"); }
        c
    };
    let bg_class = move || match swipe.is_active(id).then(|| swipe.reveal_read.get()).flatten() {
        Some(reveal) if reveal.direction == SwipeDirection::Right => "chore-row-bg reveal-complete",
        Some(_) => "chore-row-bg reveal-priority",
        None => "chore-row-bg",
    };

    let status_class = format!("status-badge {}", chore.status.css_class());

    view! {
        <div
            class=row_class
            data-chore-id=id.to_string()
            on:touchstart=on_touchstart
            on:touchmove=on_touchmove
            on:touchend=on_touchend
            on:touchcancel=on_touchcancel
            on:click=on_click
        >
            <div class=bg_class aria-hidden="true">
                <span
                    class="swipe-icon swipe-complete-icon"
                    style=move || format!("opacity: {};", swipe.opacity_for(id, SwipeDirection::Right))
                >
                    "✓"
                </span>
                <span
                    class="swipe-icon swipe-priority-icon"
                    style=move || format!("opacity: {};", swipe.opacity_for(id, SwipeDirection::Left))
                >
                    "★"
                </span>
            </div>
            <div class=fg_class style=move || swipe.transform_for(id)>
                <div class="chore-row-main">
                    {chore.is_priority.then(|| view! { <span class="priority-star" title="Priority">"★"</span> })}
                    <span class="chore-title">{chore.title.clone()}</span>
                </div>
                <div class="chore-row-meta">
                    <span class="chore-assignee">{chore.assignee.clone()}</span>
                    <span class=status_class>{chore.status.label()}</span>
                    <span class="chore-next-due">{display_date(chore.next_due)}</span>
                </div>
            </div>
        </div>
    }
}
