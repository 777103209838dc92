//! User Actions
//!
//! One function per user action: call the API, then reconcile the board.
//! Each runs on `spawn_local`; failures are logged and shown as notices.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_swipe::{snap_back, SwipeSignals};

use crate::clock::today;
use crate::commands;
use crate::context::AppContext;
use crate::detail::DetailDialog;
use crate::error::ApiError;
use crate::form::ChoreForm;
use crate::reconcile::{apply_action, RowAction};
use crate::store::*;

/// Commit a swipe: request, then patch the row and release its transform
pub fn commit_swipe(ctx: AppContext, store: BoardStore, swipe: SwipeSignals, chore_id: u32, action: RowAction) {
    log::info!("[SWIPE] Commit {:?} on chore {}", action, chore_id);
    store_set_pending(&store, chore_id, true);

    spawn_local(async move {
        let api = ctx.api();
        let result = match action {
            RowAction::Complete => commands::complete_chore(&api, chore_id).await,
            RowAction::TogglePriority => commands::toggle_priority(&api, chore_id).await,
        };

        snap_back(&swipe, chore_id);
        store_set_pending(&store, chore_id, false);

        match result {
            Ok(patch) => {
                let today = today();
                store_patch_chore(&store, chore_id, |chore| apply_action(chore, action, &patch, today));
                match action {
                    RowAction::Complete => ctx.notify_with_undo(action.success_message(), chore_id),
                    RowAction::TogglePriority => ctx.notify(action.success_message()),
                }
            }
            Err(e) => {
                log::warn!("[SWIPE] {:?} on chore {} failed: {}", action, chore_id, e);
                ctx.notify_error(e.user_message());
            }
        }
    });
}

/// Revert the last completion, then re-fetch the row
pub fn undo_completion(ctx: AppContext, store: BoardStore, chore_id: u32) {
    ctx.dismiss_notice();
    spawn_local(async move {
        let api = ctx.api();
        if let Err(e) = commands::undo_complete(&api, chore_id).await {
            log::warn!("[UNDO] Chore {} failed: {}", chore_id, e);
            ctx.notify_error(e.user_message());
            return;
        }
        match commands::get_chore(&api, chore_id).await {
            Ok(chore) => {
                store_upsert_chore(&store, chore);
                ctx.notify("Completion undone.");
            }
            Err(e) => {
                log::warn!("[UNDO] Reloading chore {} failed: {}", chore_id, e);
                ctx.reload_page();
            }
        }
    });
}

/// Open the detail dialog and fetch the record
pub fn open_detail(ctx: AppContext, dialog: RwSignal<DetailDialog>, chore_id: u32) {
    dialog.update(|d| d.open(chore_id));
    spawn_local(async move {
        match commands::get_chore(&ctx.api(), chore_id).await {
            Ok(chore) => {
                let mut accepted = false;
                dialog.update(|d| accepted = d.loaded(chore));
                if !accepted {
                    log::debug!("[DETAIL] Dropped stale response for chore {}", chore_id);
                }
            }
            Err(e) => {
                log::error!("[DETAIL] Opening chore {} failed: {}", chore_id, e);
                // Only close if the user is still waiting on this chore
                if dialog.get_untracked().chore_id() == Some(chore_id) {
                    dialog.update(|d| d.close());
                }
                ctx.notify_error("Failed to load chore details. Please try again.");
            }
        }
    });
}

/// Save the edit form, then refresh the row and the dialog
pub fn save_detail(ctx: AppContext, store: BoardStore, dialog: RwSignal<DetailDialog>) {
    let snapshot = dialog.get_untracked();
    let Some(chore_id) = snapshot.chore_id() else { return };
    let payload = match snapshot.form.to_payload(true) {
        Ok(payload) => payload,
        Err(e) => {
            dialog.update(|d| d.form_error = Some(e.to_string()));
            return;
        }
    };

    dialog.update(|d| d.busy = true);
    spawn_local(async move {
        let api = ctx.api();
        let result = commands::update_chore(&api, chore_id, &payload).await;
        dialog.update(|d| d.busy = false);
        if let Err(e) = result {
            log::warn!("[DETAIL] Saving chore {} failed: {}", chore_id, e);
            dialog.update(|d| d.form_error = Some(e.user_message()));
            return;
        }
        match commands::get_chore(&api, chore_id).await {
            Ok(chore) => {
                store_upsert_chore(&store, chore.clone());
                dialog.update(|d| d.refreshed(chore));
                ctx.notify("Chore updated.");
            }
            Err(e) => {
                log::warn!("[DETAIL] Refreshing chore {} failed: {}", chore_id, e);
                ctx.reload_page();
            }
        }
    });
}

/// Delete a chore: fade the row out, then drop it
pub fn delete_chore(ctx: AppContext, store: BoardStore, dialog: RwSignal<DetailDialog>, chore_id: u32) {
    dialog.update(|d| d.busy = true);
    spawn_local(async move {
        match commands::delete_chore(&ctx.api(), chore_id).await {
            Ok(_) => {
                dialog.update(|d| d.close());
                store_set_fading(&store, chore_id);
                let fade_ms = ctx.config.with_value(|c| c.fade_out_ms);
                gloo_timers::future::TimeoutFuture::new(fade_ms).await;
                store_remove_chore(&store, chore_id);
                ctx.notify("Chore deleted.");
            }
            Err(e) => {
                log::warn!("[DETAIL] Deleting chore {} failed: {}", chore_id, e);
                dialog.update(|d| d.busy = false);
                ctx.notify_error(e.user_message());
            }
        }
    });
}

/// Create a chore from the add form. Validation errors land in `error`.
pub fn add_chore(ctx: AppContext, store: BoardStore, form: RwSignal<ChoreForm>, error: RwSignal<Option<String>>, on_done: Callback<()>) {
    let payload = match form.get_untracked().to_payload(false) {
        Ok(payload) => payload,
        Err(e) => {
            error.set(Some(e.to_string()));
            return;
        }
    };
    error.set(None);

    spawn_local(async move {
        let api = ctx.api();
        let created = match commands::create_chore(&api, &payload).await {
            Ok(created) => created,
            Err(e) => {
                log::warn!("[ADD] Creating chore failed: {}", e);
                error.set(Some(e.user_message()));
                return;
            }
        };
        form.set(ChoreForm::blank(today()));
        on_done.run(());

        // Without an id there is nothing to fetch; fall back to a reload
        let Some(id) = created.id else {
            ctx.reload_page();
            return;
        };
        match commands::get_chore(&api, id).await {
            Ok(chore) => {
                store_upsert_chore(&store, chore);
                ctx.notify(created.message.unwrap_or_else(|| "Chore added.".to_string()));
            }
            Err(e) => {
                log::warn!("[ADD] Fetching new chore {} failed: {}", id, e);
                ctx.reload_page();
            }
        }
    });
}

/// Trigger the email digest; `busy` drives the button label
pub fn email_chores(ctx: AppContext, busy: RwSignal<bool>) {
    busy.set(true);
    spawn_local(async move {
        match commands::email_chores(&ctx.api()).await {
            Ok(message) => ctx.notify(message),
            Err(e) => {
                log::error!("[EMAIL] Sending digest failed: {}", e);
                match e {
                    ApiError::Server { message, .. } => ctx.notify_error(message),
                    _ => ctx.notify_error("An error occurred while sending the email."),
                }
            }
        }
        busy.set(false);
    });
}
