//! Chore Board Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list::ChoreFilter;
use crate::models::{Chore, User};

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Every chore known to the page, unordered
    pub chores: Vec<Chore>,
    pub users: Vec<User>,
    /// Current tab
    pub filter: ChoreFilter,
    /// Rows fading out before removal
    pub fading: Vec<u32>,
    /// Rows with a swipe action in flight
    pub pending: Vec<u32>,
}

impl BoardState {
    pub fn new(chores: Vec<Chore>, users: Vec<User>) -> Self {
        Self { chores, users, ..Default::default() }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace a chore by ID, or append it if unknown
pub fn store_upsert_chore(store: &BoardStore, chore: Chore) {
    let field = store.chores();
    let mut chores = field.write();
    match chores.iter_mut().find(|c| c.id == chore.id) {
        Some(existing) => *existing = chore,
        None => chores.push(chore),
    }
}

/// Mutate a chore in place by ID
pub fn store_patch_chore(store: &BoardStore, chore_id: u32, patch: impl FnOnce(&mut Chore)) {
    if let Some(chore) = store.chores().write().iter_mut().find(|c| c.id == chore_id) {
        patch(chore);
    }
}

/// Remove a chore by ID
pub fn store_remove_chore(store: &BoardStore, chore_id: u32) {
    store.chores().write().retain(|c| c.id != chore_id);
    store.fading().write().retain(|id| *id != chore_id);
}

pub fn store_set_fading(store: &BoardStore, chore_id: u32) {
    let field = store.fading();
    let mut fading = field.write();
    if !fading.contains(&chore_id) {
        fading.push(chore_id);
    }
}

pub fn store_set_pending(store: &BoardStore, chore_id: u32, pending: bool) {
    let field = store.pending();
    let mut ids = field.write();
    ids.retain(|id| *id != chore_id);
    if pending {
        ids.push(chore_id);
    }
}
