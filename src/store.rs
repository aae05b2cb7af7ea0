//! Board Store
//!
//! Reactive wrapper around `BoardState`. Every mutation goes through the
//! helpers below so that local storage is rewritten after each change.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::BoardState;
use crate::config::BoardConfig;
use crate::models::{DragPayload, MoveRecord};
use crate::storage;

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

/// Build the store from local storage and write the result back, so that
/// defaults used for missing keys are stored too.
pub fn create_board_store(config: &BoardConfig) -> BoardStore {
    let state = storage::with_store(|kv| BoardState::load(kv, config));
    log::info!(
        "[BOARD] Loaded {} source rows, {} target rows, {} moves",
        state.source_rows.len(),
        state.target_rows.len(),
        state.moves.len()
    );
    persist(&state, config);
    Store::new(state)
}

fn persist(state: &BoardState, config: &BoardConfig) {
    if let Err(e) = storage::with_store(|kv| state.save(kv, config)) {
        log::error!("[BOARD] Failed to save board: {}", e);
    }
}

/// Drop a dragged source row onto target `target_id`
pub fn store_drop_row(store: &BoardStore, config: &BoardConfig, payload: &DragPayload, target_id: u32) -> Option<MoveRecord> {
    let result = store.try_update(|state| {
        let result = state.drop_row(payload, target_id);
        if result.is_ok() {
            persist(state, config);
        }
        result
    })?;
    match result {
        Ok(record) => {
            log::info!("[BOARD] Added {} to target {}", record.row.id, target_id);
            Some(record)
        }
        Err(e) => {
            log::warn!("[BOARD] Drop ignored: {}", e);
            None
        }
    }
}

/// Undo the most recent drop
pub fn store_undo(store: &BoardStore, config: &BoardConfig) -> Option<MoveRecord> {
    // Check first so an empty history doesn't notify subscribers.
    if !store.with_untracked(|state| state.can_undo()) {
        log::debug!("[BOARD] Nothing to undo");
        return None;
    }
    let result = store.try_update(|state| {
        let result = state.undo();
        persist(state, config);
        result
    })?;
    match result {
        Ok(record) => {
            log::info!("[BOARD] Undid {} from target {}", record.row.id, record.target_id);
            Some(record)
        }
        Err(e) => {
            log::warn!("[BOARD] Undo ignored: {}", e);
            None
        }
    }
}

/// Restore the default tables and drop the stored entries
pub fn store_reset(store: &BoardStore, config: &BoardConfig) {
    store.update(|state| storage::with_store(|kv| state.reset_stored(kv, config)));
    log::info!("[BOARD] Reset to defaults");
}
