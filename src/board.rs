//! Board State
//!
//! The two tables and the move history, with the drop/undo/reset
//! operations. Pure state: persistence goes through a `KeyValueStore`
//! passed in by the caller.

use reactive_stores::Store;

use crate::config::BoardConfig;
use crate::data::{default_source_rows, default_target_rows};
use crate::error::{BoardError, StorageError};
use crate::models::{DragPayload, MoveRecord, SourceRow, TargetRow};
use crate::storage::{self, KeyValueStore};

#[derive(Clone, Debug, PartialEq, Store)]
pub struct BoardState {
    /// Right table, rows still available for dragging
    pub source_rows: Vec<SourceRow>,
    /// Left table, rows accumulating associations
    pub target_rows: Vec<TargetRow>,
    /// Drops in the order they happened, newest last
    pub moves: Vec<MoveRecord>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::defaults()
    }
}

impl BoardState {
    pub fn defaults() -> Self {
        Self {
            source_rows: default_source_rows(),
            target_rows: default_target_rows(),
            moves: Vec::new(),
        }
    }

    /// Each key falls back to its default on its own. Moves whose row is
    /// back in the source list are dropped, so a row is never in both.
    pub fn load(store: &dyn KeyValueStore, config: &BoardConfig) -> Self {
        let source_rows: Vec<SourceRow> = storage::load(store, config.source_key, default_source_rows());
        let target_rows = storage::load(store, config.target_key, default_target_rows());
        let mut moves: Vec<MoveRecord> = storage::load(store, config.moves_key, Vec::new());

        let stored = moves.len();
        moves.retain(|record| source_rows.iter().all(|row| row.id != record.row.id));
        if moves.len() != stored {
            log::warn!(
                "dropped {} stored moves whose rows are still in the source table",
                stored - moves.len()
            );
        }

        Self {
            source_rows,
            target_rows,
            moves,
        }
    }

    /// The source list is written last, so a failed write never leaves a
    /// row removed from the stored source list without its association.
    pub fn save(&self, store: &dyn KeyValueStore, config: &BoardConfig) -> Result<(), StorageError> {
        storage::save(store, config.moves_key, &self.moves)?;
        storage::save(store, config.target_key, &self.target_rows)?;
        storage::save(store, config.source_key, &self.source_rows)
    }

    /// `pid` and `hint` labels of target row `id`
    pub fn target_labels(&self, id: u32) -> Option<(String, String)> {
        self.target_rows
            .iter()
            .find(|row| row.id == id)
            .map(|row| (row.pid_label(), row.hint_label()))
    }

    pub fn can_undo(&self) -> bool {
        !self.moves.is_empty()
    }

    /// Move the dragged source row onto target `target_id`
    pub fn drop_row(&mut self, payload: &DragPayload, target_id: u32) -> Result<MoveRecord, BoardError> {
        let target = self
            .target_rows
            .iter()
            .position(|row| row.id == target_id)
            .ok_or(BoardError::UnknownTarget(target_id))?;
        // The payload index was taken at drag start; the current position wins.
        let number = self
            .source_rows
            .iter()
            .position(|row| row.id == payload.row.id)
            .ok_or_else(|| BoardError::UnknownSource(payload.row.id.clone()))?;

        let row = self.source_rows.remove(number);
        self.target_rows[target].associate(&row);

        let record = MoveRecord { row, number, target_id };
        self.moves.push(record.clone());
        Ok(record)
    }

    /// Reverse the most recent drop
    pub fn undo(&mut self) -> Result<MoveRecord, BoardError> {
        let record = self.moves.pop().ok_or(BoardError::NothingToUndo)?;

        if self.source_rows.iter().any(|row| row.id == record.row.id) {
            log::warn!("undo: {} is already in the source table", record.row.id);
        } else {
            let index = record.number.min(self.source_rows.len());
            self.source_rows.insert(index, record.row.clone());
        }

        match self.target_rows.iter_mut().find(|row| row.id == record.target_id) {
            Some(target) => target.dissociate(&record.row),
            None => log::warn!(
                "undo: target {} is gone, restored {} to the source table only",
                record.target_id,
                record.row.id
            ),
        }
        Ok(record)
    }

    pub fn reset(&mut self) {
        *self = Self::defaults();
    }

    /// Reset and remove the stored entries. Nothing is written back; the
    /// next load falls back to the same defaults.
    pub fn reset_stored(&mut self, store: &dyn KeyValueStore, config: &BoardConfig) {
        self.reset();
        storage::clear(store, &config.storage_keys());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::cell::Cell;

    fn payload(id: &str, item: &str, number: usize) -> DragPayload {
        DragPayload {
            row: SourceRow::new(id, item),
            number,
        }
    }

    fn target(state: &BoardState, id: u32) -> &TargetRow {
        state.target_rows.iter().find(|row| row.id == id).unwrap()
    }

    #[test]
    fn test_drop_moves_row_onto_target() {
        let mut state = BoardState::defaults();

        let record = state.drop_row(&payload("2.3453", "Item 2", 1), 2).unwrap();

        assert!(state.source_rows.iter().all(|row| row.id != "2.3453"));
        assert_eq!(target(&state, 2).pid, vec!["2.3453"]);
        assert_eq!(target(&state, 2).hint, vec!["Item 2"]);
        assert_eq!(record.target_id, 2);
        assert_eq!(record.number, 1);
        assert_eq!(state.moves, vec![record]);
        assert!(state.can_undo());
    }

    #[test]
    fn test_drop_then_undo_restores_previous_state() {
        let mut state = BoardState::defaults();
        let before = state.clone();

        state.drop_row(&payload("2.3453", "Item 2", 1), 2).unwrap();
        state.undo().unwrap();

        assert_eq!(state, before);
    }

    #[test]
    fn test_undo_in_reverse_order() {
        let mut state = BoardState::defaults();
        let before = state.clone();

        state.drop_row(&payload("1.2345", "Item 1", 0), 3).unwrap();
        state.drop_row(&payload("3.4561", "Item 3", 1), 3).unwrap();
        state.drop_row(&payload("6.7894", "Item 6", 3), 1).unwrap();
        assert_eq!(target(&state, 3).pid, vec!["1.2345", "3.4561"]);

        let last = state.undo().unwrap();
        assert_eq!(last.row.id, "6.7894");
        assert_eq!(target(&state, 3).pid, vec!["1.2345", "3.4561"]);

        state.undo().unwrap();
        assert_eq!(target(&state, 3).pid, vec!["1.2345"]);
        state.undo().unwrap();

        assert_eq!(state, before);
        assert!(!state.can_undo());
    }

    #[test]
    fn test_undo_with_empty_history() {
        let mut state = BoardState::defaults();
        assert_eq!(state.undo(), Err(BoardError::NothingToUndo));
        assert_eq!(state, BoardState::defaults());
    }

    #[test]
    fn test_drop_unknown_target_is_rejected() {
        let mut state = BoardState::defaults();
        let result = state.drop_row(&payload("2.3453", "Item 2", 1), 99);

        assert_eq!(result, Err(BoardError::UnknownTarget(99)));
        assert_eq!(state, BoardState::defaults());
    }

    #[test]
    fn test_drop_same_row_twice_is_rejected() {
        let mut state = BoardState::defaults();
        state.drop_row(&payload("2.3453", "Item 2", 1), 2).unwrap();

        let result = state.drop_row(&payload("2.3453", "Item 2", 1), 4);

        assert_eq!(result, Err(BoardError::UnknownSource("2.3453".to_string())));
        assert!(target(&state, 4).pid.is_empty());
        assert_eq!(state.moves.len(), 1);
    }

    #[test]
    fn test_stale_payload_index_is_ignored() {
        let mut state = BoardState::defaults();
        state.drop_row(&payload("1.2345", "Item 1", 0), 1).unwrap();
        let before = state.clone();

        // Dragged when it was at index 2, now at index 1.
        let record = state.drop_row(&payload("3.4561", "Item 3", 2), 2).unwrap();
        assert_eq!(record.number, 1);

        state.undo().unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_undo_index_past_end_appends() {
        let mut state = BoardState::defaults();
        state.drop_row(&payload("6.7894", "Item 6", 5), 1).unwrap();
        state.source_rows.truncate(2);

        state.undo().unwrap();

        assert_eq!(state.source_rows.len(), 3);
        assert_eq!(state.source_rows[2].id, "6.7894");
    }

    #[test]
    fn test_undo_with_missing_target_restores_source_row() {
        let mut state = BoardState::defaults();
        state.drop_row(&payload("2.3453", "Item 2", 1), 2).unwrap();
        state.target_rows.retain(|row| row.id != 2);

        state.undo().unwrap();

        assert_eq!(state.source_rows, default_source_rows());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = BoardState::defaults();
        state.drop_row(&payload("2.3453", "Item 2", 1), 2).unwrap();
        state.drop_row(&payload("4.5672", "Item 4", 2), 5).unwrap();

        state.reset();

        assert_eq!(state, BoardState::defaults());
        assert!(state.moves.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips_board() {
        let store = MemoryStorage::new();
        let config = BoardConfig::default();
        let mut state = BoardState::defaults();
        state.drop_row(&payload("2.3453", "Item 2", 1), 2).unwrap();

        state.save(&store, &config).unwrap();
        let loaded = BoardState::load(&store, &config);

        assert_eq!(loaded, state);
    }

    #[test]
    fn test_load_falls_back_per_key() {
        let store = MemoryStorage::new();
        let config = BoardConfig::default();
        store
            .set(config.source_key, r#"[{"id":"9.9","item":"Item 9"}]"#)
            .unwrap();
        store.set(config.target_key, "not json").unwrap();

        let loaded = BoardState::load(&store, &config);

        assert_eq!(loaded.source_rows, vec![SourceRow::new("9.9", "Item 9")]);
        assert_eq!(loaded.target_rows, default_target_rows());
        assert!(loaded.moves.is_empty());
    }

    #[test]
    fn test_corrupt_source_key_does_not_duplicate_row_on_undo() {
        let store = MemoryStorage::new();
        let config = BoardConfig::default();
        let mut state = BoardState::defaults();
        state.drop_row(&payload("2.3453", "Item 2", 1), 2).unwrap();
        state.save(&store, &config).unwrap();
        store.set(config.source_key, "garbage").unwrap();

        let mut loaded = BoardState::load(&store, &config);
        let _ = loaded.undo();

        let copies = loaded.source_rows.iter().filter(|row| row.id == "2.3453").count();
        assert_eq!(copies, 1);
        assert!(loaded.moves.is_empty());
        assert_eq!(loaded.source_rows, default_source_rows());
    }

    #[test]
    fn test_undo_skips_row_already_in_source_table() {
        let mut state = BoardState::defaults();
        state.drop_row(&payload("2.3453", "Item 2", 1), 2).unwrap();
        state.source_rows = default_source_rows();

        state.undo().unwrap();

        assert_eq!(state.source_rows, default_source_rows());
        assert!(target(&state, 2).pid.is_empty());
    }

    #[test]
    fn test_reset_stored_clears_keys() {
        let store = MemoryStorage::new();
        let config = BoardConfig::default();
        let mut state = BoardState::defaults();
        state.drop_row(&payload("2.3453", "Item 2", 1), 2).unwrap();
        state.save(&store, &config).unwrap();
        store.set("unrelated", "1").unwrap();

        state.reset_stored(&store, &config);

        assert_eq!(state, BoardState::defaults());
        for key in config.storage_keys() {
            assert!(store.get(key).is_none(), "{} still stored", key);
        }
        assert_eq!(store.get("unrelated").as_deref(), Some("1"));
        assert_eq!(BoardState::load(&store, &config), BoardState::defaults());
    }

    /// Memory store that refuses writes to one key
    struct RejectingStorage {
        inner: MemoryStorage,
        rejected: &'static str,
        writes: Cell<usize>,
    }

    impl KeyValueStore for RejectingStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == self.rejected {
                return Err(StorageError::Write {
                    key: key.to_string(),
                    reason: "QuotaExceededError".to_string(),
                });
            }
            self.writes.set(self.writes.get() + 1);
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_failed_target_write_keeps_stored_source_rows() {
        let config = BoardConfig::default();
        let store = RejectingStorage {
            inner: MemoryStorage::new(),
            rejected: config.target_key,
            writes: Cell::new(0),
        };
        BoardState::defaults().save(&store.inner, &config).unwrap();

        let mut state = BoardState::defaults();
        state.drop_row(&payload("2.3453", "Item 2", 1), 2).unwrap();
        assert!(state.save(&store, &config).is_err());

        let loaded = BoardState::load(&store, &config);
        assert_eq!(loaded.source_rows, default_source_rows());
        assert_eq!(loaded.target_rows, default_target_rows());
        // The move record was written, but its row is back in the source list.
        assert!(loaded.moves.is_empty());
        assert_eq!(store.writes.get(), 1);
    }

    #[test]
    fn test_target_labels() {
        let mut state = BoardState::defaults();
        state.drop_row(&payload("2.3453", "Item 2", 1), 2).unwrap();
        state.drop_row(&payload("4.5672", "Item 4", 2), 2).unwrap();

        assert_eq!(
            state.target_labels(2),
            Some(("2.3453, 4.5672".to_string(), "Item 2, Item 4".to_string()))
        );
        assert_eq!(state.target_labels(99), None);
    }
}
