//! Persistent storage using redb.
//!
//! The per-browser localStorage of the original gift site becomes a small
//! redb database in the data directory. It holds a single JSON blob: the
//! anniversary unlock state. A missing key reads as the default state.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, TableDefinition};

use crate::anniversary::AnniversaryState;
use crate::error::KeepsakeResult;

const STATE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("state");

const ANNIVERSARY_KEY: &str = "anniversary-state";

/// Storage layer for persisted unlock state.
#[derive(Clone)]
pub struct Store {
    db: Arc<RwLock<Database>>,
}

impl Store {
    /// Open or create the database at the given path and initialize its
    /// tables.
    pub fn new(path: impl AsRef<Path>) -> KeepsakeResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(STATE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Load the anniversary state, falling back to the default when nothing
    /// has been saved yet.
    pub fn load_anniversary_state(&self) -> KeepsakeResult<AnniversaryState> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(STATE_TABLE)?;

        match table.get(ANNIVERSARY_KEY)? {
            Some(value) => Ok(serde_json::from_slice(value.value())?),
            None => Ok(AnniversaryState::default()),
        }
    }

    /// Save the anniversary state, overwriting any previous value.
    pub fn save_anniversary_state(&self, state: &AnniversaryState) -> KeepsakeResult<()> {
        let data = serde_json::to_vec(state)?;

        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(STATE_TABLE)?;
            table.insert(ANNIVERSARY_KEY, data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Reset persisted state back to the defaults.
    pub fn reset_anniversary_state(&self) -> KeepsakeResult<AnniversaryState> {
        let state = AnniversaryState::default();
        self.save_anniversary_state(&state)?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("keepsake.redb")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_missing_state_reads_as_default() {
        let (_dir, store) = temp_store();
        let state = store.load_anniversary_state().unwrap();
        assert_eq!(state, AnniversaryState::default());
    }

    #[test]
    fn test_save_and_reload() {
        let (_dir, store) = temp_store();

        let mut state = AnniversaryState::default();
        state.open_letter(0);
        state.open_letter(3);
        state.set_heartbeat_mode(false);
        store.save_anniversary_state(&state).unwrap();

        let reloaded = store.load_anniversary_state().unwrap();
        assert_eq!(reloaded, state);
        assert_eq!(reloaded.unlocked_photo_count, 4);
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("keepsake.redb");

        {
            let store = Store::new(&path).unwrap();
            let mut state = AnniversaryState::default();
            state.complete_vows();
            store.save_anniversary_state(&state).unwrap();
        }

        let store = Store::new(&path).unwrap();
        assert!(store.load_anniversary_state().unwrap().has_completed_vows);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let (_dir, store) = temp_store();

        let mut state = AnniversaryState::default();
        state.open_letter(1);
        store.save_anniversary_state(&state).unwrap();

        store.reset_anniversary_state().unwrap();
        assert_eq!(
            store.load_anniversary_state().unwrap(),
            AnniversaryState::default()
        );
    }
}
