//! Key-value slot persistence.
//!
//! Each named slot is one JSON file under the data directory. Slots are
//! independent: the store reads all of them once at startup and rewrites
//! all of them after every mutation. Missing or corrupt slots read back
//! as `None` and the caller falls back to defaults; there is no
//! migration and no transaction.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;
use crate::goal::Goal;
use crate::streak::StreakRecord;

/// Slot holding the ordered list of today's goals.
pub const GOALS_SLOT: &str = "goals";
/// Slot holding the streak counters.
pub const STREAK_SLOT: &str = "streak";
/// Slot holding the daily completion flag.
pub const COMPLETED_TODAY_SLOT: &str = "completed_today";
/// Slot holding the last-open timestamp used by the rollover check.
pub const LAST_OPEN_SLOT: &str = "last_open";

/// JSON slot storage rooted at a directory.
pub struct SlotStore {
    dir: PathBuf,
}

impl SlotStore {
    /// Open the slot store at the default data directory.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self {
            dir: super::data_dir()?,
        })
    }

    /// Open a slot store rooted at a custom directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    /// Read a slot, returning `None` if it is missing or unparseable.
    pub fn read_slot<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let content = std::fs::read_to_string(self.slot_path(name)).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Overwrite a slot.
    pub fn write_slot<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StorageError> {
        let content =
            serde_json::to_string_pretty(value).map_err(|source| StorageError::SerializeFailed {
                slot: name.to_string(),
                source,
            })?;
        let path = self.slot_path(name);
        std::fs::write(&path, content).map_err(|source| StorageError::WriteFailed {
            slot: name.to_string(),
            path,
            source,
        })
    }

    /// Directory this store reads and writes under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Everything the goal store persists, read back in one pass.
#[derive(Debug, Default)]
pub struct StoredState {
    pub goals: Vec<Goal>,
    pub streak: StreakRecord,
    pub completed_today: bool,
    pub last_open: Option<DateTime<Utc>>,
}

impl StoredState {
    /// Load all slots, substituting defaults for anything missing or corrupt.
    pub fn load(store: &SlotStore) -> Self {
        Self {
            goals: store.read_slot(GOALS_SLOT).unwrap_or_default(),
            streak: store.read_slot(STREAK_SLOT).unwrap_or_default(),
            completed_today: store.read_slot(COMPLETED_TODAY_SLOT).unwrap_or_default(),
            last_open: store.read_slot(LAST_OPEN_SLOT).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn round_trips_each_slot() {
        let tmp = tempfile::tempdir().unwrap();
        let store = SlotStore::with_dir(tmp.path());

        let goals = vec![Goal::new("Stretch", Utc::now())];
        store.write_slot(GOALS_SLOT, &goals).unwrap();
        store.write_slot(COMPLETED_TODAY_SLOT, &true).unwrap();

        let read: Vec<Goal> = store.read_slot(GOALS_SLOT).unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].text, "Stretch");
        assert_eq!(store.read_slot::<bool>(COMPLETED_TODAY_SLOT), Some(true));
    }

    #[test]
    fn missing_slot_reads_as_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = SlotStore::with_dir(tmp.path());
        assert!(store.read_slot::<Vec<Goal>>(GOALS_SLOT).is_none());
    }

    #[test]
    fn corrupt_slot_reads_as_none() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("streak.json"), "{not json").unwrap();
        let store = SlotStore::with_dir(tmp.path());
        assert!(store.read_slot::<StreakRecord>(STREAK_SLOT).is_none());
    }

    #[test]
    fn load_falls_back_to_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("goals.json"), "[[[").unwrap();
        let store = SlotStore::with_dir(tmp.path());

        let state = StoredState::load(&store);
        assert!(state.goals.is_empty());
        assert_eq!(state.streak, StreakRecord::default());
        assert!(!state.completed_today);
        assert!(state.last_open.is_none());
    }

    #[test]
    fn last_open_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let store = SlotStore::with_dir(tmp.path());
        let stamp = Utc.with_ymd_and_hms(2025, 8, 1, 9, 30, 0).unwrap();
        store.write_slot(LAST_OPEN_SLOT, &Some(stamp)).unwrap();

        let state = StoredState::load(&store);
        assert_eq!(state.last_open, Some(stamp));
    }
}
