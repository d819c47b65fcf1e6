//! # State Store Adapter
//!
//! In-memory [`StateStore`] with journaled snapshots.
//! Production engines back the port with their own state database.

use crate::domain::value_objects::{Address, StorageKey, StorageValue};
use crate::ports::outbound::{SnapshotId, StateStore};
use std::collections::HashMap;
use tracing::trace;

/// One undo record: the slot and what it held before the write.
#[derive(Clone, Debug)]
struct JournalEntry {
    address: Address,
    key: StorageKey,
    previous: Option<StorageValue>,
}

/// In-memory state for tests and single-process engines.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStateStore {
    /// Storage.
    storage: HashMap<(Address, StorageKey), StorageValue>,
    /// Undo log since the oldest live snapshot.
    journal: Vec<JournalEntry>,
    /// Journal length at each live snapshot.
    snapshots: Vec<usize>,
}

impl InMemoryStateStore {
    /// Create a new empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every snapshot, making all writes so far permanent.
    pub fn commit(&mut self) {
        self.journal.clear();
        self.snapshots.clear();
    }

    /// Number of slots holding a value.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.storage.len()
    }

    /// Number of live snapshots.
    #[must_use]
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }
}

impl StateStore for InMemoryStateStore {
    fn get_state(&self, address: Address, key: StorageKey) -> StorageValue {
        self.storage
            .get(&(address, key))
            .copied()
            .unwrap_or(StorageValue::ZERO)
    }

    fn set_state(&mut self, address: Address, key: StorageKey, value: StorageValue) {
        let previous = if value.is_zero() {
            self.storage.remove(&(address, key))
        } else {
            self.storage.insert((address, key), value)
        };
        if !self.snapshots.is_empty() {
            self.journal.push(JournalEntry {
                address,
                key,
                previous,
            });
        }
    }

    fn snapshot(&mut self) -> SnapshotId {
        self.snapshots.push(self.journal.len());
        self.snapshots.len() - 1
    }

    fn revert_to_snapshot(&mut self, id: SnapshotId) {
        let Some(&mark) = self.snapshots.get(id) else {
            return;
        };
        trace!(id, undone = self.journal.len() - mark, "reverting state snapshot");
        for entry in self.journal.drain(mark..).rev() {
            match entry.previous {
                Some(value) => {
                    self.storage.insert((entry.address, entry.key), value);
                }
                None => {
                    self.storage.remove(&(entry.address, entry.key));
                }
            }
        }
        self.snapshots.truncate(id);
    }
}

// =============================================================================
// TESTS
// =============================================================================
