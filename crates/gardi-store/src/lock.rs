//! Per-key write serialization.
//!
//! Writers to the same (collection, user, id) key take an exclusive slot for
//! the duration of the write phase; writers to different keys proceed fully
//! concurrently. Slots are reference-counted and removed as soon as the last
//! holder or waiter releases, so the table stays bounded no matter how many
//! keys come and go. Acquisition is scoped: the slot cannot outlive the
//! closure it guards.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{StoreError, StoreResult};
use crate::key::DocumentKey;

struct SlotEntry {
    busy: Arc<Mutex<()>>,
    /// Holders plus blocked waiters currently checked out on this key.
    waiters: usize,
}

/// Table of per-key exclusive write slots.
pub struct KeyLockTable {
    slots: Mutex<HashMap<DocumentKey, SlotEntry>>,
}

impl KeyLockTable {
    /// Create an empty lock table.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Run `f` while holding the exclusive slot for `key`.
    ///
    /// Blocks until any in-flight writer on the same key finishes. If a
    /// previous holder panicked mid-write while this caller was waiting, the
    /// slot is poisoned and `LockPoisoned` is returned without running `f`.
    pub fn with_key<R>(
        &self,
        key: &DocumentKey,
        f: impl FnOnce() -> StoreResult<R>,
    ) -> StoreResult<R> {
        let busy = {
            let mut slots = self.slots.lock().expect("lock table mutex poisoned");
            let entry = slots.entry(key.clone()).or_insert_with(|| SlotEntry {
                busy: Arc::new(Mutex::new(())),
                waiters: 0,
            });
            entry.waiters += 1;
            Arc::clone(&entry.busy)
        };

        // Checked in on every exit path, including panics inside `f`.
        let _checkin = Checkin { table: self, key };
        let guard = busy
            .lock()
            .map_err(|_| StoreError::LockPoisoned(key.clone()))?;
        let result = f();
        drop(guard);
        result
    }

    /// Number of keys with an in-flight or waiting writer.
    pub fn len(&self) -> usize {
        self.slots.lock().expect("lock table mutex poisoned").len()
    }

    /// Returns `true` if no key is currently checked out.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for KeyLockTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KeyLockTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyLockTable")
            .field("active_keys", &self.len())
            .finish()
    }
}

struct Checkin<'a> {
    table: &'a KeyLockTable,
    key: &'a DocumentKey,
}

impl Drop for Checkin<'_> {
    fn drop(&mut self) {
        let mut slots = self
            .table
            .slots
            .lock()
            .expect("lock table mutex poisoned");
        if let Some(entry) = slots.get_mut(self.key) {
            entry.waiters -= 1;
            if entry.waiters == 0 {
                slots.remove(self.key);
            }
        }
    }
}
