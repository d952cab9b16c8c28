use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StoreResult;
use crate::key::{validate_segment, Collection, DocumentKey};
use crate::traits::DocumentStore;

/// In-memory, HashMap-based document store.
///
/// Intended for tests and embedding. All documents are held in memory behind
/// a `RwLock`; bytes are cloned on read and write. The map write lock
/// serializes same-key writers, which subsumes the per-key locking the
/// filesystem backend needs.
pub struct InMemoryDocumentStore {
    docs: RwLock<HashMap<DocumentKey, Vec<u8>>>,
}

impl InMemoryDocumentStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            docs: RwLock::new(HashMap::new()),
        }
    }

    /// Number of documents currently stored.
    pub fn len(&self) -> usize {
        self.docs.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.docs.read().expect("lock poisoned").is_empty()
    }

    /// Remove all documents from the store.
    pub fn clear(&self) {
        self.docs.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn read_raw(&self, key: &DocumentKey) -> StoreResult<Option<Vec<u8>>> {
        let map = self.docs.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    fn write_raw(&self, key: &DocumentKey, bytes: &[u8]) -> StoreResult<()> {
        let mut map = self.docs.write().expect("lock poisoned");
        map.insert(key.clone(), bytes.to_vec());
        Ok(())
    }

    fn list(&self, collection: Collection, user: &str) -> StoreResult<Vec<String>> {
        validate_segment(user)?;
        let map = self.docs.read().expect("lock poisoned");
        let mut ids: Vec<String> = map
            .keys()
            .filter(|key| key.collection() == collection && key.user() == user)
            .map(|key| key.id().to_string())
            .collect();
        // Sorted only to keep this backend's own iteration deterministic;
        // callers must not rely on list order from any backend.
        ids.sort();
        Ok(ids)
    }
}

impl std::fmt::Debug for InMemoryDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryDocumentStore")
            .field("document_count", &self.len())
            .finish()
    }
}
