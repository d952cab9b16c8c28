use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec;
use crate::error::{StoreError, StoreResult};
use crate::key::{Collection, DocumentKey};

/// Byte-level document store keyed by (collection, user, id).
///
/// All implementations must satisfy these invariants:
/// - `write_raw` is an upsert; there is no delete operation.
/// - Writes to the same key never interleave. A reader concurrent with a
///   write observes either the previous or the new contents in full, never
///   a mixture.
/// - Writes to different keys are fully concurrent and unordered.
/// - A missing document reads as `Ok(None)`, never as an error.
/// - The store never interprets document contents.
/// - All I/O errors are propagated, never silently ignored.
pub trait DocumentStore: Send + Sync {
    /// Read the stored bytes for a key.
    ///
    /// Returns `Ok(None)` if the document does not exist.
    fn read_raw(&self, key: &DocumentKey) -> StoreResult<Option<Vec<u8>>>;

    /// Write the full document bytes for a key (create or overwrite).
    fn write_raw(&self, key: &DocumentKey, bytes: &[u8]) -> StoreResult<()>;

    /// Enumerate the ids of every document under a (collection, user)
    /// partition.
    ///
    /// An unwritten partition yields an empty list. Ordering is not
    /// guaranteed to be stable or meaningful.
    fn list(&self, collection: Collection, user: &str) -> StoreResult<Vec<String>>;
}

/// Typed get/set for any [`DocumentStore`].
///
/// The backend stays byte-oriented; the caller supplies the shape to decode
/// into and an encodable value to store.
pub trait DocumentStoreExt: DocumentStore {
    /// Fetch and decode the document at (collection, user, id).
    ///
    /// Fails with [`StoreError::NotFound`] if no document is stored there.
    fn get<T: DeserializeOwned>(
        &self,
        collection: Collection,
        user: &str,
        id: &str,
    ) -> StoreResult<T> {
        let key = DocumentKey::new(collection, user, id)?;
        let bytes = self
            .read_raw(&key)?
            .ok_or(StoreError::NotFound(key))?;
        codec::decode(&bytes)
    }

    /// Encode and store a document at (collection, user, id), creating it if
    /// absent or overwriting it if present (last writer wins).
    fn set<T: Serialize>(
        &self,
        collection: Collection,
        user: &str,
        id: &str,
        value: &T,
    ) -> StoreResult<()> {
        let key = DocumentKey::new(collection, user, id)?;
        let bytes = codec::encode(value)?;
        self.write_raw(&key, &bytes)
    }
}

impl<S: DocumentStore + ?Sized> DocumentStoreExt for S {}
