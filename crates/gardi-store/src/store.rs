//! Filesystem-backed document store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::atomic;
use crate::error::StoreResult;
use crate::index;
use crate::key::{validate_segment, Collection, DocumentKey};
use crate::lock::KeyLockTable;
use crate::paths;
use crate::traits::DocumentStore;

/// Document store persisting one JSON file per document under
/// `<root>/<collection>/<user>/<id>.json`.
///
/// Constructed explicitly with its root path at startup and shared by
/// reference for the process lifetime. Directories are created lazily on
/// first write; a user namespace exists exactly as long as it has documents.
pub struct FsDocumentStore {
    root: PathBuf,
    locks: KeyLockTable,
}

impl FsDocumentStore {
    /// Open a store rooted at `root`, creating the root directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        tracing::debug!(root = %root.display(), "opened document store");
        Ok(Self {
            root,
            locks: KeyLockTable::new(),
        })
    }

    /// The store's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocumentStore for FsDocumentStore {
    // Reads skip the key lock: the rename in `write_atomic` guarantees a
    // reader sees either the old or the new file in full.
    fn read_raw(&self, key: &DocumentKey) -> StoreResult<Option<Vec<u8>>> {
        match fs::read(paths::document_path(&self.root, key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_raw(&self, key: &DocumentKey, bytes: &[u8]) -> StoreResult<()> {
        let path = paths::document_path(&self.root, key);
        self.locks
            .with_key(key, || atomic::write_atomic(&path, bytes))
    }

    fn list(&self, collection: Collection, user: &str) -> StoreResult<Vec<String>> {
        validate_segment(user)?;
        index::list_ids(&paths::partition_path(&self.root, collection, user))
    }
}

impl std::fmt::Debug for FsDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsDocumentStore")
            .field("root", &self.root)
            .finish()
    }
}
