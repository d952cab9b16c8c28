//! Pure mapping from document keys to filesystem locations.
//!
//! No I/O happens here. Keys are validated at construction
//! ([`DocumentKey::new`](crate::key::DocumentKey::new)), so resolution is
//! infallible and the resulting path always stays inside the store root.

use std::path::{Path, PathBuf};

use crate::key::{Collection, DocumentKey};

/// Filename suffix for stored documents.
pub const DOCUMENT_SUFFIX: &str = ".json";

/// Directory holding every document of a (collection, user) partition.
pub fn partition_path(root: &Path, collection: Collection, user: &str) -> PathBuf {
    root.join(collection.as_str()).join(user)
}

/// Canonical file location for a single document.
pub fn document_path(root: &Path, key: &DocumentKey) -> PathBuf {
    partition_path(root, key.collection(), key.user())
        .join(format!("{}{}", key.id(), DOCUMENT_SUFFIX))
}
