//! Directory-based enumeration of stored document ids.
//!
//! There is no separate index structure: the set of ids under a partition is
//! exactly the set of `.json` files in its directory.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::StoreResult;
use crate::paths::DOCUMENT_SUFFIX;

/// List every document id stored under `dir`.
///
/// Ids are recovered by stripping the storage suffix from each filename.
/// Entries that are not regular files or do not carry the suffix -- in-flight
/// temp files included -- are skipped. A missing directory yields an empty
/// list, not an error. Ordering follows directory enumeration and is not
/// guaranteed to be stable or meaningful.
pub fn list_ids(dir: &Path) -> StoreResult<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut ids = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(id) = name.strip_suffix(DOCUMENT_SUFFIX) {
            if !id.is_empty() {
                ids.push(id.to_string());
            }
        }
    }
    Ok(ids)
}
