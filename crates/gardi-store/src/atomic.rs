//! Atomic file replacement.
//!
//! A write lands in a temporary sibling inside the target directory, is
//! synced, and is renamed into place. At any observable instant the target
//! holds either the prior contents in full or the new contents in full --
//! a crash mid-write leaves the prior version untouched, and the temporary
//! file is removed on any failure before the rename.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::error::StoreResult;

/// Write `bytes` to `path` such that readers never observe a partial file.
///
/// Parent directories are created on demand. Failures (disk-full,
/// permission-denied, unreachable parent) are fatal for this single
/// operation and reported to the caller; no retry is attempted here.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> StoreResult<()> {
    let dir = path.parent().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "target path has no parent directory",
        )
    })?;
    fs::create_dir_all(dir)?;

    // The temp file must be a sibling: rename is only atomic within a
    // filesystem. On any early return it is removed on drop.
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), len = bytes.len(), "atomic write");
    Ok(())
}
