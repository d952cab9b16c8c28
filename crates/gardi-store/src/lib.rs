//! Embedded file-backed document store for the gardi backend.
//!
//! Documents are opaque JSON payloads addressed by a (collection, user, id)
//! triple and persisted one file per document under
//! `<root>/<collection>/<user>/<id>.json`. The store guarantees that
//! concurrent writers to the same key never interleave, that a reader never
//! observes a partially-written file, and that the ids under a partition can
//! be enumerated straight from the directory, with no separate index.
//!
//! # Components
//!
//! - [`key`] — [`Collection`] / [`DocumentKey`] addressing plus segment
//!   validation (traversal hardening happens here, before any path exists)
//! - [`paths`] — pure key-to-path mapping, no I/O
//! - [`codec`] — (de)serialization of caller-supplied values to stored bytes
//! - [`atomic`] — temp-sibling-plus-rename file replacement
//! - [`lock`] — per-key write serialization with a self-shrinking lock table
//! - [`index`] — id enumeration from directory entries
//! - [`FsDocumentStore`] — the filesystem composition of all of the above
//! - [`InMemoryDocumentStore`] — HashMap backend for tests and embedding
//!
//! # Design Rules
//!
//! 1. Set is an upsert; there is no delete and no cross-key transaction.
//! 2. Same-key writes are totally ordered by lock acquisition;
//!    last writer wins.
//! 3. Reads never block on writers: atomic rename makes every read a
//!    complete version.
//! 4. Invalid user/id segments are rejected with a typed error, never
//!    rewritten into a "safe" form.
//! 5. All I/O errors are propagated, never silently ignored.

pub mod atomic;
pub mod codec;
pub mod error;
pub mod index;
pub mod key;
pub mod lock;
pub mod memory;
pub mod paths;
pub mod store;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use key::{Collection, DocumentKey};
pub use memory::InMemoryDocumentStore;
pub use store::FsDocumentStore;
pub use traits::{DocumentStore, DocumentStoreExt};
