use crate::key::DocumentKey;

/// Errors from document store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested key has no stored document. A normal negative result,
    /// not an anomaly.
    #[error("document not found: {0}")]
    NotFound(DocumentKey),

    /// A user or id segment would escape the partition directory or cannot
    /// name a file. Rejected outright, never rewritten.
    #[error("invalid key segment {segment:?}: {reason}")]
    InvalidSegment { segment: String, reason: String },

    /// The value is not representable in the storage format.
    #[error("encode error: {0}")]
    Encode(String),

    /// The stored bytes are malformed or do not fit the caller's shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// I/O error from the underlying filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A writer panicked while holding this key's write lock. Indicates a
    /// programming invariant violation, not a recoverable condition.
    #[error("write lock poisoned for {0}")]
    LockPoisoned(DocumentKey),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
