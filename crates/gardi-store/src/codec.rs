//! Serialization of caller-supplied values to and from the stored byte
//! format (pretty-printed UTF-8 JSON).
//!
//! The store treats payloads as opaque: the caller supplies the shape to
//! decode into and an encodable value to write. Encode/decode failures are
//! contract violations and are surfaced, never defaulted.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StoreError, StoreResult};

/// Encode a value into the stored byte format.
pub fn encode<T: Serialize>(value: &T) -> StoreResult<Vec<u8>> {
    serde_json::to_vec_pretty(value).map_err(|e| StoreError::Encode(e.to_string()))
}

/// Decode stored bytes into the caller's expected shape.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> StoreResult<T> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::Decode(e.to_string()))
}
