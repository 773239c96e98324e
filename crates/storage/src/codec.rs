//! Payload encoding at the storage boundary
//!
//! Documents are stored as MessagePack bytes. The store treats them as opaque
//! blobs; only the reserved fields are kept in dedicated row columns.

use dashstore_core::{StoreError, StoreResult};
use serde_json::Value;

/// Encode a payload document for storage
pub fn encode_document(doc: &Value) -> StoreResult<Vec<u8>> {
    rmp_serde::to_vec(doc).map_err(|e| StoreError::serialization(e.to_string()))
}

/// Decode a stored payload document
pub fn decode_document(bytes: &[u8]) -> StoreResult<Value> {
    rmp_serde::from_slice(bytes).map_err(|e| StoreError::serialization(e.to_string()))
}
