//! WAL entry and frame format
//!
//! ```text
//! +-----------+-----------+---------------------------+
//! | len: u32  | crc: u32  | payload (len bytes)       |
//! +-----------+-----------+---------------------------+
//! ```
//!
//! Both header fields are little-endian. `crc` is CRC32 of the payload, and
//! the payload is a MessagePack-encoded [`WalEntry`].

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use dashstore_core::{StoreError, StoreResult};
use dashstore_storage::Mutation;
use serde::{Deserialize, Serialize};

/// Length of the `len` + `crc` header
pub const FRAME_HEADER_LEN: usize = 8;

/// One committed write set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalEntry {
    /// Commit version assigned to the write set
    pub version: u64,
    /// Mutations in application order
    pub mutations: Vec<Mutation>,
}

/// Encode an entry into a complete frame
pub fn encode_frame(entry: &WalEntry) -> StoreResult<Vec<u8>> {
    let payload =
        rmp_serde::to_vec(entry).map_err(|e| StoreError::serialization(e.to_string()))?;
    let len = u32::try_from(payload.len())
        .map_err(|_| StoreError::storage("WAL entry exceeds 4 GiB"))?;

    let mut frame = Vec::with_capacity(FRAME_HEADER_LEN + payload.len());
    frame.write_u32::<LittleEndian>(len)?;
    frame.write_u32::<LittleEndian>(crc32fast::hash(&payload))?;
    frame.extend_from_slice(&payload);
    Ok(frame)
}

/// Decode the frame at the start of `buf`
///
/// # Returns
///
/// * `Ok(Some((entry, consumed)))` - a complete, valid frame
/// * `Ok(None)` - `buf` ends before the frame does (torn write)
/// * `Err(reason)` - checksum mismatch or undecodable payload
pub fn decode_frame(buf: &[u8]) -> Result<Option<(WalEntry, usize)>, String> {
    if buf.len() < FRAME_HEADER_LEN {
        return Ok(None);
    }
    let len = LittleEndian::read_u32(&buf[0..4]) as usize;
    let crc = LittleEndian::read_u32(&buf[4..8]);
    let end = FRAME_HEADER_LEN + len;
    if buf.len() < end {
        return Ok(None);
    }

    let payload = &buf[FRAME_HEADER_LEN..end];
    let actual = crc32fast::hash(payload);
    if actual != crc {
        return Err(format!(
            "checksum mismatch (expected {:08x}, got {:08x})",
            crc, actual
        ));
    }

    let entry: WalEntry = rmp_serde::from_slice(payload).map_err(|e| e.to_string())?;
    Ok(Some((entry, end)))
}
