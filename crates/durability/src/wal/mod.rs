//! WAL (Write-Ahead Log) module
//!
//! - `entry`: `WalEntry` and its on-disk frame format
//! - `file`: `Wal`, the append/replay handle over one log file

mod entry;
mod file;

use serde::{Deserialize, Serialize};

pub use entry::{decode_frame, encode_frame, WalEntry, FRAME_HEADER_LEN};
pub use file::{Wal, WalCorruptionInfo, WalReadResult};

/// How hard a commit pushes its WAL record towards the disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurabilityMode {
    /// No log at all; state is lost when the process exits
    None,
    /// Record handed to the OS on every commit, no fsync
    Buffered,
    /// Record written and fsynced before the commit returns (default)
    #[default]
    Always,
}

impl DurabilityMode {
    /// Whether this mode writes a log file
    pub fn writes_log(&self) -> bool {
        !matches!(self, DurabilityMode::None)
    }
}
