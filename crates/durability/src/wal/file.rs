//! Single-file WAL handle
//!
//! Opening reads every valid frame, truncates a torn or corrupt tail, and
//! leaves the file positioned for appends.

use dashstore_core::{StoreError, StoreResult};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use super::entry::{decode_frame, encode_frame, WalEntry};
use super::DurabilityMode;

/// Where and why replay stopped early
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalCorruptionInfo {
    /// Byte offset of the first frame that could not be read
    pub offset: u64,
    /// Bytes dropped from the tail
    pub truncated_bytes: u64,
    /// Human-readable reason
    pub reason: String,
}

/// Result of reading a WAL on open
#[derive(Debug, Clone, Default)]
pub struct WalReadResult {
    /// Valid entries in log order
    pub entries: Vec<WalEntry>,
    /// Set when a tail had to be truncated
    pub corruption: Option<WalCorruptionInfo>,
}

/// Append/replay handle for one log file
pub struct Wal {
    path: PathBuf,
    file: Mutex<File>,
    mode: DurabilityMode,
}

impl Wal {
    /// Open (or create) the log at `path` and read its contents.
    pub fn open(
        path: impl AsRef<Path>,
        mode: DurabilityMode,
    ) -> StoreResult<(Self, WalReadResult)> {
        let path = path.as_ref().to_path_buf();
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;

        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;

        let mut result = WalReadResult::default();
        let mut offset = 0usize;
        while offset < buf.len() {
            match decode_frame(&buf[offset..]) {
                Ok(Some((entry, consumed))) => {
                    result.entries.push(entry);
                    offset += consumed;
                }
                Ok(None) => {
                    result.corruption = Some(WalCorruptionInfo {
                        offset: offset as u64,
                        truncated_bytes: (buf.len() - offset) as u64,
                        reason: "incomplete frame".to_string(),
                    });
                    break;
                }
                Err(reason) => {
                    result.corruption = Some(WalCorruptionInfo {
                        offset: offset as u64,
                        truncated_bytes: (buf.len() - offset) as u64,
                        reason,
                    });
                    break;
                }
            }
        }

        if let Some(info) = &result.corruption {
            tracing::warn!(
                path = %path.display(),
                offset = info.offset,
                truncated_bytes = info.truncated_bytes,
                reason = %info.reason,
                "Truncating unreadable WAL tail"
            );
            file.set_len(info.offset)?;
            file.sync_all()?;
        }
        file.seek(SeekFrom::End(0))?;

        Ok((
            Wal {
                path,
                file: Mutex::new(file),
                mode,
            },
            result,
        ))
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Durability mode this log was opened with
    pub fn mode(&self) -> DurabilityMode {
        self.mode
    }

    /// Append one entry.
    ///
    /// Under `Always` the data is fsynced before returning. On failure the
    /// file is cut back to its length before the append, so a rejected
    /// commit is never replayed; the caller must not apply the write set.
    pub fn append(&self, entry: &WalEntry) -> StoreResult<()> {
        self.append_with(entry, write_frame)
    }

    fn append_with<F>(&self, entry: &WalEntry, write: F) -> StoreResult<()>
    where
        F: FnOnce(&mut File, &[u8], DurabilityMode) -> io::Result<()>,
    {
        if !self.mode.writes_log() {
            return Ok(());
        }
        let frame = encode_frame(entry)?;
        let mut file = self.file.lock();
        let start = file.seek(SeekFrom::End(0))?;

        if let Err(e) = write(&mut *file, &frame, self.mode) {
            if let Err(rollback) = truncate_to(&mut *file, start) {
                tracing::warn!(
                    path = %self.path.display(),
                    offset = start,
                    error = %rollback,
                    "Could not roll back failed WAL append"
                );
                return Err(StoreError::storage(format!(
                    "WAL append failed: {}; rollback failed: {}",
                    e, rollback
                )));
            }
            return Err(StoreError::storage(format!("WAL append failed: {}", e)));
        }
        Ok(())
    }

    /// Force buffered records to stable storage
    pub fn sync(&self) -> StoreResult<()> {
        let file = self.file.lock();
        file.sync_all()?;
        Ok(())
    }
}

fn write_frame(file: &mut File, frame: &[u8], mode: DurabilityMode) -> io::Result<()> {
    file.write_all(frame)?;
    file.flush()?;
    if mode == DurabilityMode::Always {
        file.sync_data()?;
    }
    Ok(())
}

fn truncate_to(file: &mut File, len: u64) -> io::Result<()> {
    file.set_len(len)?;
    file.seek(SeekFrom::Start(len))?;
    Ok(())
}

impl std::fmt::Debug for Wal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wal")
            .field("path", &self.path)
            .field("mode", &self.mode)
            .finish()
    }
}
