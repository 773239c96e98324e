//! Durability layer for dashstore
//!
//! Committed write sets are appended to a single-file write-ahead log before
//! they are applied to the in-memory tables. Opening a database replays the
//! log to rebuild the tables.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod wal;

pub use wal::{DurabilityMode, Wal, WalCorruptionInfo, WalEntry, WalReadResult};
