//! Storage layer for dashstore
//!
//! In-memory tables for dashboards, tag associations and stars, kept behind a
//! single reader-writer lock so that every reader observes one committed
//! state of all three tables at once.
//!
//! - `rows`: persisted row types and the `Mutation` write-set vocabulary
//! - `tables`: `TableSet` with its secondary indexes
//! - `store`: `Store`, the lock + version/id counters around a `TableSet`
//! - `codec`: opaque payload encoding at the storage boundary

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod rows;
pub mod store;
pub mod tables;

pub use codec::{decode_document, encode_document};
pub use rows::{DashboardRow, Mutation};
pub use store::Store;
pub use tables::TableSet;
