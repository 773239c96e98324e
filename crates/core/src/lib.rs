//! Core types for dashstore
//!
//! This crate defines the vocabulary shared by every other crate:
//! - Identifiers: `AccountId`, `DashboardId`, `UserId`
//! - `EntityRef`: typed reference used in not-found errors
//! - `StoreError` / `StoreResult`: the error kinds surfaced to callers
//! - `DashboardPayload`: the keyed document a caller saves
//! - `slug`: deterministic URL-safe identifiers derived from titles

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod payload;
pub mod slug;
pub mod types;

pub use error::{ErrorKind, StoreError, StoreResult};
pub use payload::{DashboardPayload, RESERVED_KEYS};
pub use slug::derive_slug;
pub use types::{AccountId, Dashboard, DashboardId, EntityRef, SearchHit, TagCount, UserId};
