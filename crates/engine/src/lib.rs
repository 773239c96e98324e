//! Database engine for dashstore
//!
//! This crate orchestrates the lower layers:
//! - `database`: the `Database` handle, closure-scoped transactions, WAL replay
//! - `config`: TOML-backed `StoreConfig`
//! - `dashboard`: `DashboardStore` (save / get)
//! - `tags`: `TagIndex` (tag replacement and distinct-tag listing)
//! - `stars`: `StarStore` (per-user favorites)
//! - `search`: `DashboardSearch` (compound tenant-scoped queries)
//!
//! Every facade is stateless and holds only `Arc<Database>`.
//!
//! # Example
//!
//! ```
//! use dashstore_core::{AccountId, DashboardPayload};
//! use dashstore_engine::{Database, DashboardStore};
//! use std::sync::Arc;
//!
//! let db = Arc::new(Database::ephemeral());
//! let dashboards = DashboardStore::new(db);
//! let saved = dashboards
//!     .save(AccountId(1), DashboardPayload::new("test dash 23"))
//!     .unwrap();
//! assert_eq!(saved.slug, "test-dash-23");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dashboard;
pub mod database;
pub mod search;
pub mod stars;
pub mod tags;

pub use config::{Limits, SearchConfig, StoreConfig, CONFIG_FILE_NAME};
pub use dashboard::DashboardStore;
pub use database::{Database, FaultPoint, WAL_FILE_NAME};
pub use search::{DashboardSearch, SearchQuery, TitlePattern};
pub use stars::StarStore;
pub use tags::TagIndex;

// Re-export durability mode so callers can build a config without the
// durability crate
pub use dashstore_durability::DurabilityMode;
