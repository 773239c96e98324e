//! dashstore: a transactional, tenant-scoped dashboard store
//!
//! Dashboards are keyed documents owned by an account. The store derives a
//! unique slug per account from each title, keeps a tag index in step with
//! the payload, records per-user stars, and answers compound searches over
//! one consistent snapshot.
//!
//! # Layers
//!
//! - [`Database`]: the shared handle (tables, WAL, config, transactions)
//! - Facades over `Arc<Database>`: [`DashboardStore`], [`TagIndex`],
//!   [`StarStore`], [`DashboardSearch`]
//! - [`Executor`]: command dispatch plus the typed command/query records in
//!   [`types`]
//!
//! # Example
//!
//! ```
//! use dashstore::types::*;
//! use dashstore::{Database, Executor};
//! use std::sync::Arc;
//!
//! let executor = Executor::new(Arc::new(Database::ephemeral()));
//!
//! let mut save = SaveDashboardCommand::new(
//!     AccountId(1),
//!     serde_json::json!({"title": "test dash 23", "tags": ["prod", "webapp"]}),
//! );
//! executor.save_dashboard(&mut save).unwrap();
//! assert_eq!(save.result.unwrap().slug, "test-dash-23");
//!
//! let mut search = SearchDashboardsQuery::new(AccountId(1));
//! search.title = Some("%test%".into());
//! executor.search_dashboards(&mut search).unwrap();
//! assert_eq!(search.result[0].tags, vec!["prod", "webapp"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;

pub use dashstore_core::derive_slug;
pub use dashstore_engine::{
    DashboardSearch, DashboardStore, Database, FaultPoint, SearchQuery, StarStore, TagIndex,
    TitlePattern,
};
pub use dashstore_executor::{Command, Error, Executor, Output};
