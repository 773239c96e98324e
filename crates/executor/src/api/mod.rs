//! Typed command API.
//!
//! Each method takes a command/query record, executes it and fills its
//! `result` field.
//!
//! # Example
//!
//! ```text
//! let executor = Executor::new(Arc::new(Database::ephemeral()));
//!
//! let mut save = SaveDashboardCommand::new(AccountId(1), json!({"title": "ops"}));
//! executor.save_dashboard(&mut save)?;
//!
//! let mut get = GetDashboardQuery::new(AccountId(1), "ops");
//! executor.get_dashboard(&mut get)?;
//! ```

mod dashboards;
mod stars;
