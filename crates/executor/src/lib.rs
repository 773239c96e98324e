//! Command execution layer for dashstore
//!
//! Callers describe operations as [`Command`]s; the [`Executor`] dispatches
//! them to the engine facades and returns an [`Output`] or exactly one
//! [`Error`].
//!
//! On top of that sits a typed API (`Executor::save_dashboard`,
//! `Executor::get_dashboard`, ...) working on the command/query records in
//! [`types`], each of which carries a `result` field filled on success.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod api;
mod bridge;
mod command;
mod convert;
mod error;
mod executor;
mod handlers;
mod output;
pub mod types;

pub use command::Command;
pub use convert::convert_result;
pub use error::{Error, Result};
pub use executor::Executor;
pub use output::Output;
pub use types::{
    GetDashboardByIdQuery, GetDashboardQuery, GetDashboardTagsQuery, SaveDashboardCommand,
    SearchDashboardsQuery, StarDashboardCommand, UnstarDashboardCommand,
};
