//! Executor error type.
//!
//! Every command either produces an [`crate::Output`] or exactly one
//! [`Error`]. Variants are structured so callers can match on them instead of
//! parsing messages.

use serde::Serialize;
use thiserror::Error;

/// Executor result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`crate::Executor::execute`]
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "error")]
pub enum Error {
    /// Malformed command input (bad document, empty title, limit exceeded)
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong
        reason: String,
    },

    /// Another dashboard of the tenant already has this slug
    #[error("dashboard with slug '{slug}' already exists in account {account_id}")]
    DashboardExists {
        /// Tenant
        account_id: i64,
        /// Colliding slug
        slug: String,
    },

    /// No dashboard matched
    #[error("dashboard not found: {dashboard}")]
    DashboardNotFound {
        /// Rendered reference of what was looked up
        dashboard: String,
    },

    /// Persistence failure
    #[error("I/O error: {reason}")]
    Io {
        /// Failure description
        reason: String,
    },

    /// Executor invariant broken (unexpected output variant)
    #[error("internal error: {reason}")]
    Internal {
        /// Description
        reason: String,
    },
}

impl Error {
    /// Whether this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::DashboardNotFound { .. })
    }
}
