//! Error conversion from internal error types.
//!
//! This module provides conversions from [`StoreError`] to the executor's
//! [`Error`] type.

use crate::Error;
use dashstore_core::StoreError;

/// Convert a StoreError to an executor Error.
///
/// This preserves all error details while mapping to the appropriate
/// executor error variant.
impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation { message } => Error::InvalidInput { reason: message },

            StoreError::UniquenessViolation { account_id, slug } => Error::DashboardExists {
                account_id: account_id.as_i64(),
                slug,
            },

            StoreError::NotFound { entity } => Error::DashboardNotFound {
                dashboard: entity.to_string(),
            },

            StoreError::Storage { message } => Error::Io { reason: message },
        }
    }
}

/// Convert a StoreResult to an executor Result.
pub fn convert_result<T>(result: dashstore_core::StoreResult<T>) -> crate::Result<T> {
    result.map_err(Error::from)
}
