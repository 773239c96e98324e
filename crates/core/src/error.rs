//! Error types for dashstore
//!
//! Every public operation returns either a value or exactly one `StoreError`.
//! Callers branch on [`StoreError::kind`] rather than on message text.

use thiserror::Error;

use crate::types::{AccountId, EntityRef};

/// Result type alias used throughout dashstore
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Coarse classification of a [`StoreError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller input rejected before any transaction started
    Validation,
    /// Save would duplicate `(account_id, slug)`
    UniquenessViolation,
    /// Lookup found no row
    NotFound,
    /// Underlying persistence failure
    Storage,
}

/// Errors surfaced by the store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Empty or missing title, malformed tags, limits exceeded
    #[error("validation failed: {message}")]
    Validation {
        /// What was wrong with the input
        message: String,
    },

    /// Another dashboard of the same tenant already uses this slug
    #[error("a dashboard with slug '{slug}' already exists in account {account_id}")]
    UniquenessViolation {
        /// Tenant where the collision happened
        account_id: AccountId,
        /// Colliding slug
        slug: String,
    },

    /// No row matched
    #[error("not found: {entity}")]
    NotFound {
        /// What was looked up
        entity: EntityRef,
    },

    /// Persistence failure (I/O, serialization, injected fault)
    #[error("storage error: {message}")]
    Storage {
        /// Failure description
        message: String,
    },
}

impl StoreError {
    /// Build a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::Validation {
            message: message.into(),
        }
    }

    /// Build a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        StoreError::Storage {
            message: message.into(),
        }
    }

    /// Build a storage error for an encode/decode failure
    pub fn serialization(message: impl Into<String>) -> Self {
        StoreError::Storage {
            message: format!("serialization: {}", message.into()),
        }
    }

    /// Build a not-found error
    pub fn not_found(entity: EntityRef) -> Self {
        StoreError::NotFound { entity }
    }

    /// Build a uniqueness violation
    pub fn duplicate_slug(account_id: AccountId, slug: impl Into<String>) -> Self {
        StoreError::UniquenessViolation {
            account_id,
            slug: slug.into(),
        }
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Validation { .. } => ErrorKind::Validation,
            StoreError::UniquenessViolation { .. } => ErrorKind::UniquenessViolation,
            StoreError::NotFound { .. } => ErrorKind::NotFound,
            StoreError::Storage { .. } => ErrorKind::Storage,
        }
    }

    /// True for `NotFound`
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DashboardId;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(StoreError::validation("x").kind(), ErrorKind::Validation);
        assert_eq!(
            StoreError::duplicate_slug(AccountId(1), "a").kind(),
            ErrorKind::UniquenessViolation
        );
        assert_eq!(
            StoreError::not_found(EntityRef::id(None, DashboardId(1))).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(StoreError::storage("disk").kind(), ErrorKind::Storage);
        assert_eq!(StoreError::serialization("bad").kind(), ErrorKind::Storage);
    }

    #[test]
    fn test_messages() {
        let e = StoreError::duplicate_slug(AccountId(1), "test-dash-23");
        assert_eq!(
            e.to_string(),
            "a dashboard with slug 'test-dash-23' already exists in account 1"
        );

        let e = StoreError::not_found(EntityRef::slug(AccountId(3), "missing"));
        assert!(e.is_not_found());
        assert_eq!(e.to_string(), "not found: dashboard://3/missing");
    }

    #[test]
    fn test_io_error_is_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let e: StoreError = io.into();
        assert_eq!(e.kind(), ErrorKind::Storage);
    }
}
