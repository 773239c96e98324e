//! Identifier and record types shared across dashstore crates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::payload::DashboardPayload;

/// Tenant identifier. Every record and query is scoped by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub i64);

/// Store-assigned dashboard identity. Never 0 once persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DashboardId(pub i64);

/// Identifier of the user starring dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl AccountId {
    /// Raw integer value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl DashboardId {
    /// Raw integer value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl UserId {
    /// Raw integer value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for DashboardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AccountId {
    fn from(v: i64) -> Self {
        AccountId(v)
    }
}

impl From<i64> for DashboardId {
    fn from(v: i64) -> Self {
        DashboardId(v)
    }
}

impl From<i64> for UserId {
    fn from(v: i64) -> Self {
        UserId(v)
    }
}

/// Typed reference to a record, used to report what could not be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityRef {
    /// Dashboard addressed by tenant + slug
    DashboardSlug {
        /// Owning tenant
        account_id: AccountId,
        /// Slug that was looked up
        slug: String,
    },
    /// Dashboard addressed by identity, optionally within a tenant
    DashboardId {
        /// Tenant scope of the lookup, if any
        account_id: Option<AccountId>,
        /// Identity that was looked up
        id: DashboardId,
    },
}

impl EntityRef {
    /// Reference a dashboard by tenant and slug
    pub fn slug(account_id: AccountId, slug: impl Into<String>) -> Self {
        EntityRef::DashboardSlug {
            account_id,
            slug: slug.into(),
        }
    }

    /// Reference a dashboard by identity
    pub fn id(account_id: Option<AccountId>, id: DashboardId) -> Self {
        EntityRef::DashboardId { account_id, id }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::DashboardSlug { account_id, slug } => {
                write!(f, "dashboard://{}/{}", account_id, slug)
            }
            EntityRef::DashboardId {
                account_id: Some(account_id),
                id,
            } => write!(f, "dashboard://{}/#{}", account_id, id),
            EntityRef::DashboardId {
                account_id: None,
                id,
            } => write!(f, "dashboard://#{}", id),
        }
    }
}

/// A persisted dashboard as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// Store-assigned identity
    pub id: DashboardId,
    /// Owning tenant
    pub account_id: AccountId,
    /// Tenant-unique slug derived from the title
    pub slug: String,
    /// Title as saved
    pub title: String,
    /// Full document, with `id` filled in
    pub payload: DashboardPayload,
    /// Tags currently associated with the dashboard, sorted
    pub tags: Vec<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last successful save
    pub updated_at: DateTime<Utc>,
}

/// Search result projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Dashboard identity
    pub id: DashboardId,
    /// Dashboard title
    pub title: String,
    /// Dashboard slug
    pub slug: String,
    /// Full resolved tag set, sorted
    pub tags: Vec<String>,
    /// Whether the requesting user starred it (false when no user was given)
    pub is_starred: bool,
}

/// One row of the distinct-tag listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    /// Tag text
    pub term: String,
    /// Number of the tenant's dashboards carrying the tag
    pub count: usize,
}
