//! Command and query records.
//!
//! Each record carries its inputs plus a `result` field that the typed
//! executor methods fill in on success. On failure `result` is left as it was.

use dashstore_core::{AccountId, Dashboard, DashboardId, SearchHit, TagCount, UserId};
use serde::Serialize;
use serde_json::Value;

/// Create or update a dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveDashboardCommand {
    /// Owning tenant
    pub account_id: AccountId,
    /// Keyed document with reserved `id`, `title`, `tags`
    pub dashboard: Value,
    /// Saved dashboard
    pub result: Option<Dashboard>,
}

impl SaveDashboardCommand {
    /// New command with an empty result
    pub fn new(account_id: AccountId, dashboard: Value) -> Self {
        SaveDashboardCommand {
            account_id,
            dashboard,
            result: None,
        }
    }
}

/// Fetch a dashboard by slug
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetDashboardQuery {
    /// Exact slug
    pub slug: String,
    /// Tenant
    pub account_id: AccountId,
    /// Found dashboard
    pub result: Option<Dashboard>,
}

impl GetDashboardQuery {
    /// New query with an empty result
    pub fn new(account_id: AccountId, slug: impl Into<String>) -> Self {
        GetDashboardQuery {
            slug: slug.into(),
            account_id,
            result: None,
        }
    }
}

/// Fetch a dashboard by identity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetDashboardByIdQuery {
    /// Identity
    pub id: DashboardId,
    /// Tenant
    pub account_id: AccountId,
    /// Found dashboard
    pub result: Option<Dashboard>,
}

impl GetDashboardByIdQuery {
    /// New query with an empty result
    pub fn new(account_id: AccountId, id: DashboardId) -> Self {
        GetDashboardByIdQuery {
            id,
            account_id,
            result: None,
        }
    }
}

/// Compound tenant-scoped search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchDashboardsQuery {
    /// Title pattern (`%` / `*` wildcards, case-insensitive contains)
    pub title: Option<String>,
    /// Exact tag
    pub tag: Option<String>,
    /// Tenant
    pub account_id: AccountId,
    /// Requesting user
    pub user_id: Option<UserId>,
    /// Keep only dashboards starred by `user_id`
    pub is_starred: bool,
    /// Hit cap, configured default when `None`
    pub limit: Option<usize>,
    /// Hits ordered by title, then id
    pub result: Vec<SearchHit>,
}

impl SearchDashboardsQuery {
    /// Query matching every dashboard of `account_id`
    pub fn new(account_id: AccountId) -> Self {
        SearchDashboardsQuery {
            title: None,
            tag: None,
            account_id,
            user_id: None,
            is_starred: false,
            limit: None,
            result: Vec::new(),
        }
    }
}

/// Star a dashboard for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarDashboardCommand {
    /// Dashboard
    pub dashboard_id: DashboardId,
    /// User
    pub user_id: UserId,
}

/// Remove a user's star
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnstarDashboardCommand {
    /// Dashboard
    pub dashboard_id: DashboardId,
    /// User
    pub user_id: UserId,
}

/// Distinct tags of a tenant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetDashboardTagsQuery {
    /// Tenant
    pub account_id: AccountId,
    /// Tags with counts, ordered by tag
    pub result: Vec<TagCount>,
}

impl GetDashboardTagsQuery {
    /// New query with an empty result
    pub fn new(account_id: AccountId) -> Self {
        GetDashboardTagsQuery {
            account_id,
            result: Vec::new(),
        }
    }
}
