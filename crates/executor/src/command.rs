//! Commands accepted by the executor.

use dashstore_core::{AccountId, DashboardId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One operation against the store
///
/// Commands are plain data and serialize with a `command` tag, so they can be
/// logged or shipped over a wire unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Command {
    // ========================================================================
    // Dashboards
    // ========================================================================
    /// Create or update a dashboard from a raw document
    SaveDashboard {
        /// Owning tenant
        account_id: AccountId,
        /// Keyed document with reserved `id`, `title`, `tags`
        dashboard: Value,
    },

    /// Fetch a dashboard by slug
    GetDashboard {
        /// Tenant
        account_id: AccountId,
        /// Exact slug
        slug: String,
    },

    /// Fetch a dashboard by identity
    GetDashboardById {
        /// Tenant
        account_id: AccountId,
        /// Identity
        id: DashboardId,
    },

    // ========================================================================
    // Search / Tags
    // ========================================================================
    /// Compound tenant-scoped search
    SearchDashboards {
        /// Tenant
        account_id: AccountId,
        /// Title pattern
        #[serde(default)]
        title: Option<String>,
        /// Exact tag
        #[serde(default)]
        tag: Option<String>,
        /// Requesting user
        #[serde(default)]
        user_id: Option<UserId>,
        /// Keep only dashboards starred by `user_id`
        #[serde(default)]
        is_starred: bool,
        /// Hit cap
        #[serde(default)]
        limit: Option<usize>,
    },

    /// Distinct tags of a tenant with counts
    GetDashboardTags {
        /// Tenant
        account_id: AccountId,
    },

    // ========================================================================
    // Stars
    // ========================================================================
    /// Star a dashboard for a user
    StarDashboard {
        /// Dashboard
        dashboard_id: DashboardId,
        /// User
        user_id: UserId,
    },

    /// Remove a star
    UnstarDashboard {
        /// Dashboard
        dashboard_id: DashboardId,
        /// User
        user_id: UserId,
    },

    /// Whether a user starred a dashboard
    IsStarred {
        /// Dashboard
        dashboard_id: DashboardId,
        /// User
        user_id: UserId,
    },
}

impl Command {
    /// Variant name, used in logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Command::SaveDashboard { .. } => "SaveDashboard",
            Command::GetDashboard { .. } => "GetDashboard",
            Command::GetDashboardById { .. } => "GetDashboardById",
            Command::SearchDashboards { .. } => "SearchDashboards",
            Command::GetDashboardTags { .. } => "GetDashboardTags",
            Command::StarDashboard { .. } => "StarDashboard",
            Command::UnstarDashboard { .. } => "UnstarDashboard",
            Command::IsStarred { .. } => "IsStarred",
        }
    }

    /// Whether the command can change state
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::SaveDashboard { .. }
                | Command::StarDashboard { .. }
                | Command::UnstarDashboard { .. }
        )
    }
}
