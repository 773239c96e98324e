//! Persisted row types.

use chrono::{DateTime, Utc};
use dashstore_core::{AccountId, DashboardId, UserId};
use serde::{Deserialize, Serialize};

/// One row of the dashboard table.
///
/// `data` holds the full payload document in its encoded form
/// (see [`crate::codec`]); the store never interprets it beyond decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardRow {
    /// Identity
    pub id: DashboardId,
    /// Owning tenant
    pub account_id: AccountId,
    /// Tenant-unique slug
    pub slug: String,
    /// Title, kept unencoded for search
    pub title: String,
    /// Encoded payload document
    pub data: Vec<u8>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last save
    pub updated_at: DateTime<Utc>,
}

/// A single change to the tables.
///
/// Transactions accumulate mutations in a write set; commit applies them in
/// order, and the WAL records them verbatim for replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    /// Insert or replace a dashboard row (keyed by `row.id`)
    PutDashboard(DashboardRow),
    /// Remove every tag association of a dashboard
    ClearTags {
        /// Dashboard whose tags are cleared
        dashboard_id: DashboardId,
    },
    /// Associate one tag with a dashboard
    InsertTag {
        /// Tagged dashboard
        dashboard_id: DashboardId,
        /// Tag text
        tag: String,
    },
    /// Star a dashboard for a user (no-op if present)
    InsertStar {
        /// Starred dashboard
        dashboard_id: DashboardId,
        /// Starring user
        user_id: UserId,
    },
    /// Remove a star (no-op if absent)
    DeleteStar {
        /// Dashboard
        dashboard_id: DashboardId,
        /// User
        user_id: UserId,
    },
}

impl Mutation {
    /// Dashboard touched by this mutation
    pub fn dashboard_id(&self) -> DashboardId {
        match self {
            Mutation::PutDashboard(row) => row.id,
            Mutation::ClearTags { dashboard_id }
            | Mutation::InsertTag { dashboard_id, .. }
            | Mutation::InsertStar { dashboard_id, .. }
            | Mutation::DeleteStar { dashboard_id, .. } => *dashboard_id,
        }
    }
}
