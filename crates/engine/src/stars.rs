//! StarStore: the user ↔ dashboard favorite relation
//!
//! Each star is a single-row upsert committed on its own; it takes the table
//! write lock but no tenant writer lock. Starring does not check the
//! dashboard's tenant against the user.

use dashstore_core::{DashboardId, StoreResult, UserId};
use dashstore_storage::Mutation;
use std::sync::Arc;
use tracing::debug;

use crate::database::Database;

/// Star relation facade
#[derive(Clone)]
pub struct StarStore {
    db: Arc<Database>,
}

impl StarStore {
    /// Create new StarStore instance
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Get the underlying database reference
    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }

    /// Star `dashboard_id` for `user_id`
    ///
    /// Starring twice is a no-op. Fails with `NotFound` if the dashboard
    /// does not exist.
    pub fn star(&self, dashboard_id: DashboardId, user_id: UserId) -> StoreResult<()> {
        let version = self.db.apply_single(Mutation::InsertStar {
            dashboard_id,
            user_id,
        })?;
        debug!(dashboard_id = %dashboard_id, user_id = %user_id, version, "Starred dashboard");
        Ok(())
    }

    /// Remove a star; removing an absent star is a no-op
    pub fn unstar(&self, dashboard_id: DashboardId, user_id: UserId) -> StoreResult<()> {
        let version = self.db.apply_single(Mutation::DeleteStar {
            dashboard_id,
            user_id,
        })?;
        debug!(dashboard_id = %dashboard_id, user_id = %user_id, version, "Unstarred dashboard");
        Ok(())
    }

    /// Whether `user_id` starred `dashboard_id`
    pub fn is_starred_by(&self, dashboard_id: DashboardId, user_id: UserId) -> bool {
        self.db.snapshot().is_starred_by(dashboard_id, user_id)
    }

    /// Dashboards starred by `user_id`, in id order
    pub fn starred_by(&self, user_id: UserId) -> Vec<DashboardId> {
        self.db.snapshot().starred_by(user_id)
    }
}
