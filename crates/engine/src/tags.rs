//! TagIndex: tag associations derived from dashboard payloads
//!
//! Stateless facade over [`Database`]. Tags are only ever written as part of
//! a save transaction, as a full replacement of the dashboard's tag set.

use dashstore_concurrency::TransactionContext;
use dashstore_core::{AccountId, DashboardId, StoreError, StoreResult, TagCount};
use std::sync::Arc;

use crate::database::{Database, FaultPoint};

/// Tag association facade
#[derive(Clone)]
pub struct TagIndex {
    db: Arc<Database>,
}

impl TagIndex {
    /// Create new TagIndex instance
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Get the underlying database reference
    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }

    /// Replace every tag of `dashboard_id` within `txn`
    ///
    /// Delete-then-insert. `tags` is expected to be normalized already;
    /// duplicates collapse in the index anyway.
    pub fn replace_tags(
        &self,
        txn: &mut TransactionContext<'_>,
        dashboard_id: DashboardId,
        tags: &[String],
    ) -> StoreResult<()> {
        txn.clear_tags(dashboard_id);
        for tag in tags {
            if self.db.take_fault(FaultPoint::TagWrite) {
                return Err(StoreError::storage(format!(
                    "injected fault: tag write '{}' for dashboard {}",
                    tag, dashboard_id
                )));
            }
            txn.insert_tag(dashboard_id, tag.as_str());
        }
        Ok(())
    }

    /// Distinct tags of a tenant with usage counts, ordered by tag
    pub fn list_distinct_tags(&self, account_id: AccountId) -> Vec<TagCount> {
        self.db.snapshot().tag_counts(account_id)
    }

    /// Committed tags of one dashboard, sorted
    pub fn tags_for(&self, dashboard_id: DashboardId) -> Vec<String> {
        self.db.snapshot().tags_of(dashboard_id)
    }
}
