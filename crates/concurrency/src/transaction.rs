//! Transaction context
//!
//! A `TransactionContext` is the staged write set of one unit of work.
//!
//! # Design
//!
//! - Reads see the committed snapshot overlaid with the transaction's own
//!   staged writes (read-your-writes).
//! - Writes only append to the write set. Nothing touches the tables until
//!   the engine commits, so dropping the context is a complete rollback.
//! - Every transaction is bound to one tenant. Staging a row for another
//!   tenant is rejected immediately.

use dashstore_core::{AccountId, DashboardId, StoreError, StoreResult, UserId};
use dashstore_storage::{DashboardRow, Mutation, Store, TableSet};
use rustc_hash::FxHashMap;

/// Staged writes of one transaction over a committed snapshot
pub struct TransactionContext<'a> {
    account_id: AccountId,
    snapshot: &'a TableSet,
    store: &'a Store,
    writes: Vec<Mutation>,
    staged: FxHashMap<DashboardId, DashboardRow>,
    staged_tags: FxHashMap<DashboardId, Vec<String>>,
}

impl<'a> TransactionContext<'a> {
    /// Begin a transaction for `account_id` over `snapshot`
    ///
    /// `store` is only used to allocate identities.
    pub fn new(account_id: AccountId, snapshot: &'a TableSet, store: &'a Store) -> Self {
        TransactionContext {
            account_id,
            snapshot,
            store,
            writes: Vec::new(),
            staged: FxHashMap::default(),
            staged_tags: FxHashMap::default(),
        }
    }

    /// Tenant this transaction is bound to
    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Take a fresh dashboard identity
    ///
    /// The id is consumed even if the transaction rolls back.
    pub fn allocate_dashboard_id(&self) -> DashboardId {
        self.store.allocate_dashboard_id()
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Dashboard by identity, including rows staged by this transaction
    pub fn get_dashboard(&self, id: DashboardId) -> Option<&DashboardRow> {
        self.staged
            .get(&id)
            .or_else(|| self.snapshot.dashboard(id))
    }

    /// Dashboard id holding `slug` in this transaction's tenant
    pub fn dashboard_id_by_slug(&self, slug: &str) -> Option<DashboardId> {
        let mut staged: Vec<&DashboardRow> = self
            .staged
            .values()
            .filter(|row| row.account_id == self.account_id && row.slug == slug)
            .collect();
        staged.sort_by_key(|row| row.id);
        if let Some(row) = staged.first() {
            return Some(row.id);
        }

        // A committed holder that this transaction re-slugged no longer counts
        self.snapshot
            .dashboard_id_by_slug(self.account_id, slug)
            .filter(|id| !self.staged.contains_key(id))
    }

    /// Tags of a dashboard as they will be after commit, sorted
    pub fn tags_of(&self, id: DashboardId) -> Vec<String> {
        match self.staged_tags.get(&id) {
            Some(tags) => {
                let mut tags = tags.clone();
                tags.sort();
                tags.dedup();
                tags
            }
            None => self.snapshot.tags_of(id),
        }
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Stage an insert or replacement of a dashboard row
    pub fn put_dashboard(&mut self, row: DashboardRow) -> StoreResult<()> {
        if row.account_id != self.account_id {
            return Err(StoreError::validation(format!(
                "transaction for account {} cannot write dashboard of account {}",
                self.account_id, row.account_id
            )));
        }
        self.staged.insert(row.id, row.clone());
        self.writes.push(Mutation::PutDashboard(row));
        Ok(())
    }

    /// Stage removal of every tag of a dashboard
    pub fn clear_tags(&mut self, dashboard_id: DashboardId) {
        self.staged_tags.insert(dashboard_id, Vec::new());
        self.writes.push(Mutation::ClearTags { dashboard_id });
    }

    /// Stage one tag association
    pub fn insert_tag(&mut self, dashboard_id: DashboardId, tag: impl Into<String>) {
        let tag = tag.into();
        let current = self.tags_of(dashboard_id);
        self.staged_tags
            .entry(dashboard_id)
            .or_insert(current)
            .push(tag.clone());
        self.writes.push(Mutation::InsertTag { dashboard_id, tag });
    }

    /// Stage a star
    pub fn insert_star(&mut self, dashboard_id: DashboardId, user_id: UserId) {
        self.writes.push(Mutation::InsertStar {
            dashboard_id,
            user_id,
        });
    }

    /// Stage removal of a star
    pub fn delete_star(&mut self, dashboard_id: DashboardId, user_id: UserId) {
        self.writes.push(Mutation::DeleteStar {
            dashboard_id,
            user_id,
        });
    }

    // ========================================================================
    // Write set
    // ========================================================================

    /// Staged mutations in application order
    pub fn writes(&self) -> &[Mutation] {
        &self.writes
    }

    /// Whether nothing was staged
    pub fn is_read_only(&self) -> bool {
        self.writes.is_empty()
    }

    /// Consume the context, returning the write set
    pub fn into_writes(self) -> Vec<Mutation> {
        self.writes
    }
}

impl std::fmt::Debug for TransactionContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionContext")
            .field("account_id", &self.account_id)
            .field("writes", &self.writes.len())
            .finish()
    }
}
