//! Locked table storage with version and id counters
//!
//! # Design
//!
//! - One `parking_lot::RwLock<TableSet>` guards all tables, so a reader holding
//!   the read guard sees dashboards, tags and stars from the same commit.
//! - Writers apply a whole write set while holding the write guard; no
//!   reader can observe a partially applied batch.
//! - `version` counts commits; `next_id` hands out dashboard identities.
//!   Ids are taken when a transaction stages a new row, so an aborted
//!   transaction leaves a gap rather than reusing the id.
//!
//! # Example
//!
//! ```ignore
//! use dashstore_storage::Store;
//!
//! let store = Store::new();
//! let id = store.allocate_dashboard_id();
//! let tables = store.read();
//! assert!(tables.dashboard(id).is_none());
//! ```

use dashstore_core::DashboardId;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use crate::rows::Mutation;
use crate::tables::TableSet;

/// Locked tables plus commit version and id allocator
pub struct Store {
    tables: RwLock<TableSet>,
    version: AtomicU64,
    next_id: AtomicI64,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(TableSet::new()),
            version: AtomicU64::new(0),
            next_id: AtomicI64::new(1),
        }
    }

    /// Current commit version
    #[inline]
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Increment version and return new value
    #[inline]
    pub fn next_version(&self) -> u64 {
        self.version.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Set version (used during recovery)
    pub fn set_version(&self, version: u64) {
        self.version.store(version, Ordering::Release);
    }

    /// Hand out a fresh dashboard identity
    pub fn allocate_dashboard_id(&self) -> DashboardId {
        DashboardId(self.next_id.fetch_add(1, Ordering::AcqRel))
    }

    /// Make sure future ids are greater than `id` (used during recovery)
    pub fn observe_dashboard_id(&self, id: DashboardId) {
        self.next_id.fetch_max(id.0 + 1, Ordering::AcqRel);
    }

    /// Acquire a consistent read view of all tables
    pub fn read(&self) -> RwLockReadGuard<'_, TableSet> {
        self.tables.read()
    }

    /// Acquire exclusive access for a commit
    pub fn write(&self) -> RwLockWriteGuard<'_, TableSet> {
        self.tables.write()
    }

    /// Apply a batch under the write lock and bump the version
    ///
    /// Used by recovery and by callers that have no validation step.
    pub fn apply_batch(&self, mutations: &[Mutation]) -> u64 {
        let mut tables = self.tables.write();
        tables.apply_batch(mutations);
        for m in mutations {
            if let Mutation::PutDashboard(row) = m {
                self.observe_dashboard_id(row.id);
            }
        }
        self.next_version()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tables = self.tables.read();
        f.debug_struct("Store")
            .field("version", &self.version())
            .field("dashboards", &tables.dashboard_count())
            .field("tags", &tables.tag_row_count())
            .field("stars", &tables.star_row_count())
            .finish()
    }
}
