//! Database: the shared handle every facade works through
//!
//! # Design
//!
//! - Owns the [`Store`] (tables + counters), the optional [`Wal`], the
//!   configuration and one writer lock per tenant.
//! - `transaction` is closure-scoped. The closure stages writes against a
//!   consistent snapshot; the write set is committed only when it returns
//!   `Ok`, and is dropped on every other exit path.
//! - Commit order: validate under the table write lock, append to the WAL,
//!   apply to the tables, bump the version. A failure at any step leaves the
//!   tables untouched.
//! - Facades (`DashboardStore`, `TagIndex`, `StarStore`, `DashboardSearch`)
//!   hold only `Arc<Database>`.

use dashmap::DashMap;
use dashstore_concurrency::{validate_write_set, TransactionContext};
use dashstore_core::{AccountId, StoreError, StoreResult};
use dashstore_durability::{Wal, WalEntry};
use dashstore_storage::{Mutation, Store, TableSet};
use parking_lot::{Mutex, RwLockReadGuard};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::{StoreConfig, CONFIG_FILE_NAME};

/// File name of the write-ahead log inside the database directory
pub const WAL_FILE_NAME: &str = "wal.log";

/// Named points of the commit path where a failure can be injected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultPoint {
    /// Fail while a save stages its tag associations
    TagWrite,
    /// Fail the WAL append of the next commit
    WalAppend,
}

/// Embedded dashboard database
pub struct Database {
    store: Store,
    wal: Option<Wal>,
    path: Option<PathBuf>,
    config: StoreConfig,
    /// Per-tenant writer locks, present only while a writer holds or awaits one
    writer_locks: DashMap<AccountId, Arc<Mutex<()>>>,
    faults: Mutex<Vec<FaultPoint>>,
}

impl Database {
    // ========================================================================
    // Opening
    // ========================================================================

    /// Open (or create) an on-disk database in `dir`
    ///
    /// Reads `dashstore.toml` from `dir` when present.
    pub fn open(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref();
        let config_path = dir.join(CONFIG_FILE_NAME);
        let config = if config_path.exists() {
            StoreConfig::from_file(&config_path)?
        } else {
            StoreConfig::default()
        };
        Self::open_with_config(dir, config)
    }

    /// Open (or create) an on-disk database with an explicit configuration
    pub fn open_with_config(dir: impl AsRef<Path>, config: StoreConfig) -> StoreResult<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|e| {
            StoreError::storage(format!("cannot create {}: {}", dir.display(), e))
        })?;

        let (wal, read) = Wal::open(dir.join(WAL_FILE_NAME), config.durability)?;
        let store = Store::new();
        let mut last_version = 0;
        for entry in &read.entries {
            store.apply_batch(&entry.mutations);
            last_version = last_version.max(entry.version);
        }
        store.set_version(last_version);

        info!(
            path = %dir.display(),
            entries = read.entries.len(),
            version = last_version,
            dashboards = store.read().dashboard_count(),
            truncated = read.corruption.is_some(),
            "Opened database"
        );

        Ok(Self::from_parts(store, Some(wal), Some(dir.to_path_buf()), config))
    }

    /// In-memory database; nothing is written to disk
    pub fn ephemeral() -> Self {
        Self::ephemeral_with_config(StoreConfig::default())
    }

    /// In-memory database with an explicit configuration
    pub fn ephemeral_with_config(config: StoreConfig) -> Self {
        Self::from_parts(Store::new(), None, None, config)
    }

    fn from_parts(
        store: Store,
        wal: Option<Wal>,
        path: Option<PathBuf>,
        config: StoreConfig,
    ) -> Self {
        Database {
            store,
            wal,
            path,
            config,
            writer_locks: DashMap::new(),
            faults: Mutex::new(Vec::new()),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Active configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Directory of an on-disk database
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether the database lives only in memory
    pub fn is_ephemeral(&self) -> bool {
        self.wal.is_none()
    }

    /// Underlying storage
    pub fn storage(&self) -> &Store {
        &self.store
    }

    /// Number of committed write sets
    pub fn version(&self) -> u64 {
        self.store.version()
    }

    /// Consistent read view of all tables
    ///
    /// Hold the guard only for the duration of one read operation; commits
    /// wait for it.
    pub fn snapshot(&self) -> RwLockReadGuard<'_, TableSet> {
        self.store.read()
    }

    /// Force buffered WAL records to disk
    pub fn flush(&self) -> StoreResult<()> {
        match &self.wal {
            Some(wal) => wal.sync(),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Transactions
    // ========================================================================

    /// Run `f` as one atomic unit of work for `account_id`
    ///
    /// Writers of the same tenant are serialized. Everything `f` stages is
    /// committed together when it returns `Ok`; on `Err` nothing is.
    ///
    /// # Example
    ///
    /// ```ignore
    /// db.transaction(account_id, |txn| {
    ///     let id = txn.allocate_dashboard_id();
    ///     txn.put_dashboard(row)?;
    ///     Ok(id)
    /// })?;
    /// ```
    pub fn transaction<F, T>(&self, account_id: AccountId, f: F) -> StoreResult<T>
    where
        F: FnOnce(&mut TransactionContext<'_>) -> StoreResult<T>,
    {
        let writer = self.writer_lock(account_id);
        let result = {
            let _guard = writer.lock();
            self.run_transaction(account_id, f)
        };
        drop(writer);
        self.release_writer_lock(account_id);
        result
    }

    fn run_transaction<F, T>(&self, account_id: AccountId, f: F) -> StoreResult<T>
    where
        F: FnOnce(&mut TransactionContext<'_>) -> StoreResult<T>,
    {
        let (value, writes) = {
            let snapshot = self.store.read();
            let mut txn = TransactionContext::new(account_id, &snapshot, &self.store);
            match f(&mut txn) {
                Ok(value) => (value, txn.into_writes()),
                Err(e) => {
                    warn!(
                        account_id = %account_id,
                        staged = txn.writes().len(),
                        error = %e,
                        "Transaction rolled back"
                    );
                    return Err(e);
                }
            }
        };

        if writes.is_empty() {
            return Ok(value);
        }
        self.commit(Some(account_id), writes)?;
        Ok(value)
    }

    /// Commit a single mutation outside any tenant writer lock
    ///
    /// Used for operations that touch one row and never race with the
    /// uniqueness checks of a save (stars).
    pub fn apply_single(&self, mutation: Mutation) -> StoreResult<u64> {
        self.commit(None, vec![mutation])
    }

    fn commit(&self, account_id: Option<AccountId>, writes: Vec<Mutation>) -> StoreResult<u64> {
        let mut tables = self.store.write();

        if let Err(e) = validate_write_set(&writes, &tables).into_result() {
            warn!(account_id = ?account_id, error = %e, "Commit rejected by validation");
            return Err(e);
        }

        let entry = WalEntry {
            version: self.store.version() + 1,
            mutations: writes,
        };

        if self.take_fault(FaultPoint::WalAppend) {
            warn!(account_id = ?account_id, "Injected WAL append failure");
            return Err(StoreError::storage("injected fault: WAL append"));
        }
        if let Some(wal) = &self.wal {
            wal.append(&entry)?;
        }

        tables.apply_batch(&entry.mutations);
        let version = self.store.next_version();
        debug!(
            account_id = ?account_id,
            version,
            mutations = entry.mutations.len(),
            "Committed"
        );
        Ok(version)
    }

    fn writer_lock(&self, account_id: AccountId) -> Arc<Mutex<()>> {
        self.writer_locks
            .entry(account_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    // Drop the tenant's lock once no other writer holds or waits on it
    fn release_writer_lock(&self, account_id: AccountId) {
        self.writer_locks
            .remove_if(&account_id, |_, lock| Arc::strong_count(lock) == 1);
    }

    // ========================================================================
    // Fault injection
    // ========================================================================

    /// Arm a one-shot failure at `point`
    pub fn inject_fault(&self, point: FaultPoint) {
        self.faults.lock().push(point);
    }

    /// Disarm every pending fault
    pub fn clear_faults(&self) {
        self.faults.lock().clear();
    }

    /// Consume an armed fault at `point`, returning whether one was armed
    pub(crate) fn take_fault(&self, point: FaultPoint) -> bool {
        let mut faults = self.faults.lock();
        match faults.iter().position(|p| *p == point) {
            Some(i) => {
                faults.remove(i);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("path", &self.path)
            .field("version", &self.store.version())
            .field("durability", &self.config.durability)
            .finish()
    }
}
