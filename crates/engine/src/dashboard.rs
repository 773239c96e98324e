//! DashboardStore: tenant-scoped dashboard records
//!
//! ## Design: STATELESS FACADE
//!
//! DashboardStore holds ONLY `Arc<Database>`. Rows live in the dashboard
//! table with the payload document encoded as MessagePack.
//!
//! ## Save
//!
//! Input is validated before any transaction starts (title, slug, limits).
//! The transaction then:
//! 1. resolves the identity (new id, or the existing row of the same tenant),
//! 2. checks `(account_id, slug)` against every other dashboard,
//! 3. writes the row,
//! 4. replaces the tag associations through [`TagIndex`].
//!
//! A failure in any step discards all of them.

use chrono::Utc;
use dashstore_core::{
    derive_slug, AccountId, Dashboard, DashboardId, DashboardPayload, EntityRef, StoreError,
    StoreResult,
};
use dashstore_storage::{decode_document, encode_document, DashboardRow, TableSet};
use std::sync::Arc;
use tracing::debug;

use crate::database::Database;
use crate::tags::TagIndex;

/// Dashboard record facade
#[derive(Clone)]
pub struct DashboardStore {
    db: Arc<Database>,
}

impl DashboardStore {
    /// Create new DashboardStore instance
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Get the underlying database reference
    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Create or update a dashboard
    ///
    /// A payload without `id` creates a new dashboard. A payload whose `id`
    /// names a dashboard of `account_id` updates it; `created_at` is kept and
    /// the slug is derived again from the new title.
    ///
    /// # Errors
    ///
    /// * `Validation` - empty title, title with no slug characters, limits exceeded
    /// * `UniquenessViolation` - another dashboard of the tenant has the slug
    /// * `NotFound` - `id` does not name a dashboard of this tenant
    /// * `Storage` - WAL or encoding failure
    pub fn save(&self, account_id: AccountId, payload: DashboardPayload) -> StoreResult<Dashboard> {
        let (slug, tags) = self.validate(&payload)?;
        let tag_index = TagIndex::new(self.db.clone());

        let dashboard = self.db.transaction(account_id, |txn| {
            let now = Utc::now();
            let (id, created_at) = match payload.id {
                Some(id) => {
                    let existing = txn
                        .get_dashboard(id)
                        .filter(|row| row.account_id == account_id)
                        .ok_or_else(|| {
                            StoreError::not_found(EntityRef::id(Some(account_id), id))
                        })?;
                    (id, existing.created_at)
                }
                None => (txn.allocate_dashboard_id(), now),
            };

            if let Some(holder) = txn.dashboard_id_by_slug(&slug) {
                if holder != id {
                    return Err(StoreError::duplicate_slug(account_id, slug.clone()));
                }
            }

            let mut stored = payload;
            stored.id = Some(id);
            let data = encode_document(&stored.to_document())?;

            txn.put_dashboard(DashboardRow {
                id,
                account_id,
                slug: slug.clone(),
                title: stored.title.clone(),
                data,
                created_at,
                updated_at: now,
            })?;
            tag_index.replace_tags(txn, id, &tags)?;

            Ok(Dashboard {
                id,
                account_id,
                slug: slug.clone(),
                title: stored.title.clone(),
                tags: txn.tags_of(id),
                payload: stored,
                created_at,
                updated_at: now,
            })
        })?;

        debug!(
            account_id = %account_id,
            dashboard_id = %dashboard.id,
            slug = %dashboard.slug,
            tags = dashboard.tags.len(),
            "Saved dashboard"
        );
        Ok(dashboard)
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Dashboard of `account_id` with exactly `slug`
    pub fn get(&self, account_id: AccountId, slug: &str) -> StoreResult<Dashboard> {
        let tables = self.db.snapshot();
        let row = tables
            .dashboard_id_by_slug(account_id, slug)
            .and_then(|id| tables.dashboard(id))
            .ok_or_else(|| StoreError::not_found(EntityRef::slug(account_id, slug)))?;
        to_dashboard(&tables, row)
    }

    /// Dashboard of `account_id` with identity `id`
    pub fn get_by_id(&self, account_id: AccountId, id: DashboardId) -> StoreResult<Dashboard> {
        let tables = self.db.snapshot();
        let row = tables
            .dashboard(id)
            .filter(|row| row.account_id == account_id)
            .ok_or_else(|| StoreError::not_found(EntityRef::id(Some(account_id), id)))?;
        to_dashboard(&tables, row)
    }

    /// Number of dashboards owned by `account_id`
    pub fn count(&self, account_id: AccountId) -> usize {
        self.db.snapshot().account_dashboard_count(account_id)
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check the payload against the configured limits, returning the derived
    /// slug and the normalized tags
    fn validate(&self, payload: &DashboardPayload) -> StoreResult<(String, Vec<String>)> {
        let limits = &self.db.config().limits;

        if payload.title.trim().is_empty() {
            return Err(StoreError::validation("dashboard title cannot be empty"));
        }
        let title_len = payload.title.chars().count();
        if title_len > limits.max_title_len {
            return Err(StoreError::validation(format!(
                "title is {} characters, limit is {}",
                title_len, limits.max_title_len
            )));
        }

        let slug = derive_slug(&payload.title);
        if slug.is_empty() {
            return Err(StoreError::validation(format!(
                "title '{}' contains no characters usable in a slug",
                payload.title
            )));
        }

        let tags = payload.normalized_tags();
        if tags.len() > limits.max_tags {
            return Err(StoreError::validation(format!(
                "{} tags given, limit is {}",
                tags.len(),
                limits.max_tags
            )));
        }
        if let Some(tag) = tags
            .iter()
            .find(|t| t.chars().count() > limits.max_tag_len)
        {
            return Err(StoreError::validation(format!(
                "tag '{}' exceeds {} characters",
                tag, limits.max_tag_len
            )));
        }

        let size = payload.size_bytes();
        if size > limits.max_payload_bytes {
            return Err(StoreError::validation(format!(
                "payload is {} bytes, limit is {}",
                size, limits.max_payload_bytes
            )));
        }

        Ok((slug, tags))
    }
}

fn to_dashboard(tables: &TableSet, row: &DashboardRow) -> StoreResult<Dashboard> {
    let payload = DashboardPayload::from_document(decode_document(&row.data)?)?;
    Ok(Dashboard {
        id: row.id,
        account_id: row.account_id,
        slug: row.slug.clone(),
        title: row.title.clone(),
        payload,
        tags: tables.tags_of(row.id),
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}
