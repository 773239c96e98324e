//! Write-set validation at commit time
//!
//! Rules:
//! - After the write set is applied, `(account_id, slug)` must map to at most
//!   one dashboard
//! - A dashboard never changes owner
//! - Tag and star rows must reference a dashboard that exists either in the
//!   committed tables or in the same write set

use dashstore_core::{AccountId, DashboardId, EntityRef, StoreError};
use dashstore_storage::{DashboardRow, Mutation, TableSet};
use rustc_hash::{FxHashMap, FxHashSet};

/// Types of constraint violations detected during validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// Two dashboards would share a slug within one tenant
    DuplicateSlug {
        /// Tenant of the collision
        account_id: AccountId,
        /// Colliding slug
        slug: String,
        /// Dashboard being written
        dashboard_id: DashboardId,
        /// Dashboard already holding the slug
        existing: DashboardId,
    },

    /// A write would move a dashboard to another tenant
    OwnerChanged {
        /// Dashboard being written
        dashboard_id: DashboardId,
        /// Committed owner
        from: AccountId,
        /// Owner in the write set
        to: AccountId,
    },

    /// A tag or star references a dashboard that does not exist
    MissingDashboard {
        /// Referenced identity
        dashboard_id: DashboardId,
    },
}

impl From<ConstraintViolation> for StoreError {
    fn from(v: ConstraintViolation) -> Self {
        match v {
            ConstraintViolation::DuplicateSlug {
                account_id, slug, ..
            } => StoreError::duplicate_slug(account_id, slug),
            ConstraintViolation::OwnerChanged {
                dashboard_id, to, ..
            } => StoreError::not_found(EntityRef::id(Some(to), dashboard_id)),
            ConstraintViolation::MissingDashboard { dashboard_id } => {
                StoreError::not_found(EntityRef::id(None, dashboard_id))
            }
        }
    }
}

/// Result of write-set validation
///
/// Accumulates all violations found. A write set commits only if
/// `is_valid()` returns true.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// All violations detected
    pub violations: Vec<ConstraintViolation>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn ok() -> Self {
        ValidationResult {
            violations: Vec::new(),
        }
    }

    /// Create a result with a single violation
    pub fn violation(v: ConstraintViolation) -> Self {
        ValidationResult {
            violations: vec![v],
        }
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        self.violations.extend(other.violations);
    }

    /// Number of violations
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    /// Convert into the first violation's error, if any
    pub fn into_result(self) -> Result<(), StoreError> {
        match self.violations.into_iter().next() {
            None => Ok(()),
            Some(v) => Err(v.into()),
        }
    }
}

/// Validate a write set against the committed tables.
///
/// # Arguments
/// * `writes` - Mutations in the order they would be applied
/// * `tables` - Committed state the write set would be applied to
pub fn validate_write_set(writes: &[Mutation], tables: &TableSet) -> ValidationResult {
    // Final state of every dashboard row touched by the write set
    let mut final_rows: FxHashMap<DashboardId, &DashboardRow> = FxHashMap::default();
    for m in writes {
        if let Mutation::PutDashboard(row) = m {
            final_rows.insert(row.id, row);
        }
    }

    let mut result = ValidationResult::ok();
    result.merge(validate_owners(&final_rows, tables));
    result.merge(validate_slugs(&final_rows, tables));
    result.merge(validate_references(writes, &final_rows, tables));
    result
}

fn validate_owners(
    final_rows: &FxHashMap<DashboardId, &DashboardRow>,
    tables: &TableSet,
) -> ValidationResult {
    let mut result = ValidationResult::ok();
    for row in final_rows.values() {
        if let Some(committed) = tables.dashboard(row.id) {
            if committed.account_id != row.account_id {
                result.violations.push(ConstraintViolation::OwnerChanged {
                    dashboard_id: row.id,
                    from: committed.account_id,
                    to: row.account_id,
                });
            }
        }
    }
    result
}

fn validate_slugs(
    final_rows: &FxHashMap<DashboardId, &DashboardRow>,
    tables: &TableSet,
) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let mut claimed: FxHashMap<(AccountId, &str), DashboardId> = FxHashMap::default();

    let mut rows: Vec<&&DashboardRow> = final_rows.values().collect();
    rows.sort_by_key(|r| r.id);

    for row in rows {
        let key = (row.account_id, row.slug.as_str());

        // Collision inside the write set itself
        if let Some(&other) = claimed.get(&key) {
            result.violations.push(ConstraintViolation::DuplicateSlug {
                account_id: row.account_id,
                slug: row.slug.clone(),
                dashboard_id: row.id,
                existing: other,
            });
            continue;
        }
        claimed.insert(key, row.id);

        // Collision with a committed row that keeps its slug
        if let Some(existing) = tables.dashboard_id_by_slug(row.account_id, &row.slug) {
            let still_holds = match final_rows.get(&existing) {
                Some(rewritten) => rewritten.slug == row.slug,
                None => true,
            };
            if existing != row.id && still_holds {
                result.violations.push(ConstraintViolation::DuplicateSlug {
                    account_id: row.account_id,
                    slug: row.slug.clone(),
                    dashboard_id: row.id,
                    existing,
                });
            }
        }
    }
    result
}

fn validate_references(
    writes: &[Mutation],
    final_rows: &FxHashMap<DashboardId, &DashboardRow>,
    tables: &TableSet,
) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let mut reported = FxHashSet::default();
    for m in writes {
        let needs_dashboard = matches!(
            m,
            Mutation::InsertTag { .. } | Mutation::InsertStar { .. }
        );
        if !needs_dashboard {
            continue;
        }
        let id = m.dashboard_id();
        let exists = final_rows.contains_key(&id) || tables.dashboard(id).is_some();
        if !exists && reported.insert(id) {
            result
                .violations
                .push(ConstraintViolation::MissingDashboard { dashboard_id: id });
        }
    }
    result
}
