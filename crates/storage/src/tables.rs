//! Dashboard, tag and star tables with their secondary indexes
//!
//! # Design
//!
//! - `dashboards`: primary table, ordered by id
//! - `slugs`: unique index on `(account_id, slug)`
//! - `by_account`: tenant → dashboard ids, so tenant scans never touch other tenants
//! - `tags`: dashboard → tag set (the association table)
//! - `stars` / `starred`: both directions of the star relation
//!
//! `TableSet` itself is not synchronized; [`crate::Store`] owns it behind a lock.

use dashstore_core::{AccountId, DashboardId, TagCount, UserId};
use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};

use crate::rows::{DashboardRow, Mutation};

/// All tables of the store
#[derive(Debug, Default)]
pub struct TableSet {
    dashboards: BTreeMap<DashboardId, DashboardRow>,
    slugs: FxHashMap<(AccountId, String), DashboardId>,
    by_account: FxHashMap<AccountId, BTreeSet<DashboardId>>,
    tags: FxHashMap<DashboardId, BTreeSet<String>>,
    stars: FxHashMap<DashboardId, BTreeSet<UserId>>,
    starred: FxHashMap<UserId, BTreeSet<DashboardId>>,
}

impl TableSet {
    /// Create empty tables
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Dashboards
    // ========================================================================

    /// Number of dashboards across all tenants
    pub fn dashboard_count(&self) -> usize {
        self.dashboards.len()
    }

    /// Look up a dashboard by identity
    pub fn dashboard(&self, id: DashboardId) -> Option<&DashboardRow> {
        self.dashboards.get(&id)
    }

    /// Look up a dashboard id through the `(account_id, slug)` index
    pub fn dashboard_id_by_slug(&self, account_id: AccountId, slug: &str) -> Option<DashboardId> {
        self.slugs.get(&(account_id, slug.to_string())).copied()
    }

    /// Iterate the dashboards of one tenant in id order
    pub fn dashboards_in(&self, account_id: AccountId) -> impl Iterator<Item = &DashboardRow> {
        self.by_account
            .get(&account_id)
            .into_iter()
            .flat_map(|ids| ids.iter())
            .filter_map(move |id| self.dashboards.get(id))
    }

    /// Number of dashboards owned by a tenant
    pub fn account_dashboard_count(&self, account_id: AccountId) -> usize {
        self.by_account.get(&account_id).map_or(0, |ids| ids.len())
    }

    /// Highest assigned dashboard id, if any
    pub fn max_dashboard_id(&self) -> Option<DashboardId> {
        self.dashboards.keys().next_back().copied()
    }

    // ========================================================================
    // Tags
    // ========================================================================

    /// Tags of one dashboard, sorted
    pub fn tags_of(&self, id: DashboardId) -> Vec<String> {
        self.tags
            .get(&id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Whether a dashboard carries an exact tag
    pub fn has_tag(&self, id: DashboardId, tag: &str) -> bool {
        self.tags.get(&id).map_or(false, |set| set.contains(tag))
    }

    /// Total number of tag associations
    pub fn tag_row_count(&self) -> usize {
        self.tags.values().map(|set| set.len()).sum()
    }

    /// Distinct tags of a tenant with the number of dashboards carrying each,
    /// ordered by tag text ascending
    pub fn tag_counts(&self, account_id: AccountId) -> Vec<TagCount> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for row in self.dashboards_in(account_id) {
            if let Some(set) = self.tags.get(&row.id) {
                for tag in set {
                    *counts.entry(tag.as_str()).or_insert(0) += 1;
                }
            }
        }
        counts
            .into_iter()
            .map(|(term, count)| TagCount {
                term: term.to_string(),
                count,
            })
            .collect()
    }

    // ========================================================================
    // Stars
    // ========================================================================

    /// Whether `user_id` starred `dashboard_id`
    pub fn is_starred_by(&self, dashboard_id: DashboardId, user_id: UserId) -> bool {
        self.stars
            .get(&dashboard_id)
            .map_or(false, |users| users.contains(&user_id))
    }

    /// Dashboards starred by a user, in id order
    pub fn starred_by(&self, user_id: UserId) -> Vec<DashboardId> {
        self.starred
            .get(&user_id)
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Total number of star rows
    pub fn star_row_count(&self) -> usize {
        self.stars.values().map(|users| users.len()).sum()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Apply a single mutation
    pub fn apply(&mut self, mutation: &Mutation) {
        match mutation {
            Mutation::PutDashboard(row) => self.put_dashboard(row.clone()),
            Mutation::ClearTags { dashboard_id } => {
                self.tags.remove(dashboard_id);
            }
            Mutation::InsertTag { dashboard_id, tag } => {
                self.tags
                    .entry(*dashboard_id)
                    .or_default()
                    .insert(tag.clone());
            }
            Mutation::InsertStar {
                dashboard_id,
                user_id,
            } => {
                self.stars.entry(*dashboard_id).or_default().insert(*user_id);
                self.starred.entry(*user_id).or_default().insert(*dashboard_id);
            }
            Mutation::DeleteStar {
                dashboard_id,
                user_id,
            } => {
                remove_pair(&mut self.stars, dashboard_id, user_id);
                remove_pair(&mut self.starred, user_id, dashboard_id);
            }
        }
    }

    /// Apply a write set in order
    pub fn apply_batch(&mut self, mutations: &[Mutation]) {
        for m in mutations {
            self.apply(m);
        }
    }

    fn put_dashboard(&mut self, row: DashboardRow) {
        if let Some(old) = self.dashboards.get(&row.id) {
            if old.slug != row.slug || old.account_id != row.account_id {
                self.slugs.remove(&(old.account_id, old.slug.clone()));
            }
            if old.account_id != row.account_id {
                remove_pair(&mut self.by_account, &old.account_id, &row.id);
            }
        }
        self.slugs.insert((row.account_id, row.slug.clone()), row.id);
        self.by_account.entry(row.account_id).or_default().insert(row.id);
        self.dashboards.insert(row.id, row);
    }
}

fn remove_pair<K, V>(map: &mut FxHashMap<K, BTreeSet<V>>, key: &K, value: &V)
where
    K: std::hash::Hash + Eq,
    V: Ord,
{
    if let Some(set) = map.get_mut(key) {
        set.remove(value);
        if set.is_empty() {
            map.remove(key);
        }
    }
}
