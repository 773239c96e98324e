//! Dashboard search
//!
//! This module contains:
//! - `pattern`: case-insensitive wildcard matching of titles
//! - `DashboardSearch`: compound, tenant-scoped queries over one snapshot
//!
//! Filters compose with AND:
//! - tenant (always)
//! - title pattern (optional)
//! - exact tag (optional)
//! - starred by the requesting user (when `is_starred` and `user_id` are set)
//!
//! Hits are ordered by title, then id, and capped at the query limit.

mod pattern;

pub use pattern::{TitlePattern, WILDCARDS};

use dashstore_core::{AccountId, SearchHit, StoreError, StoreResult, UserId};
use std::sync::Arc;
use tracing::debug;

use crate::database::Database;

/// Search criteria
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Tenant to search (required)
    pub account_id: AccountId,
    /// Title pattern, `None` for no title filter
    pub title: Option<String>,
    /// Exact tag, `None` or blank for no tag filter
    pub tag: Option<String>,
    /// Requesting user; drives the star filter and `SearchHit::is_starred`
    pub user_id: Option<UserId>,
    /// Keep only dashboards starred by `user_id`
    pub is_starred: bool,
    /// Hit cap, `None` for the configured default
    pub limit: Option<usize>,
}

impl SearchQuery {
    /// Query matching every dashboard of `account_id`
    pub fn new(account_id: AccountId) -> Self {
        SearchQuery {
            account_id,
            title: None,
            tag: None,
            user_id: None,
            is_starred: false,
            limit: None,
        }
    }

    /// Filter by title pattern
    pub fn with_title(mut self, pattern: impl Into<String>) -> Self {
        self.title = Some(pattern.into());
        self
    }

    /// Filter by exact tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Search on behalf of `user_id`
    pub fn for_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Keep only dashboards starred by `user_id`
    pub fn starred_by(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self.is_starred = true;
        self
    }

    /// Cap the number of hits
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Search facade
#[derive(Clone)]
pub struct DashboardSearch {
    db: Arc<Database>,
}

impl DashboardSearch {
    /// Create new DashboardSearch instance
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Get the underlying database reference
    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }

    /// Run a query against one consistent snapshot
    ///
    /// No matches is an empty vector, not an error. `is_starred` without a
    /// `user_id` applies no star filter. Fails with `Validation` only for a
    /// zero limit.
    pub fn search(&self, query: &SearchQuery) -> StoreResult<Vec<SearchHit>> {
        let limit = match query.limit {
            Some(0) => return Err(StoreError::validation("search limit must be positive")),
            Some(n) => n,
            None => self.db.config().search.default_limit,
        };
        let pattern = query
            .title
            .as_deref()
            .map(TitlePattern::parse)
            .filter(|p| !p.is_match_all());
        let tag = query
            .tag
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());
        let star_filter = match (query.is_starred, query.user_id) {
            (true, Some(user_id)) => Some(user_id),
            _ => None,
        };

        let tables = self.db.snapshot();
        let mut hits: Vec<SearchHit> = tables
            .dashboards_in(query.account_id)
            .filter(|row| pattern.as_ref().map_or(true, |p| p.matches(&row.title)))
            .filter(|row| tag.map_or(true, |tag| tables.has_tag(row.id, tag)))
            .filter(|row| star_filter.map_or(true, |user| tables.is_starred_by(row.id, user)))
            .map(|row| SearchHit {
                id: row.id,
                title: row.title.clone(),
                slug: row.slug.clone(),
                tags: tables.tags_of(row.id),
                is_starred: query
                    .user_id
                    .map_or(false, |user| tables.is_starred_by(row.id, user)),
            })
            .collect();
        drop(tables);

        hits.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        hits.truncate(limit);

        debug!(
            account_id = %query.account_id,
            hits = hits.len(),
            "Searched dashboards"
        );
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardStore;
    use crate::stars::StarStore;
    use dashstore_core::{DashboardId, DashboardPayload, ErrorKind};

    struct Fixture {
        dashboards: DashboardStore,
        stars: StarStore,
        search: DashboardSearch,
    }

    fn fixture() -> Fixture {
        let db = Arc::new(Database::ephemeral());
        Fixture {
            dashboards: DashboardStore::new(db.clone()),
            stars: StarStore::new(db.clone()),
            search: DashboardSearch::new(db),
        }
    }

    fn save(f: &Fixture, account: i64, title: &str, tags: &[&str]) -> DashboardId {
        f.dashboards
            .save(
                AccountId(account),
                DashboardPayload::new(title).with_tags(tags.iter().copied()),
            )
            .unwrap()
            .id
    }

    fn titles(hits: &[SearchHit]) -> Vec<&str> {
        hits.iter().map(|h| h.title.as_str()).collect()
    }

    #[test]
    fn test_title_search_returns_full_tags() {
        let f = fixture();
        save(&f, 1, "test dash 23", &["prod", "webapp"]);

        let hits = f
            .search
            .search(&SearchQuery::new(AccountId(1)).with_title("%test%"))
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].tags, vec!["prod", "webapp"]);
        assert_eq!(hits[0].slug, "test-dash-23");
        assert!(!hits[0].is_starred);
    }

    #[test]
    fn test_tag_filter_is_exact() {
        let f = fixture();
        save(&f, 1, "a", &["webapp"]);
        save(&f, 1, "b", &["webapp-old"]);

        let hits = f
            .search
            .search(&SearchQuery::new(AccountId(1)).with_tag("webapp"))
            .unwrap();
        assert_eq!(titles(&hits), vec!["a"]);

        let none = f
            .search
            .search(&SearchQuery::new(AccountId(1)).with_tag("tagdoesnotexist"))
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_blank_tag_applies_no_filter() {
        let f = fixture();
        save(&f, 1, "test dash 23", &["prod"]);
        save(&f, 1, "untagged", &[]);

        for blank in ["", "   "] {
            let hits = f
                .search
                .search(&SearchQuery::new(AccountId(1)).with_tag(blank))
                .unwrap();
            assert_eq!(titles(&hits), vec!["test dash 23", "untagged"]);
        }

        let padded = f
            .search
            .search(&SearchQuery::new(AccountId(1)).with_tag(" prod "))
            .unwrap();
        assert_eq!(titles(&padded), vec!["test dash 23"]);
    }

    #[test]
    fn test_tenant_isolation() {
        let f = fixture();
        save(&f, 1, "mine", &[]);
        save(&f, 2, "theirs", &[]);

        let hits = f.search.search(&SearchQuery::new(AccountId(1))).unwrap();
        assert_eq!(titles(&hits), vec!["mine"]);
        assert!(f
            .search
            .search(&SearchQuery::new(AccountId(3)))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_star_filter_is_per_user() {
        let f = fixture();
        let a = save(&f, 1, "A", &[]);
        let b = save(&f, 1, "B", &[]);
        f.stars.star(a, UserId(10)).unwrap();
        f.stars.star(b, UserId(1)).unwrap();

        let hits = f
            .search
            .search(&SearchQuery::new(AccountId(1)).starred_by(UserId(10)))
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, a);
        assert!(hits[0].is_starred);
    }

    #[test]
    fn test_is_starred_reported_without_filter() {
        let f = fixture();
        let a = save(&f, 1, "A", &[]);
        save(&f, 1, "B", &[]);
        f.stars.star(a, UserId(10)).unwrap();

        let hits = f
            .search
            .search(&SearchQuery::new(AccountId(1)).for_user(UserId(10)))
            .unwrap();
        let flags: Vec<_> = hits.iter().map(|h| h.is_starred).collect();
        assert_eq!(flags, vec![true, false]);
    }

    #[test]
    fn test_is_starred_without_user_applies_no_filter() {
        let f = fixture();
        save(&f, 1, "A", &[]);
        let mut query = SearchQuery::new(AccountId(1));
        query.is_starred = true;
        assert_eq!(f.search.search(&query).unwrap().len(), 1);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let f = fixture();
        let hit = save(&f, 1, "prod api", &["prod"]);
        let starred_wrong_tag = save(&f, 1, "prod web", &["web"]);
        save(&f, 1, "prod db", &["prod"]);
        f.stars.star(hit, UserId(7)).unwrap();
        f.stars.star(starred_wrong_tag, UserId(7)).unwrap();

        let hits = f
            .search
            .search(
                &SearchQuery::new(AccountId(1))
                    .with_title("prod%")
                    .with_tag("prod")
                    .starred_by(UserId(7)),
            )
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, hit);
    }

    #[test]
    fn test_order_and_limit() {
        let f = fixture();
        save(&f, 1, "charlie", &[]);
        save(&f, 1, "Alpha", &[]);
        save(&f, 1, "bravo", &[]);

        let hits = f.search.search(&SearchQuery::new(AccountId(1))).unwrap();
        assert_eq!(titles(&hits), vec!["Alpha", "bravo", "charlie"]);

        let capped = f
            .search
            .search(&SearchQuery::new(AccountId(1)).with_limit(2))
            .unwrap();
        assert_eq!(titles(&capped), vec!["Alpha", "bravo"]);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let f = fixture();
        let err = f
            .search
            .search(&SearchQuery::new(AccountId(1)).with_limit(0))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_results_stable_across_calls() {
        let f = fixture();
        for title in ["x1", "x2", "x3"] {
            save(&f, 1, title, &["t"]);
        }
        let query = SearchQuery::new(AccountId(1)).with_title("%x%");
        let first = f.search.search(&query).unwrap();
        let second = f.search.search(&query).unwrap();
        assert_eq!(first, second);
    }
}
