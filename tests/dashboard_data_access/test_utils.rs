//! Shared fixtures for the data access suite.

use dashstore::types::*;
use dashstore::{Database, Executor};
use serde_json::{json, Value};
use std::sync::Arc;

/// Install a test-writer subscriber once; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Executor over a fresh in-memory database
pub fn executor() -> Executor {
    init_tracing();
    Executor::new(Arc::new(Database::ephemeral()))
}

/// Document with a title and tags, like a dashboard JSON model
pub fn dashboard_doc(title: &str, tags: &[&str]) -> Value {
    json!({
        "id": null,
        "title": title,
        "tags": tags,
    })
}

/// Save through the typed API and return the stored dashboard
pub fn insert_test_dashboard(
    executor: &Executor,
    account_id: i64,
    title: &str,
    tags: &[&str],
) -> Dashboard {
    let mut cmd = SaveDashboardCommand::new(AccountId(account_id), dashboard_doc(title, tags));
    executor
        .save_dashboard(&mut cmd)
        .unwrap_or_else(|e| panic!("saving '{}' failed: {}", title, e));
    cmd.result.expect("save fills result")
}

/// Search with only a title pattern
pub fn search_title(executor: &Executor, account_id: i64, title: &str) -> Vec<SearchHit> {
    let mut query = SearchDashboardsQuery::new(AccountId(account_id));
    query.title = Some(title.to_string());
    executor.search_dashboards(&mut query).unwrap();
    query.result
}

/// Search with only a tag
pub fn search_tag(executor: &Executor, account_id: i64, tag: &str) -> Vec<SearchHit> {
    let mut query = SearchDashboardsQuery::new(AccountId(account_id));
    query.tag = Some(tag.to_string());
    executor.search_dashboards(&mut query).unwrap();
    query.result
}

/// Every dashboard of a tenant
pub fn search_all(executor: &Executor, account_id: i64) -> Vec<SearchHit> {
    executor_search(executor, SearchDashboardsQuery::new(AccountId(account_id)))
}

/// Run an arbitrary search query
pub fn executor_search(executor: &Executor, mut query: SearchDashboardsQuery) -> Vec<SearchHit> {
    executor.search_dashboards(&mut query).unwrap();
    query.result
}
