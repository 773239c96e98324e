//! Injected failures must leave no partial state behind.

use crate::test_utils::*;
use dashstore::types::*;
use dashstore::{DashboardStore, Database, Error, Executor, FaultPoint, TagIndex};
use std::sync::Arc;

#[test]
fn test_tag_write_failure_rolls_back_new_dashboard() {
    init_tracing();
    let db = Arc::new(Database::ephemeral());
    let executor = Executor::new(db.clone());

    db.inject_fault(FaultPoint::TagWrite);
    let mut cmd = SaveDashboardCommand::new(
        AccountId(1),
        dashboard_doc("test dash 23", &["prod", "webapp"]),
    );
    let err = executor.save_dashboard(&mut cmd).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));

    // no row, no tags, no slug reservation
    let mut get = GetDashboardQuery::new(AccountId(1), "test-dash-23");
    assert!(executor.get_dashboard(&mut get).unwrap_err().is_not_found());
    assert!(TagIndex::new(db.clone()).list_distinct_tags(AccountId(1)).is_empty());

    // the slug is still free
    insert_test_dashboard(&executor, 1, "test dash 23", &["prod", "webapp"]);
}

#[test]
fn test_tag_write_failure_keeps_previous_version() {
    init_tracing();
    let db = Arc::new(Database::ephemeral());
    let dashboards = DashboardStore::new(db.clone());
    let v1 = dashboards
        .save(
            AccountId(1),
            DashboardPayload::new("release board").with_tags(["prod", "webapp"]),
        )
        .unwrap();

    db.inject_fault(FaultPoint::TagWrite);
    let mut update = v1.payload.clone();
    update.title = "release board v2".into();
    update.tags = vec!["staging".into()];
    assert!(dashboards.save(AccountId(1), update).is_err());

    let current = dashboards.get(AccountId(1), "release-board").unwrap();
    assert_eq!(current, v1);
    assert!(dashboards.get(AccountId(1), "release-board-v2").is_err());
}

#[test]
fn test_wal_failure_rolls_back() {
    init_tracing();
    let db = Arc::new(Database::ephemeral());
    let executor = Executor::new(db.clone());

    db.inject_fault(FaultPoint::WalAppend);
    let mut cmd = SaveDashboardCommand::new(AccountId(1), dashboard_doc("lost", &["x"]));
    assert!(executor.save_dashboard(&mut cmd).is_err());
    assert!(search_all(&executor, 1).is_empty());
    assert_eq!(db.version(), 0);
}

#[test]
fn test_failed_save_does_not_reuse_id() {
    init_tracing();
    let db = Arc::new(Database::ephemeral());
    let executor = Executor::new(db.clone());

    let first = insert_test_dashboard(&executor, 1, "first", &[]);
    db.inject_fault(FaultPoint::WalAppend);
    let mut cmd = SaveDashboardCommand::new(AccountId(1), dashboard_doc("second", &[]));
    assert!(executor.save_dashboard(&mut cmd).is_err());

    let third = insert_test_dashboard(&executor, 1, "third", &[]);
    assert!(third.id.as_i64() > first.id.as_i64() + 1);
}
