//! Save, get, search, tag and star scenarios against one store.

use crate::test_utils::*;
use dashstore::types::*;
use dashstore::Error;

/// Three dashboards in account 1, like a typical seeded test database
fn seeded() -> (dashstore::Executor, Dashboard) {
    let executor = executor();
    let saved = insert_test_dashboard(&executor, 1, "test dash 23", &["prod", "webapp"]);
    insert_test_dashboard(&executor, 1, "test dash 45", &["prod"]);
    insert_test_dashboard(&executor, 1, "test dash 67", &[]);
    (executor, saved)
}

#[test]
fn test_should_save_and_get_dashboard() {
    let (executor, saved) = seeded();

    assert_eq!(saved.title, "test dash 23");
    assert_eq!(saved.slug, "test-dash-23");
    assert_ne!(saved.id.as_i64(), 0);

    let mut query = GetDashboardQuery::new(AccountId(1), "test-dash-23");
    executor.get_dashboard(&mut query).unwrap();
    let loaded = query.result.unwrap();
    assert_eq!(loaded.title, "test dash 23");
    assert_eq!(loaded.slug, "test-dash-23");
    assert_eq!(loaded.id, saved.id);
}

#[test]
fn test_should_search_dashboards_by_title() {
    let (executor, _) = seeded();

    let hits = search_title(&executor, 1, "%test dash 23%");
    assert_eq!(hits.len(), 1);
    let hit = &hits[0];
    assert_eq!(hit.title, "test dash 23");
    assert_eq!(hit.tags.len(), 2);
    assert_eq!(hit.tags, vec!["prod", "webapp"]);

    let hits = search_title(&executor, 1, "%test%");
    assert_eq!(hits.len(), 3);
}

#[test]
fn test_should_search_dashboards_by_tag() {
    let (executor, _) = seeded();

    let hits = search_tag(&executor, 1, "webapp");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "test dash 23");

    assert_eq!(search_tag(&executor, 1, "prod").len(), 2);
    assert!(search_tag(&executor, 1, "tagdoesnotexist").is_empty());
}

#[test]
fn test_empty_tag_returns_every_dashboard() {
    let (executor, _) = seeded();

    assert_eq!(search_tag(&executor, 1, "").len(), 3);

    let out = executor
        .execute(dashstore::Command::SearchDashboards {
            account_id: AccountId(1),
            title: None,
            tag: Some(String::new()),
            user_id: None,
            is_starred: false,
            limit: None,
        })
        .unwrap();
    match out {
        dashstore::Output::SearchHits(hits) => assert_eq!(hits.len(), 3),
        other => panic!("unexpected output {:?}", other),
    }
}

#[test]
fn test_should_not_save_dashboard_with_same_name() {
    let (executor, _) = seeded();

    let mut cmd = SaveDashboardCommand::new(
        AccountId(1),
        dashboard_doc("test dash 23", &["prod", "webapp"]),
    );
    let err = executor.save_dashboard(&mut cmd).unwrap_err();
    assert!(matches!(err, Error::DashboardExists { .. }));
    assert!(cmd.result.is_none());

    assert_eq!(search_title(&executor, 1, "%test dash 23%").len(), 1);
    assert_eq!(search_all(&executor, 1).len(), 3);
}

#[test]
fn test_should_list_distinct_tags() {
    let executor = executor();
    insert_test_dashboard(&executor, 1, "test dash 23", &["prod", "webapp"]);

    let mut query = GetDashboardTagsQuery::new(AccountId(1));
    executor.get_dashboard_tags(&mut query).unwrap();
    assert_eq!(query.result.len(), 2);
    assert_eq!(query.result[0].term, "prod");
    assert_eq!(query.result[1].term, "webapp");
}

#[test]
fn test_should_isolate_stars_per_user() {
    let (executor, saved) = seeded();
    let other = search_title(&executor, 1, "%test dash 45%")[0].id;

    executor
        .star_dashboard(&StarDashboardCommand {
            dashboard_id: saved.id,
            user_id: UserId(10),
        })
        .unwrap();
    executor
        .star_dashboard(&StarDashboardCommand {
            dashboard_id: other,
            user_id: UserId(1),
        })
        .unwrap();

    let mut query = SearchDashboardsQuery::new(AccountId(1));
    query.user_id = Some(UserId(10));
    query.is_starred = true;
    let hits = executor_search(&executor, query);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "test dash 23");
    assert!(hits[0].is_starred);
}

#[test]
fn test_star_is_idempotent() {
    let (executor, saved) = seeded();
    let cmd = StarDashboardCommand {
        dashboard_id: saved.id,
        user_id: UserId(10),
    };
    executor.star_dashboard(&cmd).unwrap();
    executor.star_dashboard(&cmd).unwrap();

    let mut query = SearchDashboardsQuery::new(AccountId(1));
    query.user_id = Some(UserId(10));
    query.is_starred = true;
    assert_eq!(executor_search(&executor, query).len(), 1);
    assert!(executor.is_starred(saved.id, UserId(10)).unwrap());
}

#[test]
fn test_tenants_do_not_see_each_other() {
    let (executor, _) = seeded();
    insert_test_dashboard(&executor, 2, "test dash 23", &["prod"]);

    assert_eq!(search_all(&executor, 1).len(), 3);
    assert_eq!(search_all(&executor, 2).len(), 1);

    let mut query = GetDashboardTagsQuery::new(AccountId(2));
    executor.get_dashboard_tags(&mut query).unwrap();
    assert_eq!(query.result.len(), 1);
    assert_eq!(query.result[0].count, 1);
}

#[test]
fn test_update_through_saved_document() {
    let (executor, saved) = seeded();

    let mut doc = saved.payload.to_document();
    doc["title"] = "renamed dash".into();
    doc["tags"] = serde_json::json!(["staging"]);
    let mut cmd = SaveDashboardCommand::new(AccountId(1), doc);
    executor.save_dashboard(&mut cmd).unwrap();
    let updated = cmd.result.unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.slug, "renamed-dash");
    assert!(search_tag(&executor, 1, "webapp").is_empty());
    assert_eq!(search_tag(&executor, 1, "staging").len(), 1);

    let mut by_id = GetDashboardByIdQuery::new(AccountId(1), saved.id);
    executor.get_dashboard_by_id(&mut by_id).unwrap();
    assert_eq!(by_id.result.unwrap().title, "renamed dash");
}

#[test]
fn test_invalid_documents_rejected() {
    let executor = executor();
    for doc in [
        serde_json::json!({"tags": ["x"]}),
        serde_json::json!({"title": ""}),
        serde_json::json!({"title": "ok", "tags": "prod"}),
        serde_json::json!({"title": "ok", "id": "seven"}),
    ] {
        let mut cmd = SaveDashboardCommand::new(AccountId(1), doc.clone());
        let err = executor.save_dashboard(&mut cmd).unwrap_err();
        assert!(
            matches!(err, Error::InvalidInput { .. }),
            "{} gave {:?}",
            doc,
            err
        );
    }
    assert!(search_all(&executor, 1).is_empty());
}
