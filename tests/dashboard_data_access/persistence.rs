//! The data access scenarios survive a restart.

use crate::test_utils::*;
use dashstore::types::*;
use dashstore::{Database, Executor};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_saved_state_restored_after_reopen() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("dash_db");

    let saved_id;
    {
        let executor = Executor::new(Arc::new(Database::open(&db_path).unwrap()));
        let saved = insert_test_dashboard(&executor, 1, "test dash 23", &["prod", "webapp"]);
        insert_test_dashboard(&executor, 1, "test dash 45", &["prod"]);
        executor
            .star_dashboard(&StarDashboardCommand {
                dashboard_id: saved.id,
                user_id: UserId(10),
            })
            .unwrap();
        saved_id = saved.id;
    }

    let executor = Executor::new(Arc::new(Database::open(&db_path).unwrap()));

    let hits = search_title(&executor, 1, "%test dash 23%");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, saved_id);
    assert_eq!(hits[0].tags, vec!["prod", "webapp"]);

    assert_eq!(search_tag(&executor, 1, "prod").len(), 2);
    assert!(executor.is_starred(saved_id, UserId(10)).unwrap());

    let mut dup = SaveDashboardCommand::new(AccountId(1), dashboard_doc("test dash 23", &[]));
    assert!(executor.save_dashboard(&mut dup).is_err());
}

#[test]
fn test_config_file_controls_search_default() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("dashstore.toml"),
        "durability = \"buffered\"\n\n[search]\ndefault_limit = 2\n",
    )
    .unwrap();

    let db = Arc::new(Database::open(temp_dir.path()).unwrap());
    assert_eq!(db.config().durability, DurabilityMode::Buffered);
    let executor = Executor::new(db);
    for title in ["a", "b", "c"] {
        insert_test_dashboard(&executor, 1, title, &[]);
    }

    assert_eq!(search_all(&executor, 1).len(), 2);

    let mut query = SearchDashboardsQuery::new(AccountId(1));
    query.limit = Some(10);
    assert_eq!(executor_search(&executor, query).len(), 3);
}
