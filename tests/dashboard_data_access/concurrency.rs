//! Racing writers and readers.

use crate::test_utils::*;
use dashstore::types::*;
use dashstore::{DashboardSearch, DashboardStore, Database, SearchQuery, StarStore};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_same_slug_race_has_one_winner() {
    init_tracing();
    for _ in 0..20 {
        let db = Arc::new(Database::ephemeral());
        let barrier = Arc::new(Barrier::new(2));

        let handles: Vec<_> = ["Race Board", "race board"]
            .into_iter()
            .map(|title| {
                let store = DashboardStore::new(db.clone());
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    store.save(AccountId(1), DashboardPayload::new(title))
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let wins = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(wins, 1);

        let loss = results.into_iter().find_map(|r| r.err()).unwrap();
        assert_eq!(loss.kind(), ErrorKind::UniquenessViolation);
        assert_eq!(DashboardStore::new(db).count(AccountId(1)), 1);
    }
}

#[test]
fn test_distinct_tenants_write_in_parallel() {
    init_tracing();
    let db = Arc::new(Database::ephemeral());
    let per_tenant = 50;

    let handles: Vec<_> = (1..=4)
        .map(|account| {
            let store = DashboardStore::new(db.clone());
            thread::spawn(move || {
                for i in 0..per_tenant {
                    store
                        .save(
                            AccountId(account),
                            DashboardPayload::new(format!("board {}", i)).with_tags(["shared"]),
                        )
                        .unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let search = DashboardSearch::new(db.clone());
    for account in 1..=4 {
        let hits = search.search(&SearchQuery::new(AccountId(account))).unwrap();
        assert_eq!(hits.len(), per_tenant);
    }

    // ids are unique across tenants
    let mut ids: Vec<_> = (1..=4)
        .flat_map(|account| {
            search
                .search(&SearchQuery::new(AccountId(account)))
                .unwrap()
                .into_iter()
                .map(|h| h.id)
        })
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4 * per_tenant);
}

#[test]
fn test_readers_never_see_half_replaced_tags() {
    init_tracing();
    let db = Arc::new(Database::ephemeral());
    let store = DashboardStore::new(db.clone());
    let first = store
        .save(AccountId(1), DashboardPayload::new("flip").with_tags(["a1", "a2"]))
        .unwrap();

    let writer = {
        let store = store.clone();
        let payload = first.payload.clone();
        thread::spawn(move || {
            for i in 0..200 {
                let mut p = payload.clone();
                p.tags = if i % 2 == 0 {
                    vec!["b1".into(), "b2".into()]
                } else {
                    vec!["a1".into(), "a2".into()]
                };
                store.save(AccountId(1), p).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..3)
        .map(|_| {
            let search = DashboardSearch::new(db.clone());
            thread::spawn(move || {
                for _ in 0..200 {
                    let hits = search.search(&SearchQuery::new(AccountId(1))).unwrap();
                    let tags = &hits[0].tags;
                    assert!(
                        tags == &vec!["a1", "a2"] || tags == &vec!["b1", "b2"],
                        "observed partial tag set {:?}",
                        tags
                    );
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
}

#[test]
fn test_concurrent_stars_are_idempotent() {
    init_tracing();
    let db = Arc::new(Database::ephemeral());
    let saved = DashboardStore::new(db.clone())
        .save(AccountId(1), DashboardPayload::new("popular"))
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let stars = StarStore::new(db.clone());
            thread::spawn(move || {
                stars.star(saved.id, UserId(i % 2)).unwrap();
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(db.snapshot().star_row_count(), 2);
}
