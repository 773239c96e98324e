//! Bridge between the executor and the engine facades.

use dashstore_engine::{DashboardSearch, DashboardStore, Database, StarStore, TagIndex};
use std::sync::Arc;

/// Every engine facade over one database
pub struct Primitives {
    /// Shared database handle
    pub db: Arc<Database>,
    /// Dashboard records
    pub dashboards: DashboardStore,
    /// Tag associations
    pub tags: TagIndex,
    /// Star relation
    pub stars: StarStore,
    /// Compound search
    pub search: DashboardSearch,
}

impl Primitives {
    /// Build all facades over `db`
    pub fn new(db: Arc<Database>) -> Self {
        Primitives {
            dashboards: DashboardStore::new(db.clone()),
            tags: TagIndex::new(db.clone()),
            stars: StarStore::new(db.clone()),
            search: DashboardSearch::new(db.clone()),
            db,
        }
    }
}
