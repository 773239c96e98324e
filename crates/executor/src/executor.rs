//! Command dispatcher.

use std::sync::Arc;

use dashstore_engine::{Database, SearchQuery};
use tracing::{debug, warn};

use crate::bridge::Primitives;
use crate::handlers::{dashboard, search, stars};
use crate::{Command, Output, Result};

/// Executes [`Command`]s against one database
#[derive(Clone)]
pub struct Executor {
    primitives: Arc<Primitives>,
}

impl Executor {
    /// Create an executor over `db`
    pub fn new(db: Arc<Database>) -> Self {
        Executor {
            primitives: Arc::new(Primitives::new(db)),
        }
    }

    /// Underlying database
    pub fn database(&self) -> &Arc<Database> {
        &self.primitives.db
    }

    /// Execute one command
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        let result = self.dispatch(cmd);
        match &result {
            Ok(_) => debug!(command = name, "Executed command"),
            Err(e) => warn!(command = name, error = %e, "Command failed"),
        }
        result
    }

    fn dispatch(&self, cmd: Command) -> Result<Output> {
        let p = &self.primitives;
        match cmd {
            Command::SaveDashboard {
                account_id,
                dashboard,
            } => dashboard::save_dashboard(p, account_id, dashboard),
            Command::GetDashboard { account_id, slug } => {
                dashboard::get_dashboard(p, account_id, &slug)
            }
            Command::GetDashboardById { account_id, id } => {
                dashboard::get_dashboard_by_id(p, account_id, id)
            }
            Command::SearchDashboards {
                account_id,
                title,
                tag,
                user_id,
                is_starred,
                limit,
            } => search::search_dashboards(
                p,
                SearchQuery {
                    account_id,
                    title,
                    tag,
                    user_id,
                    is_starred,
                    limit,
                },
            ),
            Command::GetDashboardTags { account_id } => search::get_dashboard_tags(p, account_id),
            Command::StarDashboard {
                dashboard_id,
                user_id,
            } => stars::star_dashboard(p, dashboard_id, user_id),
            Command::UnstarDashboard {
                dashboard_id,
                user_id,
            } => stars::unstar_dashboard(p, dashboard_id, user_id),
            Command::IsStarred {
                dashboard_id,
                user_id,
            } => stars::is_starred(p, dashboard_id, user_id),
        }
    }
}
