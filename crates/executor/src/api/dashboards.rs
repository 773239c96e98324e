//! Dashboard, search and tag operations.

use crate::types::{
    GetDashboardByIdQuery, GetDashboardQuery, GetDashboardTagsQuery, SaveDashboardCommand,
    SearchDashboardsQuery,
};
use crate::{Command, Error, Executor, Output, Result};

impl Executor {
    // =========================================================================
    // Dashboard Operations (3)
    // =========================================================================

    /// Save a dashboard, filling `cmd.result`.
    pub fn save_dashboard(&self, cmd: &mut SaveDashboardCommand) -> Result<()> {
        match self.execute(Command::SaveDashboard {
            account_id: cmd.account_id,
            dashboard: cmd.dashboard.clone(),
        })? {
            Output::Dashboard(dashboard) => {
                cmd.result = Some(dashboard);
                Ok(())
            }
            _ => Err(Error::Internal {
                reason: "Unexpected output for SaveDashboard".into(),
            }),
        }
    }

    /// Fetch a dashboard by slug, filling `query.result`.
    pub fn get_dashboard(&self, query: &mut GetDashboardQuery) -> Result<()> {
        match self.execute(Command::GetDashboard {
            account_id: query.account_id,
            slug: query.slug.clone(),
        })? {
            Output::Dashboard(dashboard) => {
                query.result = Some(dashboard);
                Ok(())
            }
            _ => Err(Error::Internal {
                reason: "Unexpected output for GetDashboard".into(),
            }),
        }
    }

    /// Fetch a dashboard by identity, filling `query.result`.
    pub fn get_dashboard_by_id(&self, query: &mut GetDashboardByIdQuery) -> Result<()> {
        match self.execute(Command::GetDashboardById {
            account_id: query.account_id,
            id: query.id,
        })? {
            Output::Dashboard(dashboard) => {
                query.result = Some(dashboard);
                Ok(())
            }
            _ => Err(Error::Internal {
                reason: "Unexpected output for GetDashboardById".into(),
            }),
        }
    }

    // =========================================================================
    // Search / Tag Operations (2)
    // =========================================================================

    /// Search dashboards, filling `query.result`.
    pub fn search_dashboards(&self, query: &mut SearchDashboardsQuery) -> Result<()> {
        match self.execute(Command::SearchDashboards {
            account_id: query.account_id,
            title: query.title.clone(),
            tag: query.tag.clone(),
            user_id: query.user_id,
            is_starred: query.is_starred,
            limit: query.limit,
        })? {
            Output::SearchHits(hits) => {
                query.result = hits;
                Ok(())
            }
            _ => Err(Error::Internal {
                reason: "Unexpected output for SearchDashboards".into(),
            }),
        }
    }

    /// List a tenant's distinct tags, filling `query.result`.
    pub fn get_dashboard_tags(&self, query: &mut GetDashboardTagsQuery) -> Result<()> {
        match self.execute(Command::GetDashboardTags {
            account_id: query.account_id,
        })? {
            Output::TagCounts(tags) => {
                query.result = tags;
                Ok(())
            }
            _ => Err(Error::Internal {
                reason: "Unexpected output for GetDashboardTags".into(),
            }),
        }
    }
}
