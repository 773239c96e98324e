//! Star operations.

use crate::types::{StarDashboardCommand, UnstarDashboardCommand};
use crate::{Command, Error, Executor, Output, Result};
use dashstore_core::{DashboardId, UserId};

impl Executor {
    // =========================================================================
    // Star Operations (3)
    // =========================================================================

    /// Star a dashboard. Idempotent.
    pub fn star_dashboard(&self, cmd: &StarDashboardCommand) -> Result<()> {
        match self.execute(Command::StarDashboard {
            dashboard_id: cmd.dashboard_id,
            user_id: cmd.user_id,
        })? {
            Output::Unit => Ok(()),
            _ => Err(Error::Internal {
                reason: "Unexpected output for StarDashboard".into(),
            }),
        }
    }

    /// Remove a star. Idempotent.
    pub fn unstar_dashboard(&self, cmd: &UnstarDashboardCommand) -> Result<()> {
        match self.execute(Command::UnstarDashboard {
            dashboard_id: cmd.dashboard_id,
            user_id: cmd.user_id,
        })? {
            Output::Unit => Ok(()),
            _ => Err(Error::Internal {
                reason: "Unexpected output for UnstarDashboard".into(),
            }),
        }
    }

    /// Whether `user_id` starred `dashboard_id`.
    pub fn is_starred(&self, dashboard_id: DashboardId, user_id: UserId) -> Result<bool> {
        match self.execute(Command::IsStarred {
            dashboard_id,
            user_id,
        })? {
            Output::Bool(starred) => Ok(starred),
            _ => Err(Error::Internal {
                reason: "Unexpected output for IsStarred".into(),
            }),
        }
    }
}
