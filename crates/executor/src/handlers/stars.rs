//! Star command handlers.

use std::sync::Arc;

use dashstore_core::{DashboardId, UserId};

use crate::bridge::Primitives;
use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle StarDashboard command.
pub fn star_dashboard(
    p: &Arc<Primitives>,
    dashboard_id: DashboardId,
    user_id: UserId,
) -> Result<Output> {
    convert_result(p.stars.star(dashboard_id, user_id))?;
    Ok(Output::Unit)
}

/// Handle UnstarDashboard command.
pub fn unstar_dashboard(
    p: &Arc<Primitives>,
    dashboard_id: DashboardId,
    user_id: UserId,
) -> Result<Output> {
    convert_result(p.stars.unstar(dashboard_id, user_id))?;
    Ok(Output::Unit)
}

/// Handle IsStarred command.
pub fn is_starred(
    p: &Arc<Primitives>,
    dashboard_id: DashboardId,
    user_id: UserId,
) -> Result<Output> {
    Ok(Output::Bool(p.stars.is_starred_by(dashboard_id, user_id)))
}
