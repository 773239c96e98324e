//! Dashboard command handlers.

use std::sync::Arc;

use dashstore_core::{AccountId, DashboardId, DashboardPayload};
use serde_json::Value;

use crate::bridge::Primitives;
use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle SaveDashboard command.
///
/// The raw document is parsed before anything else, so a malformed
/// document never reaches the store.
pub fn save_dashboard(
    p: &Arc<Primitives>,
    account_id: AccountId,
    dashboard: Value,
) -> Result<Output> {
    let payload = convert_result(DashboardPayload::from_document(dashboard))?;
    let saved = convert_result(p.dashboards.save(account_id, payload))?;
    Ok(Output::Dashboard(saved))
}

/// Handle GetDashboard command.
pub fn get_dashboard(p: &Arc<Primitives>, account_id: AccountId, slug: &str) -> Result<Output> {
    let dashboard = convert_result(p.dashboards.get(account_id, slug))?;
    Ok(Output::Dashboard(dashboard))
}

/// Handle GetDashboardById command.
pub fn get_dashboard_by_id(
    p: &Arc<Primitives>,
    account_id: AccountId,
    id: DashboardId,
) -> Result<Output> {
    let dashboard = convert_result(p.dashboards.get_by_id(account_id, id))?;
    Ok(Output::Dashboard(dashboard))
}
