//! Search and tag listing handlers.

use std::sync::Arc;

use dashstore_core::AccountId;
use dashstore_engine::SearchQuery;

use crate::bridge::Primitives;
use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle SearchDashboards command.
pub fn search_dashboards(p: &Arc<Primitives>, query: SearchQuery) -> Result<Output> {
    let hits = convert_result(p.search.search(&query))?;
    Ok(Output::SearchHits(hits))
}

/// Handle GetDashboardTags command.
pub fn get_dashboard_tags(p: &Arc<Primitives>, account_id: AccountId) -> Result<Output> {
    Ok(Output::TagCounts(p.tags.list_distinct_tags(account_id)))
}
