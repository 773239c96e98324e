//! Command outputs.

use dashstore_core::{Dashboard, SearchHit, TagCount};
use serde::Serialize;

/// Successful result of a [`crate::Command`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "output", content = "value")]
pub enum Output {
    /// Command had no result value
    Unit,
    /// Boolean answer
    Bool(bool),
    /// One dashboard
    Dashboard(Dashboard),
    /// Search hits in result order
    SearchHits(Vec<SearchHit>),
    /// Distinct tags with counts
    TagCounts(Vec<TagCount>),
}
