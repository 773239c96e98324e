//! Public types for the dashstore API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Identifiers and records
// ============================================================================

pub use dashstore_core::{AccountId, DashboardId, UserId};
pub use dashstore_core::{Dashboard, DashboardPayload, SearchHit, TagCount};
pub use dashstore_core::EntityRef;

// ============================================================================
// Errors
// ============================================================================

pub use dashstore_core::{ErrorKind, StoreError, StoreResult};

// ============================================================================
// Configuration
// ============================================================================

pub use dashstore_engine::{DurabilityMode, Limits, SearchConfig, StoreConfig};

// ============================================================================
// Command / query records
// ============================================================================

pub use dashstore_executor::{
    GetDashboardByIdQuery, GetDashboardQuery, GetDashboardTagsQuery, SaveDashboardCommand,
    SearchDashboardsQuery, StarDashboardCommand, UnstarDashboardCommand,
};
