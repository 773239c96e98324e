//! Store configuration
//!
//! Loaded from TOML. Every field has a default, so an empty file (or no file
//! at all) yields [`StoreConfig::default`].
//!
//! ```toml
//! durability = "buffered"
//!
//! [limits]
//! max_title_len = 255
//! max_tags = 64
//! max_tag_len = 100
//! max_payload_bytes = 4194304
//!
//! [search]
//! default_limit = 1000
//! ```

use dashstore_core::{StoreError, StoreResult};
use dashstore_durability::DurabilityMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up by [`crate::Database::open`]
pub const CONFIG_FILE_NAME: &str = "dashstore.toml";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// WAL write policy for on-disk databases
    pub durability: DurabilityMode,
    /// Input limits enforced before a save starts
    pub limits: Limits,
    /// Search defaults
    pub search: SearchConfig,
}

/// Input limits for saved dashboards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Maximum title length in characters
    pub max_title_len: usize,
    /// Maximum number of distinct tags per dashboard
    pub max_tags: usize,
    /// Maximum tag length in characters
    pub max_tag_len: usize,
    /// Maximum serialized payload size in bytes
    pub max_payload_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_title_len: 255,
            max_tags: 64,
            max_tag_len: 100,
            max_payload_bytes: 4 * 1024 * 1024,
        }
    }
}

/// Search defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Hit cap applied when a query carries no explicit limit
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            default_limit: 1000,
        }
    }
}

impl StoreConfig {
    /// Parse a TOML document
    pub fn from_toml_str(s: &str) -> StoreResult<Self> {
        let config: StoreConfig = toml::from_str(s)
            .map_err(|e| StoreError::validation(format!("invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            StoreError::storage(format!("cannot read config {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> StoreResult<String> {
        toml::to_string(self).map_err(|e| StoreError::serialization(e.to_string()))
    }

    fn validate(&self) -> StoreResult<()> {
        if self.search.default_limit == 0 {
            return Err(StoreError::validation(
                "invalid config: search.default_limit must be positive",
            ));
        }
        if self.limits.max_title_len == 0 {
            return Err(StoreError::validation(
                "invalid config: limits.max_title_len must be positive",
            ));
        }
        Ok(())
    }
}
