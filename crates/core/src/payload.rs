//! Dashboard payload document
//!
//! Callers hand the store an arbitrary keyed JSON document. Three keys are
//! reserved and interpreted by the store:
//! - `id`: nullable identity (null/absent/0 means "create")
//! - `title`: required, non-empty string
//! - `tags`: optional sequence of strings
//!
//! Every other key goes into an extension bag that the store never looks at
//! and hands back unchanged on read.
//!
//! # Examples
//!
//! ```
//! use dashstore_core::DashboardPayload;
//! use serde_json::json;
//!
//! let payload = DashboardPayload::from_document(json!({
//!     "id": null,
//!     "title": "test dash 23",
//!     "tags": ["prod", "webapp"],
//!     "rows": [],
//! }))
//! .unwrap();
//!
//! assert!(payload.id.is_none());
//! assert_eq!(payload.title, "test dash 23");
//! assert!(payload.extra.contains_key("rows"));
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::HashSet;

use crate::error::{StoreError, StoreResult};
use crate::types::DashboardId;

/// Keys the store interprets; everything else is opaque.
pub const RESERVED_KEYS: &[&str] = &["id", "title", "tags"];

/// A dashboard document split into its reserved fields and extension bag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardPayload {
    /// Identity, `None` for a dashboard that has not been saved yet
    pub id: Option<DashboardId>,
    /// Display title
    pub title: String,
    /// Tags as supplied by the caller (see [`DashboardPayload::normalized_tags`])
    pub tags: Vec<String>,
    /// Unrecognized keys, preserved verbatim
    pub extra: Map<String, Value>,
}

impl DashboardPayload {
    /// Create a payload for a new dashboard
    pub fn new(title: impl Into<String>) -> Self {
        DashboardPayload {
            id: None,
            title: title.into(),
            tags: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Builder-style tag setter
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style extension field setter
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Split a raw document into reserved fields and extension bag.
    ///
    /// Fails with `Validation` when the document is not an object, the title
    /// is missing or not a string, the id is not an integer, or tags are not
    /// a sequence of strings. An empty title is accepted here; the store
    /// rejects it together with empty slugs.
    pub fn from_document(doc: Value) -> StoreResult<Self> {
        let mut map = match doc {
            Value::Object(map) => map,
            other => {
                return Err(StoreError::validation(format!(
                    "dashboard must be an object, got {}",
                    type_name(&other)
                )))
            }
        };

        let id = match map.remove("id") {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => match n.as_i64() {
                Some(0) => None,
                Some(v) if v > 0 => Some(DashboardId(v)),
                _ => {
                    return Err(StoreError::validation(format!(
                        "dashboard id must be a positive integer, got {}",
                        n
                    )))
                }
            },
            Some(other) => {
                return Err(StoreError::validation(format!(
                    "dashboard id must be an integer or null, got {}",
                    type_name(&other)
                )))
            }
        };

        let title = match map.remove("title") {
            Some(Value::String(s)) => s,
            None | Some(Value::Null) => return Err(StoreError::validation("title is required")),
            Some(other) => {
                return Err(StoreError::validation(format!(
                    "title must be a string, got {}",
                    type_name(&other)
                )))
            }
        };

        let tags = match map.remove("tags") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => {
                let mut tags = Vec::with_capacity(items.len());
                for (i, item) in items.into_iter().enumerate() {
                    match item {
                        Value::String(s) => tags.push(s),
                        other => {
                            return Err(StoreError::validation(format!(
                                "tags[{}] must be a string, got {}",
                                i,
                                type_name(&other)
                            )))
                        }
                    }
                }
                tags
            }
            Some(other) => {
                return Err(StoreError::validation(format!(
                    "tags must be an array, got {}",
                    type_name(&other)
                )))
            }
        };

        Ok(DashboardPayload {
            id,
            title,
            tags,
            extra: map,
        })
    }

    /// Reassemble the full document (reserved keys + extension bag).
    pub fn to_document(&self) -> Value {
        let mut map = self.extra.clone();
        map.insert(
            "id".to_string(),
            self.id.map_or(Value::Null, |id| Value::from(id.0)),
        );
        map.insert("title".to_string(), Value::String(self.title.clone()));
        map.insert(
            "tags".to_string(),
            Value::Array(self.tags.iter().cloned().map(Value::String).collect()),
        );
        Value::Object(map)
    }

    /// Tags trimmed, with empties dropped and duplicates removed.
    ///
    /// First-occurrence order is kept so the stored document reads the way the
    /// caller wrote it.
    pub fn normalized_tags(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .filter(|t| seen.insert(t.to_string()))
            .map(str::to_string)
            .collect()
    }

    /// Approximate encoded size in bytes (for limit checking)
    pub fn size_bytes(&self) -> usize {
        self.to_document().to_string().len()
    }
}

impl Serialize for DashboardPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_document().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DashboardPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let doc = Value::deserialize(deserializer)?;
        DashboardPayload::from_document(doc).map_err(serde::de::Error::custom)
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
