//! Catalog records and record documents.
//!
//! A `ModelRecord` is a model entry exactly as a catalog hands it over:
//! every field may be absent. Documents come in three shapes:
//!
//! - a single record object
//! - an array of records
//! - a listing envelope: `{"models": [...], "nextPageToken": "..."}`
//!
//! An object counts as a listing when it carries `models` or a page token;
//! the provider omits `models` entirely on an empty page.
//!
//! Field names are accepted in `snake_case` and in the provider's
//! `camelCase` spelling. A record that spells the same field both ways is
//! rejected as a parse error (duplicate field).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::error::ModelError;

/// A model entry before required-field checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, alias = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, alias = "inputTokenLimit", skip_serializing_if = "Option::is_none")]
    pub input_token_limit: Option<u64>,
    #[serde(default, alias = "outputTokenLimit", skip_serializing_if = "Option::is_none")]
    pub output_token_limit: Option<u64>,
}

impl ModelRecord {
    /// First required field that is absent, in declaration order.
    pub const fn missing_field(&self) -> Option<&'static str> {
        if self.name.is_none() {
            Some("name")
        } else if self.display_name.is_none() {
            Some("display_name")
        } else if self.description.is_none() {
            Some("description")
        } else if self.input_token_limit.is_none() {
            Some("input_token_limit")
        } else if self.output_token_limit.is_none() {
            Some("output_token_limit")
        } else {
            None
        }
    }

    /// Whether this record's name is `query`, with or without the
    /// `models/` resource prefix.
    pub fn matches_name(&self, query: &str) -> bool {
        self.name.as_deref().is_some_and(|name| {
            name == query || name.strip_prefix("models/") == Some(query)
        })
    }
}

/// A page of records as returned by a model listing call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelListing {
    #[serde(default)]
    pub models: Vec<ModelRecord>,
    #[serde(default, alias = "nextPageToken", skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// Keys that mark an object as a listing page rather than a record.
const LISTING_KEYS: [&str; 3] = ["models", "nextPageToken", "next_page_token"];

/// Parse a record document.
///
/// Only the document shape is checked here; required fields are checked
/// when a record is converted into a `ModelDescription`.
pub fn parse_records(input: &str) -> Result<Vec<ModelRecord>, ModelError> {
    let value: Value = serde_json::from_str(input)?;

    let records = match value {
        Value::Array(_) => serde_json::from_value::<Vec<ModelRecord>>(value)?,
        Value::Object(_) if LISTING_KEYS.iter().any(|key| value.get(key).is_some()) => {
            let listing: ModelListing = serde_json::from_value(value)?;
            if listing.next_page_token.is_some() {
                tracing::debug!("Listing has more pages; only the first page is available");
            }
            listing.models
        }
        Value::Object(_) => vec![serde_json::from_value::<ModelRecord>(value)?],
        other => {
            return Err(ModelError::Parse(format!(
                "expected a record, an array of records or a listing, found {}",
                json_kind(&other)
            )));
        }
    };

    tracing::debug!(count = records.len(), "Parsed model records");
    Ok(records)
}

/// Read and parse a record document from disk.
pub fn read_records(path: &Path) -> Result<Vec<ModelRecord>, ModelError> {
    let content = std::fs::read_to_string(path).map_err(|e| ModelError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_records(&content)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
