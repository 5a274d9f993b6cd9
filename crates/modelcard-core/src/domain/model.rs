//! Model description type.
//!
//! `ModelDescription` is the local stand-in for a provider SDK's model
//! type: it exposes exactly the fields the report needs and nothing else.

use serde::{Deserialize, Serialize};

use super::record::ModelRecord;
use crate::error::ModelError;

/// A model description with every required field present.
///
/// Field contents are never validated: empty strings and zero limits are
/// legitimate values and are reported as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescription {
    /// Resource identifier of the model (e.g., "models/gemini-1.5-flash").
    pub name: String,
    /// Human-friendly label.
    pub display_name: String,
    /// Free-text summary.
    pub description: String,
    /// Maximum number of input tokens accepted by the model.
    pub input_token_limit: u64,
    /// Maximum number of output tokens the model can produce.
    pub output_token_limit: u64,
}

impl ModelDescription {
    /// Create a new model description.
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
        input_token_limit: u64,
        output_token_limit: u64,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            description: description.into(),
            input_token_limit,
            output_token_limit,
        }
    }
}

impl TryFrom<ModelRecord> for ModelDescription {
    type Error = ModelError;

    /// Fields are checked in declaration order; the first absent one is
    /// reported.
    fn try_from(record: ModelRecord) -> Result<Self, Self::Error> {
        fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ModelError> {
            value.ok_or(ModelError::MissingField { field })
        }

        Ok(Self {
            name: required(record.name, "name")?,
            display_name: required(record.display_name, "display_name")?,
            description: required(record.description, "description")?,
            input_token_limit: required(record.input_token_limit, "input_token_limit")?,
            output_token_limit: required(record.output_token_limit, "output_token_limit")?,
        })
    }
}

impl From<ModelDescription> for ModelRecord {
    fn from(model: ModelDescription) -> Self {
        Self {
            name: Some(model.name),
            display_name: Some(model.display_name),
            description: Some(model.description),
            input_token_limit: Some(model.input_token_limit),
            output_token_limit: Some(model.output_token_limit),
        }
    }
}
