use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One visible validation message, keyed by the camelCase field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("unknown court order field `{0}`")]
    UnknownField(String),
    #[error("malformed draft: {0}")]
    Malformed(#[from] serde_json::Error),
}
