use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::HttpError;

/// The only body ever returned for a failed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Human-readable message
    pub error: String,
    /// Stable machine-readable code
    pub code: String,
    /// Structured payload, present only when the failure supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl WireErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            code: code.into(),
            details: None,
        }
    }

    /// Build the wire body for any [`HttpError`]
    pub fn from_error<E: HttpError + ?Sized>(error: &E) -> Self {
        Self {
            success: false,
            error: error.client_message(),
            code: error.error_code().to_owned(),
            details: error.details().cloned(),
        }
    }
}
