use checkin_core::{ApiError, HttpError, codes};
use http::StatusCode;
use serde_json::Value;

/// Client-facing message for malformed JSON bodies
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON in request body";

/// Client-facing message for unclassified failures
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Every failure a handler or extractor can produce
///
/// Variants are tagged where the failure is detected, so the normalizer never
/// has to guess from message text.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A deliberately raised failure with its own status and code
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The body parsed as JSON but did not have the expected shape
    #[error("{0}")]
    Validation(String),

    /// The body was not valid JSON
    #[error("malformed JSON body: {0}")]
    InvalidJson(String),

    /// Anything else; the message never reaches the client
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl HttpError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Api(e) => e.status_code(),
            Self::Validation(_) | Self::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Self::Api(e) => e.code(),
            Self::Validation(_) => codes::VALIDATION_ERROR,
            Self::InvalidJson(_) => codes::INVALID_JSON,
            Self::Internal(_) => codes::INTERNAL_ERROR,
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Api(e) => e.message().to_owned(),
            Self::Validation(message) => message.clone(),
            Self::InvalidJson(_) => INVALID_JSON_MESSAGE.to_owned(),
            Self::Internal(_) => INTERNAL_MESSAGE.to_owned(),
        }
    }

    fn details(&self) -> Option<&Value> {
        match self {
            Self::Api(e) => e.details(),
            _ => None,
        }
    }
}
