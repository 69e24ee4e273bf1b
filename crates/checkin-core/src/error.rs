use http::StatusCode;
use serde_json::Value;

/// Stable machine-readable error codes
pub mod codes {
    /// No route matched the request
    pub const ROUTE_NOT_FOUND: &str = "ROUTE_NOT_FOUND";
    /// The path exists but not for this method
    pub const METHOD_NOT_ALLOWED: &str = "METHOD_NOT_ALLOWED";
    /// Input failed sanitize/validate or typed deserialization
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    /// Request body was not valid JSON
    pub const INVALID_JSON: &str = "INVALID_JSON";
    /// Request body was not declared as JSON
    pub const UNSUPPORTED_MEDIA_TYPE: &str = "UNSUPPORTED_MEDIA_TYPE";
    /// Request body could not be read
    pub const INVALID_BODY: &str = "INVALID_BODY";
    /// Unclassified server-side defect
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Trait for errors that can be rendered as an HTTP failure
///
/// Implemented by every server-side error type. The error normalizer only
/// talks to this trait, keeping domain errors decoupled from axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Stable machine-readable code (e.g. `VALIDATION_ERROR`)
    fn error_code(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;

    /// Structured payload to attach to the wire response
    fn details(&self) -> Option<&Value> {
        None
    }
}

/// An intentionally raised, expected failure
///
/// Carries everything the wire response needs. The status code is always a
/// client or server error; constructors given anything else record 500.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
    status_code: StatusCode,
    code: String,
    details: Option<Value>,
}

impl ApiError {
    /// Create a new error with the given status, code and message
    pub fn new(status_code: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        let status_code = if status_code.is_client_error() || status_code.is_server_error() {
            status_code
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        Self {
            message: message.into(),
            status_code,
            code: code.into(),
            details: None,
        }
    }

    /// Attach a structured details payload
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// A single-field input validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, codes::VALIDATION_ERROR, message)
    }

    /// No route matched `method` and `path`
    ///
    /// `path` is the path as requested, including any query string.
    pub fn route_not_found(method: &str, path: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            codes::ROUTE_NOT_FOUND,
            format!("{} {path} not found", method.to_ascii_uppercase()),
        )
    }

    /// `path` exists but has no handler for `method`
    pub fn method_not_allowed(method: &str, path: &str) -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            codes::METHOD_NOT_ALLOWED,
            format!("{} {path} not allowed", method.to_ascii_uppercase()),
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub const fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Always true: instances only come from deliberate construction,
    /// as opposed to uncaught defects
    pub const fn is_operational(&self) -> bool {
        true
    }
}

impl HttpError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn error_code(&self) -> &str {
        &self.code
    }

    fn client_message(&self) -> String {
        self.message.clone()
    }

    fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}
