use std::time::Duration;

/// Client-specific result type
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors from the check-in client
///
/// `Transport` and `Timeout` mean no response was received and are the only
/// variants the retry executor acts on. Everything else describes a response
/// that did arrive.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (refused, reset, DNS, ...)
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// A single attempt exceeded its deadline
    #[error("request timeout after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// The server responded with a non-success status
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// The body's `error` field, or `Request failed`
        message: String,
        /// Full parsed body (`null` when the body was not JSON)
        data: serde_json::Value,
    },

    /// A success body could not be decoded
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// Invalid configuration or request construction
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Wrap any error as a transport failure
    pub fn transport(error: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Transport(error.into())
    }

    /// Classify an HTTP client failure
    ///
    /// A request that could not be built never reached the network and is a
    /// configuration error. Everything else (connect, send, body read) means
    /// no complete response arrived.
    pub fn from_http(error: reqwest::Error) -> Self {
        if error.is_builder() {
            Self::Config(format!("invalid request: {error}"))
        } else {
            Self::transport(error)
        }
    }

    /// Whether this failure happened before a response was received
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout(_))
    }

    /// HTTP status of an application failure
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Stable server error code, when the failure body carried one
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { data, .. } => data.get("code").and_then(serde_json::Value::as_str),
            _ => None,
        }
    }
}
