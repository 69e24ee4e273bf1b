use checkin_config::ClientConfig;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::retry::RetryPolicy;
use crate::types::{CheckinRequest, CheckinResponse};

/// Message used when a failure body carries no `error` field
const DEFAULT_FAILURE_MESSAGE: &str = "Request failed";

/// Typed client for the check-in API
///
/// Holds no per-call state; concurrent calls run independent retry sequences.
#[derive(Debug, Clone)]
pub struct CheckinClient {
    base_url: String,
    http: reqwest::Client,
    policy: RetryPolicy,
}

impl CheckinClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built
    pub fn new(config: &ClientConfig) -> Result<Self> {
        url::Url::parse(&config.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL '{}': {e}", config.base_url)))?;

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            http,
            policy: RetryPolicy::from_config(config),
        })
    }

    /// Replace the retry policy
    #[must_use]
    pub const fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Check a student in
    ///
    /// # Errors
    ///
    /// Returns `Api` when the server rejects the identifier, or a transport
    /// error once retries are exhausted
    pub async fn check_in(&self, student_id: &str) -> Result<CheckinResponse> {
        let request = CheckinRequest {
            student_id: student_id.to_owned(),
        };

        self.post("/api/checkin", &request).await
    }

    /// POST a JSON payload to `endpoint` and decode the JSON reply
    ///
    /// Transport failures are retried under the client's policy. Any received
    /// response ends the call: non-success statuses become
    /// [`ClientError::Api`] without a retry.
    ///
    /// # Errors
    ///
    /// Returns `Api` for non-success statuses, `Parse` when a success body
    /// does not decode as `T`, or the last transport error
    pub async fn post<B, T>(&self, endpoint: &str, payload: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.make_url(endpoint);
        let body = serde_json::to_vec(payload)
            .map_err(|e| ClientError::Config(format!("failed to serialize request body: {e}")))?;

        // The deadline covers the body read as well as the response head
        let (status, bytes) = self
            .policy
            .execute(|_attempt| {
                let request = self
                    .http
                    .post(&url)
                    .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                    .header(ACCEPT, HeaderValue::from_static("application/json"))
                    .body(body.clone());

                async move {
                    let response = request.send().await.map_err(ClientError::from_http)?;
                    let status = response.status();
                    let bytes = response.bytes().await.map_err(ClientError::from_http)?;
                    Ok((status, bytes))
                }
            })
            .await?;

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(e.to_string()))
        } else {
            Err(failure_from_body(status.as_u16(), &bytes))
        }
    }

    /// Concatenate the base address with an endpoint
    fn make_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }
}

/// Build an application failure from a non-success body
///
/// Servers are expected to always send the JSON wire error; a body that is
/// not JSON is kept as `null` data with the default message.
fn failure_from_body(status: u16, bytes: &[u8]) -> ClientError {
    let data: Value = serde_json::from_slice(bytes).unwrap_or(Value::Null);

    let message = data
        .get("error")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_FAILURE_MESSAGE)
        .to_owned();

    ClientError::Api { status, message, data }
}
