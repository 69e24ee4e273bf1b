use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Outbound client configuration
///
/// Fixed at startup and handed to the client at construction
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Base address prepended to every endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Retries after the first attempt for transport failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Delay before the first retry; doubles for every subsequent retry
    #[serde(default = "default_initial_backoff", deserialize_with = "deserialize_duration")]
    pub initial_backoff: Duration,
    /// Deadline for a single attempt
    #[serde(default = "default_timeout", deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_retries: default_max_retries(),
            initial_backoff: default_initial_backoff(),
            timeout: default_timeout(),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at another base address
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_owned()
}

const fn default_max_retries() -> u32 {
    3
}

const fn default_initial_backoff() -> Duration {
    Duration::from_millis(1000)
}

const fn default_timeout() -> Duration {
    Duration::from_millis(10_000)
}

/// Parse a human duration string such as `"1s"` or `"250ms"`
fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    duration_str::parse(&s).map_err(|e| serde::de::Error::custom(format!("invalid duration '{s}': {e}")))
}
