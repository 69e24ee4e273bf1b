//! Programmatic configuration builders for integration tests

use std::net::SocketAddr;
use std::time::Duration;

use checkin_config::{ClientConfig, Config, CorsConfig, HealthConfig, ServerConfig};

/// Builder for constructing server test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig {
                        enabled: true,
                        ..HealthConfig::default()
                    },
                    ..ServerConfig::default()
                },
                client: ClientConfig::default(),
                telemetry: None,
            },
        }
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}

/// Client settings with millisecond backoff so retry tests stay fast
pub fn fast_client(base_url: &str, max_retries: u32) -> ClientConfig {
    ClientConfig {
        max_retries,
        initial_backoff: Duration::from_millis(10),
        timeout: Duration::from_secs(5),
        ..ClientConfig::with_base_url(base_url)
    }
}
