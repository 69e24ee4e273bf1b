#![allow(clippy::must_use_candidate)]

pub mod client;
pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use client::*;
pub use cors::*;
pub use env::ExpandError;
pub use health::*;
pub use server::*;
pub use telemetry::*;

/// Top-level check-in service configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Inbound server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Outbound client configuration (base address, retry and timeout policy)
    #[serde(default)]
    pub client: ClientConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
