use std::path::Path;

use crate::{AllowList, Config};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse configuration from raw TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the client base URL is not an absolute URL or
    /// the retry/timeout durations are zero
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_client_config()?;
        self.validate_health_config()?;
        self.validate_cors_config()?;
        Ok(())
    }

    fn validate_client_config(&self) -> anyhow::Result<()> {
        let client = &self.client;

        url::Url::parse(&client.base_url)
            .map_err(|e| anyhow::anyhow!("client.base_url '{}' is not a valid URL: {e}", client.base_url))?;

        if client.initial_backoff.is_zero() {
            anyhow::bail!("client.initial_backoff must be greater than 0");
        }

        if client.timeout.is_zero() {
            anyhow::bail!("client.timeout must be greater than 0");
        }

        Ok(())
    }

    fn validate_health_config(&self) -> anyhow::Result<()> {
        let health = &self.server.health;

        if health.enabled && !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        Ok(())
    }

    fn validate_cors_config(&self) -> anyhow::Result<()> {
        let Some(cors) = &self.server.cors else {
            return Ok(());
        };

        // Credentialed CORS cannot use wildcards
        if cors.credentials
            && [&cors.origins, &cors.methods, &cors.headers]
                .iter()
                .any(|list| matches!(list, AllowList::Any))
        {
            anyhow::bail!("server.cors.credentials requires explicit origins, methods and headers");
        }

        Ok(())
    }
}
