pub(crate) use crate::config::amadeus::{AmadeusConfig, AmadeusEndpoints};
use confique::Config;
use thiserror::Error;

pub mod amadeus;

/// Errors raised while loading configuration at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] confique::Error),
    #[error("{0} must not be empty")]
    EmptyCredential(&'static str),
}

/// Main configuration structure for the flight relay
#[derive(Debug, Config, Clone)]
pub struct RelayConfig {
    /// The port the relay will listen to (default: 3000)
    #[config(env = "PORT", default = 3000)]
    pub port: u16,

    /// Directory served as static assets (default: public)
    #[config(env = "STATIC_DIR", default = "public")]
    pub static_dir: String,

    /// Amadeus API configuration
    #[config(nested)]
    pub amadeus: AmadeusConfig,
}

impl RelayConfig {
    /// Loads the configuration from environment variables.
    ///
    /// Fails when either Amadeus credential is unset or empty.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::builder().env().load()?;
        config.amadeus.env = config.amadeus.env.trim().to_lowercase();

        if config.amadeus.client_id.is_empty() {
            return Err(ConfigError::EmptyCredential("AMADEUS_CLIENT_ID"));
        }
        if config.amadeus.client_secret.is_empty() {
            return Err(ConfigError::EmptyCredential("AMADEUS_CLIENT_SECRET"));
        }

        Ok(config)
    }

    #[cfg(test)]
    pub fn for_test_with_mock(amadeus_mock: &wiremock::MockServer) -> Self {
        Self {
            port: 0, // Let the OS choose a port
            static_dir: "public".to_string(),
            amadeus: AmadeusConfig {
                env: "test".to_string(),
                client_id: "test-client-id".to_string(),
                client_secret: "test-client-secret".to_string(),
                base_url: Some(amadeus_mock.uri()),
                client_timeout: 5,
            },
        }
    }
}
