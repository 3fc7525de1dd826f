use crate::amadeus::TokenProvider;
use crate::config::{AmadeusEndpoints, RelayConfig};
use crate::models::SearchDefaults;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while building the application state
#[derive(Debug, Error)]
pub enum StateError {
    #[error("Invalid Amadeus base URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub endpoints: Arc<AmadeusEndpoints>,
    pub amadeus_client: Arc<Client>,
    pub token_provider: Arc<TokenProvider>,
    pub search_defaults: Arc<SearchDefaults>,
}

impl AppState {
    fn create_amadeus_client(timeout: u64) -> Result<Client, reqwest::Error> {
        let mut builder = Client::builder()
            // Configure connection pool
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if timeout > 0 {
            builder = builder
                .timeout(Duration::from_secs(timeout))
                .connect_timeout(Duration::from_secs(timeout));
        }

        builder.build()
    }

    pub fn new(config: &RelayConfig) -> Result<Self, StateError> {
        let endpoints = config.amadeus.endpoints()?;
        let client = AppState::create_amadeus_client(config.amadeus.client_timeout)?;
        let token_provider = TokenProvider::new(
            client.clone(),
            endpoints.token.clone(),
            config.amadeus.client_id.clone(),
            config.amadeus.client_secret.clone(),
        );

        Ok(Self {
            config: Arc::new(config.clone()),
            endpoints: Arc::new(endpoints),
            amadeus_client: Arc::new(client),
            token_provider: Arc::new(token_provider),
            search_defaults: Arc::new(SearchDefaults::default()),
        })
    }
}
