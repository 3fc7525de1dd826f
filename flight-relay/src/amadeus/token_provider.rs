//! OAuth 2.0 client-credentials token acquisition for the Amadeus API

use crate::amadeus::credentials::CredentialCache;
use http::StatusCode;
use log::{debug, error, info};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Token lifetime assumed when the token endpoint omits `expires_in`
pub const DEFAULT_EXPIRES_IN: u64 = 1799;

/// Errors that can occur while obtaining an access token
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Token endpoint returned {status}")]
    Rejected { status: StatusCode, body: String },
    #[error("Malformed token response: {0}")]
    Malformed(String),
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Hands out a valid bearer token, fetching a new one when the cache runs dry
pub struct TokenProvider {
    client: Client,
    token_url: Url,
    client_id: String,
    client_secret: String,
    cache: CredentialCache,
}

impl TokenProvider {
    pub fn new(client: Client, token_url: Url, client_id: String, client_secret: String) -> Self {
        Self {
            client,
            token_url,
            client_id,
            client_secret,
            cache: CredentialCache::new(),
        }
    }

    /// The cache backing this provider
    pub fn cache(&self) -> &CredentialCache {
        &self.cache
    }

    /// Returns the cached token, or fetches and caches a fresh one.
    ///
    /// Concurrent callers that all miss the cache each issue their own token
    /// request; whichever write lands last is kept.
    pub async fn ensure_token(&self) -> Result<String, TokenError> {
        if let Some(token) = self.cache.read().await {
            debug!("Using cached Amadeus access token");
            return Ok(token);
        }

        self.fetch_token().await
    }

    async fn fetch_token(&self) -> Result<String, TokenError> {
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        debug!("Requesting Amadeus access token from {}", self.token_url);
        let response = self
            .client
            .post(self.token_url.clone())
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Amadeus token endpoint returned {}: {}", status, body);
            return Err(TokenError::Rejected { status, body });
        }

        let parsed: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse Amadeus token response: {}", e);
            TokenError::Malformed(e.to_string())
        })?;

        if parsed.access_token.is_empty() {
            return Err(TokenError::Malformed("empty access_token".to_string()));
        }

        let expires_in = parsed.expires_in.unwrap_or(DEFAULT_EXPIRES_IN);
        self.cache
            .write(parsed.access_token.clone(), Duration::from_secs(expires_in))
            .await;

        info!("Obtained new Amadeus access token, expires in {}s", expires_in);
        Ok(parsed.access_token)
    }
}
