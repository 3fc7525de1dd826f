//! Amadeus API configuration

use confique::Config;
use url::Url;

/// Live API host, used when `AMADEUS_ENV` is `production`
pub const PRODUCTION_BASE_URL: &str = "https://api.amadeus.com/";
/// Sandbox API host, used for every other environment
pub const TEST_BASE_URL: &str = "https://test.api.amadeus.com/";

const TOKEN_PATH: &str = "v1/security/oauth2/token";
const FLIGHT_OFFERS_PATH: &str = "v2/shopping/flight-offers";

/// Configuration for the upstream Amadeus API
#[derive(Debug, Config, Clone)]
pub struct AmadeusConfig {
    /// Target environment; "production" selects the live hosts (default: production)
    #[config(env = "AMADEUS_ENV", default = "production")]
    pub env: String,

    /// OAuth 2.0 client id (required)
    #[config(env = "AMADEUS_CLIENT_ID")]
    pub client_id: String,

    /// OAuth 2.0 client secret (required)
    #[config(env = "AMADEUS_CLIENT_SECRET")]
    pub client_secret: String,

    /// Overrides the host picked from `env`
    #[config(env = "AMADEUS_BASE_URL")]
    pub base_url: Option<String>,

    /// Timeout for outbound requests in seconds, 0 disables it (default: 30)
    #[config(env = "AMADEUS_CLIENT_TIMEOUT", default = 30)]
    pub client_timeout: u64,
}

/// Fully resolved upstream endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct AmadeusEndpoints {
    pub token: Url,
    pub flight_offers: Url,
}

impl AmadeusConfig {
    pub fn is_production(&self) -> bool {
        self.env == "production"
    }

    /// Base URL of the API, honouring the override
    pub fn resolved_base_url(&self) -> &str {
        match &self.base_url {
            Some(url) => url,
            None if self.is_production() => PRODUCTION_BASE_URL,
            None => TEST_BASE_URL,
        }
    }

    /// Joins the endpoint paths onto the base URL, keeping any path prefix it has
    pub fn endpoints(&self) -> Result<AmadeusEndpoints, url::ParseError> {
        let mut base = Url::parse(self.resolved_base_url())?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(AmadeusEndpoints {
            token: base.join(TOKEN_PATH)?,
            flight_offers: base.join(FLIGHT_OFFERS_PATH)?,
        })
    }
}
