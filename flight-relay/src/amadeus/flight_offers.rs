//! Flight Offers Search call against the Amadeus API

use crate::models::SearchQuery;
use http::StatusCode;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use url::Url;

/// Response from the flight-offers endpoint, successful or not
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    /// Body exactly as received
    pub raw: String,
    /// Parsed body, or `{"raw": ...}` when the body is not JSON
    pub body: Value,
}

/// Parses an upstream body, wrapping non-JSON text instead of failing
pub fn parse_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "raw": text }))
}

/// Issues the flight-offers GET with the given bearer token
pub async fn fetch_flight_offers(
    client: &Client,
    url: &Url,
    token: &str,
    query: &SearchQuery,
) -> Result<UpstreamResponse, reqwest::Error> {
    debug!(
        "Searching flight offers {} -> {} on {}",
        query.origin, query.destination, query.departure_date
    );

    let response = client
        .get(url.clone())
        .bearer_auth(token)
        .query(&query.to_query_pairs())
        .send()
        .await?;

    let status = response.status();
    let raw = response.text().await?;
    let body = parse_body(&raw);

    Ok(UpstreamResponse { status, raw, body })
}
