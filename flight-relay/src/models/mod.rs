use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Errors raised while turning an inbound search into an upstream query
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("origin, destination and departureDate are required")]
    MissingRequiredFields,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

/// Flight search request as sent by the front-end
#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// IATA code of the departure airport or city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// IATA code of the arrival airport or city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Departure date (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<String>,
    /// Return date (YYYY-MM-DD), omitted for one-way searches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    /// Number of adult travellers (default: 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adults: Option<u32>,
    /// Cabin class (default: ECONOMY)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_class: Option<String>,
    /// Currency for prices (default: EUR)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Only return direct flights (default: false)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_stop: Option<bool>,
    /// Maximum number of offers (default: 10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

/// Values applied to optional search fields the caller left out
#[derive(Debug, Clone, PartialEq)]
pub struct SearchDefaults {
    pub adults: u32,
    pub travel_class: String,
    pub currency: String,
    pub non_stop: bool,
    pub max: u32,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            adults: 1,
            travel_class: "ECONOMY".to_string(),
            currency: "EUR".to_string(),
            non_stop: false,
            max: 10,
        }
    }
}

/// A validated search with every default filled in
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    pub return_date: Option<String>,
    pub adults: u32,
    pub travel_class: String,
    pub currency: String,
    pub non_stop: bool,
    pub max: u32,
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl SearchRequest {
    /// Checks the required fields and applies `defaults` to everything else
    pub fn validate(self, defaults: &SearchDefaults) -> Result<SearchQuery, ValidationError> {
        let (Some(origin), Some(destination), Some(departure_date)) = (
            required(self.origin),
            required(self.destination),
            required(self.departure_date),
        ) else {
            return Err(ValidationError::MissingRequiredFields);
        };

        Ok(SearchQuery {
            origin,
            destination,
            departure_date,
            // An empty return date means a one-way search
            return_date: self.return_date.filter(|d| !d.is_empty()),
            adults: self.adults.unwrap_or(defaults.adults),
            travel_class: self
                .travel_class
                .unwrap_or_else(|| defaults.travel_class.clone()),
            currency: self.currency.unwrap_or_else(|| defaults.currency.clone()),
            non_stop: self.non_stop.unwrap_or(defaults.non_stop),
            max: self.max.unwrap_or(defaults.max),
        })
    }
}

impl SearchQuery {
    /// Query parameters for the Amadeus flight-offers endpoint, in request order
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("originLocationCode", self.origin.clone()),
            ("destinationLocationCode", self.destination.clone()),
            ("departureDate", self.departure_date.clone()),
            ("adults", self.adults.to_string()),
            ("travelClass", self.travel_class.clone()),
            ("currencyCode", self.currency.clone()),
            ("nonStop", self.non_stop.to_string()),
            ("max", self.max.to_string()),
        ];
        if let Some(return_date) = &self.return_date {
            pairs.push(("returnDate", return_date.clone()));
        }
        pairs
    }
}
