//! Client side of the Amadeus Self-Service API
//!
//! - [`credentials`] keeps the current bearer token and its expiry
//! - [`token_provider`] runs the client-credentials grant when the cache is stale
//! - [`flight_offers`] issues the Flight Offers Search request

pub mod credentials;
pub mod flight_offers;
pub mod token_provider;

pub use flight_offers::{fetch_flight_offers, UpstreamResponse};
pub use token_provider::{TokenError, TokenProvider};
