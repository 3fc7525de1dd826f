use crate::amadeus::fetch_flight_offers;
use crate::errors::ApiError;
use crate::models::{SearchRequest, ValidationError};
use crate::openapi::FLIGHTS_TAG;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Json, State},
    response::{IntoResponse, Response},
};
use http::StatusCode;
use log::error;
use serde_json::Value;

#[utoipa::path(
    post,
    path = "/api/search-flights",
    tag = FLIGHTS_TAG,
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Flight offers exactly as returned by Amadeus"),
        (status = 400, description = "origin, destination or departureDate missing"),
        (status = 500, description = "Token acquisition or network failure"),
        (status = "default", description = "Amadeus error relayed with its own status")
    )
)]
pub(super) async fn search_flights(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Response {
    let result = match payload {
        Ok(Json(request)) => forward_search(&state, request).await,
        Err(rejection) => Err(ValidationError::InvalidBody(rejection.body_text()).into()),
    };

    match result {
        Ok(offers) => (StatusCode::OK, Json(offers)).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Validates the search, attaches a bearer token and relays it to Amadeus
pub(crate) async fn forward_search(
    state: &AppState,
    request: SearchRequest,
) -> Result<Value, ApiError> {
    let query = request.validate(&state.search_defaults)?;

    let token = state.token_provider.ensure_token().await.map_err(|err| {
        error!("Failed to obtain Amadeus token: {}", err);
        ApiError::from(err)
    })?;

    let upstream = fetch_flight_offers(
        &state.amadeus_client,
        &state.endpoints.flight_offers,
        &token,
        &query,
    )
    .await
    .map_err(|err| {
        error!("Flight offers request failed: {}", err);
        ApiError::from(err)
    })?;

    if !upstream.status.is_success() {
        error!("Amadeus API error {}: {}", upstream.status, upstream.raw);
        return Err(ApiError::Upstream {
            status: upstream.status,
            details: upstream.body,
        });
    }

    Ok(upstream.body)
}
