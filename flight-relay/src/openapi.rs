use crate::state::AppState;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub(crate) const HEALTH_TAG: &str = "Health API";
pub(crate) const FLIGHTS_TAG: &str = "Flight Search API";

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = HEALTH_TAG, description = "Health check endpoints"),
        (name = FLIGHTS_TAG, description = "Flight offer search relayed to Amadeus"),
    ),
    info(
        title = "Flight Relay API",
        description = "Amadeus flight search relay",
        version = "0.1.0"
    )
)]
pub(crate) struct ApiDoc;

/// Creates a router for OpenAPI documentation routes
pub(crate) fn router(api_doc: utoipa::openapi::OpenApi) -> Router<AppState> {
    let json_doc = api_doc.clone();
    Router::new()
        .route(
            "/openapi.json",
            get(move || {
                let doc = json_doc.clone();
                async move { Json(doc) }
            }),
        )
        .merge(Scalar::with_url("/scalar", api_doc))
}
