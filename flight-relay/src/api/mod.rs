pub(crate) mod health;
pub(crate) mod search;

use crate::state::AppState;
use utoipa_axum::{router::OpenApiRouter, routes};

/// Combines all API routes into a single documented router
pub(super) fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(health::health_check))
        .routes(routes!(search::search_flights))
}
