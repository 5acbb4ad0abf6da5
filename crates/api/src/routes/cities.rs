//! Route definitions for city records.

use axum::routing::get;
use axum::Router;

use crate::handlers::cities;
use crate::state::AppState;

/// City routes mounted at `/cities`.
///
/// ```text
/// GET    /        -> list_cities
/// POST   /        -> create_city
/// GET    /{id}    -> get_city
/// DELETE /{id}    -> delete_city
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cities::list_cities).post(cities::create_city))
        .route(
            "/{id}",
            get(cities::get_city).delete(cities::delete_city),
        )
}
