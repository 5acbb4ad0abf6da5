pub mod cities;

use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Every route the service answers.
///
/// ```text
/// /health                  liveness and database reachability
/// /cities                  list, create
/// /cities/{id}             get, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .nest("/cities", cities::router())
}
