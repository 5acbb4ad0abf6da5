//! Liveness report for the city API.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use travel_planner_db::DbPool;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    /// The process is up but cities cannot be read or stored.
    Degraded,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub status: HealthStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl ServiceHealth {
    /// Every city operation goes through the database, so its reachability
    /// decides the overall status. The weather API is not probed.
    pub async fn probe(pool: &DbPool) -> Self {
        let db_healthy = match travel_planner_db::health_check(pool).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Health probe could not reach the database");
                false
            }
        };

        Self {
            status: if db_healthy {
                HealthStatus::Ok
            } else {
                HealthStatus::Degraded
            },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<ServiceHealth> {
    Json(ServiceHealth::probe(&state.pool).await)
}
