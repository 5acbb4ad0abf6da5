use travel_planner_core::enrichment::CityService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly by the health probe.
    pub pool: travel_planner_db::DbPool,
    pub cities: CityService,
}
