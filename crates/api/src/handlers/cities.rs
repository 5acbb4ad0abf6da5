//! Handlers for city records.
//!
//! Creation enriches the city with current weather before it is stored.
//! Records are never updated afterwards.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use travel_planner_core::city::{CreateCity, CITY_ENTITY};
use travel_planner_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /cities
///
/// Create a city enriched with its current weather. Returns 400 when the
/// name is missing or blank and 502 when the weather lookup fails.
pub async fn create_city(
    State(state): State<AppState>,
    payload: Result<Json<CreateCity>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let city = state.cities.create(&input).await?;

    Ok(Json(city))
}

/// GET /cities
///
/// List all stored cities in insertion order.
pub async fn list_cities(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cities = state.cities.list().await?;

    Ok(Json(cities))
}

/// GET /cities/{id}
///
/// Retrieve a single city by ID.
pub async fn get_city(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let city = state
        .cities
        .get_by_id(&city_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: CITY_ENTITY,
            id: city_id,
        }))?;

    Ok(Json(city))
}

/// DELETE /cities/{id}
///
/// Delete a city. Always 204, whether or not the city existed.
pub async fn delete_city(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state.cities.delete_by_id(&city_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
