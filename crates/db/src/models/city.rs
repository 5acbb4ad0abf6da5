//! Row mapping for the `cities` table.

use sqlx::FromRow;
use travel_planner_core::city::City;
use travel_planner_core::types::{CityId, Timestamp};

/// A row from the `cities` table.
#[derive(Debug, Clone, FromRow)]
pub struct CityRow {
    pub id: CityId,
    pub name: String,
    pub country: Option<String>,
    pub weather_description: String,
    pub temperature: f64,
    pub created_at: Timestamp,
}

impl From<CityRow> for City {
    fn from(row: CityRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            country: row.country,
            weather_description: row.weather_description,
            temperature: row.temperature,
            created_at: row.created_at,
        }
    }
}
