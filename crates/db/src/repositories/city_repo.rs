//! Repository for the `cities` table.

use sqlx::PgPool;
use travel_planner_core::city::NewCity;
use travel_planner_core::types::CityId;

use crate::models::city::CityRow;

/// Column list for `cities` queries.
const COLUMNS: &str = "id, name, country, weather_description, temperature, created_at";

/// Provides data access for city records.
pub struct CityRepo;

impl CityRepo {
    /// Insert a city, returning the row with its generated id.
    pub async fn create(pool: &PgPool, input: &NewCity) -> Result<CityRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO cities (name, country, weather_description, temperature) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CityRow>(&query)
            .bind(&input.name)
            .bind(&input.country)
            .bind(&input.weather_description)
            .bind(input.temperature)
            .fetch_one(pool)
            .await
    }

    /// List all cities in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<CityRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities ORDER BY seq");
        sqlx::query_as::<_, CityRow>(&query).fetch_all(pool).await
    }

    /// Find a city by its ID.
    pub async fn find_by_id(pool: &PgPool, id: CityId) -> Result<Option<CityRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities WHERE id = $1");
        sqlx::query_as::<_, CityRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a city by its ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: CityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
