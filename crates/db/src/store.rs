//! [`CityStore`] implementation backed by PostgreSQL.

use async_trait::async_trait;
use travel_planner_core::city::{City, CityStore, NewCity};
use travel_planner_core::error::CoreError;
use travel_planner_core::types::CityId;

use crate::repositories::CityRepo;
use crate::DbPool;

/// Postgres-backed city store.
#[derive(Clone)]
pub struct PgCityStore {
    pool: DbPool,
}

impl PgCityStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Log a database error and reduce it to a domain storage error.
fn storage_error(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Database error");
    CoreError::Storage(err.to_string())
}

#[async_trait]
impl CityStore for PgCityStore {
    async fn insert(&self, city: &NewCity) -> Result<City, CoreError> {
        CityRepo::create(&self.pool, city)
            .await
            .map(City::from)
            .map_err(storage_error)
    }

    async fn list(&self) -> Result<Vec<City>, CoreError> {
        let rows = CityRepo::list(&self.pool).await.map_err(storage_error)?;
        Ok(rows.into_iter().map(City::from).collect())
    }

    async fn find_by_id(&self, id: CityId) -> Result<Option<City>, CoreError> {
        CityRepo::find_by_id(&self.pool, id)
            .await
            .map(|row| row.map(City::from))
            .map_err(storage_error)
    }

    async fn delete_by_id(&self, id: CityId) -> Result<bool, CoreError> {
        CityRepo::delete(&self.pool, id).await.map_err(storage_error)
    }
}
