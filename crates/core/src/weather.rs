//! Weather lookup seam consumed by the enrichment service.

use async_trait::async_trait;

use crate::error::CoreError;

/// Current conditions for a city.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// Human-readable conditions, e.g. `"clear sky"`.
    pub description: String,
    pub temperature_celsius: f64,
}

/// Fetches current weather by city name.
///
/// Implementations should return [`CoreError::WeatherLookup`] for transport
/// failures and responses they cannot interpret.
#[async_trait]
pub trait WeatherLookup: Send + Sync {
    async fn lookup(&self, city_name: &str) -> Result<WeatherReport, CoreError>;
}
