//! City records, creation input, and the storage seam.
//!
//! A [`City`] is a snapshot: its weather fields are filled in once when the
//! record is created and never refreshed afterwards.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{CityId, Timestamp};

/// Entity name used in not-found errors.
pub const CITY_ENTITY: &str = "City";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A persisted city enriched with the weather observed at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub country: Option<String>,
    pub weather_description: String,
    /// Degrees Celsius.
    pub temperature: f64,
    pub created_at: Timestamp,
}

/// Request payload for creating a city.
///
/// `name` is optional at the serde level so a missing field surfaces as a
/// validation error rather than a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCity {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// A validated, weather-enriched city ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCity {
    pub name: String,
    pub country: Option<String>,
    pub weather_description: String,
    pub temperature: f64,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a city name, returning it trimmed.
pub fn validate_city_name(name: Option<&str>) -> Result<&str, CoreError> {
    match name.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed),
        _ => Err(CoreError::Validation("City name is required".to_string())),
    }
}

/// Normalize an optional country: blank values are treated as absent.
pub fn normalize_country(country: Option<&str>) -> Option<String> {
    country
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

/// Parse an opaque identifier from the API boundary.
///
/// Returns `None` when the value is not a well-formed id, in which case it
/// cannot name any stored record.
pub fn parse_city_id(raw: &str) -> Option<CityId> {
    CityId::parse_str(raw.trim()).ok()
}

// ---------------------------------------------------------------------------
// Storage seam
// ---------------------------------------------------------------------------

/// Persistence for city records.
///
/// Each operation touches a single record; implementations are expected to
/// make each one atomic.
#[async_trait]
pub trait CityStore: Send + Sync {
    /// Insert a record, returning it with its generated id and timestamp.
    async fn insert(&self, city: &NewCity) -> Result<City, CoreError>;

    /// All stored records in insertion order.
    async fn list(&self) -> Result<Vec<City>, CoreError>;

    async fn find_by_id(&self, id: CityId) -> Result<Option<City>, CoreError>;

    /// Delete a record. Returns `true` if a row was removed.
    async fn delete_by_id(&self, id: CityId) -> Result<bool, CoreError>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
