#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Weather lookup failed: {0}")]
    WeatherLookup(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
