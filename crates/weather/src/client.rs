//! HTTP client for the OpenWeather current-weather API.
//!
//! Sends `GET {api_url}?q={city}&appid={key}&units=metric` and extracts the
//! first condition's description and the metric temperature.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use travel_planner_core::error::CoreError;
use travel_planner_core::weather::{WeatherLookup, WeatherReport};

/// Public current-weather endpoint.
pub const DEFAULT_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Errors from the OpenWeather API layer.
#[derive(Debug, thiserror::Error)]
pub enum OpenWeatherError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    ///
    /// The request URL is stripped because its query carries the API key.
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// OpenWeather returned a non-2xx status code.
    #[error("OpenWeather API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The body was not the expected current-weather JSON.
    #[error("Malformed OpenWeather response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for OpenWeatherError {
    fn from(err: reqwest::Error) -> Self {
        OpenWeatherError::Request(err.without_url())
    }
}

impl From<OpenWeatherError> for CoreError {
    fn from(err: OpenWeatherError) -> Self {
        CoreError::WeatherLookup(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Response shape (only the fields we read)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    weather: Vec<Condition>,
    main: MainReadings,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// OpenWeather client sharing one pooled [`reqwest::Client`].
pub struct OpenWeatherClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    /// Create a client with a per-request timeout.
    ///
    /// * `api_url` - Full endpoint URL, e.g. [`DEFAULT_API_URL`].
    pub fn new(
        api_url: String,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, OpenWeatherError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, api_url, api_key))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_url,
            api_key,
        }
    }

    /// Fetch current conditions for `city_name` in metric units.
    pub async fn current_weather(&self, city_name: &str) -> Result<WeatherReport, OpenWeatherError> {
        tracing::debug!(city = %city_name, "Requesting current weather");

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("q", city_name),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(OpenWeatherError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        parse_current_weather(&bytes)
    }
}

/// Extract description and temperature from a current-weather body.
fn parse_current_weather(body: &[u8]) -> Result<WeatherReport, OpenWeatherError> {
    let parsed: CurrentWeather = serde_json::from_slice(body)
        .map_err(|e| OpenWeatherError::MalformedResponse(e.to_string()))?;

    let condition = parsed.weather.into_iter().next().ok_or_else(|| {
        OpenWeatherError::MalformedResponse("no weather conditions in response".to_string())
    })?;

    Ok(WeatherReport {
        description: condition.description,
        temperature_celsius: parsed.main.temp,
    })
}

#[async_trait]
impl WeatherLookup for OpenWeatherClient {
    async fn lookup(&self, city_name: &str) -> Result<WeatherReport, CoreError> {
        Ok(self.current_weather(city_name).await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
