use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use travel_planner_weather::DEFAULT_API_URL;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Origins allowed to call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `CORS_ORIGINS=*`: any origin.
    Any,
    /// An explicit allow-list.
    List(Vec<HeaderValue>),
}

impl FromStr for CorsOrigins {
    type Err = ();

    /// Parse a comma-separated origin list. `*` must stand alone.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entries: Vec<&str> = s
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect();

        if entries.contains(&"*") {
            return if entries.len() == 1 { Ok(Self::Any) } else { Err(()) };
        }

        entries
            .into_iter()
            .map(|origin| HeaderValue::from_str(origin).map_err(|_| ()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::List)
    }
}

/// OpenWeather client settings.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// Current-weather endpoint (default: OpenWeather public API).
    pub api_url: String,
    /// API key sent as the `appid` query parameter.
    pub api_key: String,
    /// Per-request timeout in seconds (default: `10`).
    pub timeout_secs: u64,
}

impl WeatherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Server configuration loaded from environment variables.
///
/// Everything except the database URL and the OpenWeather API key has a
/// default suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// PostgreSQL connection string.
    pub database_url: String,
    pub log_format: LogFormat,
    pub weather: WeatherConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                           |
    /// |------------------------|---------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                         |
    /// | `PORT`                 | `3000`                                            |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` (`*` for any origin)      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                              |
    /// | `DATABASE_URL`         | required                                          |
    /// | `LOG_FORMAT`           | `pretty`                                          |
    /// | `OPENWEATHER_API_KEY`  | required                                          |
    /// | `OPENWEATHER_API_URL`  | `https://api.openweathermap.org/data/2.5/weather` |
    /// | `WEATHER_TIMEOUT_SECS` | `10`                                              |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 3000)?;

        let cors_origins = parse_or(
            &lookup,
            "CORS_ORIGINS",
            CorsOrigins::List(vec![HeaderValue::from_static("http://localhost:5173")]),
        )?;

        let request_timeout_secs = parse_secs(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;
        let database_url = required(&lookup, "DATABASE_URL")?;
        let log_format = parse_or(&lookup, "LOG_FORMAT", LogFormat::Pretty)?;

        let weather = WeatherConfig {
            api_url: lookup("OPENWEATHER_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into()),
            api_key: required(&lookup, "OPENWEATHER_API_KEY")?,
            timeout_secs: parse_secs(&lookup, "WEATHER_TIMEOUT_SECS", 10)?,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            log_format,
            weather,
        })
    }
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(var))
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigError::Invalid { var, value }),
        },
    }
}

/// A timeout in whole seconds. Zero would fail every request, so it is rejected.
fn parse_secs<F>(lookup: &F, var: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_or(lookup, var, default)? {
        0 => Err(ConfigError::Invalid {
            var,
            value: "0".to_string(),
        }),
        secs => Ok(secs),
    }
}
