#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use travel_planner_api::config::{CorsOrigins, LogFormat, ServerConfig, WeatherConfig};
use travel_planner_api::router::build_app_router;
use travel_planner_api::state::AppState;
use travel_planner_core::enrichment::CityService;
use travel_planner_core::error::CoreError;
use travel_planner_core::weather::{WeatherLookup, WeatherReport};
use travel_planner_db::PgCityStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::List(vec![HeaderValue::from_static("http://localhost:5173")]),
        request_timeout_secs: 30,
        database_url: "postgres://unused".to_string(),
        log_format: LogFormat::Pretty,
        weather: WeatherConfig {
            api_url: "http://127.0.0.1:0/unused".to_string(),
            api_key: "test-key".to_string(),
            timeout_secs: 5,
        },
    }
}

/// Weather lookup stub returning a fixed report (or failure) and counting calls.
pub struct StubWeather {
    report: Option<WeatherReport>,
    calls: AtomicUsize,
}

impl StubWeather {
    pub fn clear_sky() -> Arc<Self> {
        Self::returning("clear sky", 21.5)
    }

    pub fn returning(description: &str, temperature_celsius: f64) -> Arc<Self> {
        Arc::new(Self {
            report: Some(WeatherReport {
                description: description.to_string(),
                temperature_celsius,
            }),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            report: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherLookup for StubWeather {
    async fn lookup(&self, _city_name: &str) -> Result<WeatherReport, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.report
            .clone()
            .ok_or_else(|| CoreError::WeatherLookup("upstream unavailable".to_string()))
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and weather lookup.
pub fn build_test_app_with(pool: PgPool, weather: Arc<dyn WeatherLookup>) -> Router {
    build_test_app_from(pool, weather, &test_config())
}

/// Build the application router with an explicit configuration.
pub fn build_test_app_from(
    pool: PgPool,
    weather: Arc<dyn WeatherLookup>,
    config: &ServerConfig,
) -> Router {
    let cities = CityService::new(Arc::new(PgCityStore::new(pool.clone())), weather);

    let state = AppState { pool, cities };

    build_app_router(state, config)
}

/// Build the test app with a weather stub reporting clear sky at 21.5 C.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, StubWeather::clear_sky())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

/// POST a raw body with a JSON content type (for malformed payload tests).
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(body)).await
}

async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
