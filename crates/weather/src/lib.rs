//! OpenWeather REST client.
//!
//! Implements the service's [`WeatherLookup`](travel_planner_core::weather::WeatherLookup)
//! seam against the OpenWeather current-weather endpoint.

pub mod client;

pub use client::{OpenWeatherClient, OpenWeatherError, DEFAULT_API_URL};
