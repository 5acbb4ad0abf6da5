//! City enrichment service.
//!
//! [`CityService`] validates incoming cities, enriches them with a single
//! weather lookup, and persists the result. Reads and deletes pass straight
//! through to the store.

use std::sync::Arc;

use crate::city::{
    normalize_country, parse_city_id, validate_city_name, City, CityStore, CreateCity, NewCity,
};
use crate::error::CoreError;
use crate::weather::WeatherLookup;

/// Service over the city store and weather lookup collaborators.
///
/// Cheap to clone; both collaborators are shared behind `Arc`.
#[derive(Clone)]
pub struct CityService {
    store: Arc<dyn CityStore>,
    weather: Arc<dyn WeatherLookup>,
}

impl CityService {
    pub fn new(store: Arc<dyn CityStore>, weather: Arc<dyn WeatherLookup>) -> Self {
        Self { store, weather }
    }

    /// Create a city enriched with its current weather.
    ///
    /// Validation happens before any external call. If the lookup fails the
    /// error is returned and nothing is written.
    pub async fn create(&self, input: &CreateCity) -> Result<City, CoreError> {
        let name = validate_city_name(input.name.as_deref())?;
        let country = normalize_country(input.country.as_deref());

        let report = self.weather.lookup(name).await.inspect_err(|e| {
            tracing::warn!(city = %name, error = %e, "Weather lookup failed, city not saved");
        })?;

        let new_city = NewCity {
            name: name.to_string(),
            country,
            weather_description: report.description,
            temperature: report.temperature_celsius,
        };

        let city = self.store.insert(&new_city).await?;

        tracing::info!(
            city_id = %city.id,
            name = %city.name,
            temperature = city.temperature,
            "City created",
        );

        Ok(city)
    }

    pub async fn list(&self) -> Result<Vec<City>, CoreError> {
        self.store.list().await
    }

    /// Look up a city by its opaque id. Unknown or malformed ids yield `None`.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<City>, CoreError> {
        match parse_city_id(id) {
            Some(id) => self.store.find_by_id(id).await,
            None => Ok(None),
        }
    }

    /// Delete a city by its opaque id. Absent ids are a no-op.
    pub async fn delete_by_id(&self, id: &str) -> Result<(), CoreError> {
        let Some(city_id) = parse_city_id(id) else {
            return Ok(());
        };

        if self.store.delete_by_id(city_id).await? {
            tracing::info!(%city_id, "City deleted");
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use super::*;
    use crate::types::CityId;
    use crate::weather::WeatherReport;

    // -- Fakes ----------------------------------------------------------------

    #[derive(Default)]
    struct MemoryStore {
        cities: Mutex<Vec<City>>,
    }

    impl MemoryStore {
        fn len(&self) -> usize {
            self.cities.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CityStore for MemoryStore {
        async fn insert(&self, city: &NewCity) -> Result<City, CoreError> {
            let stored = City {
                id: CityId::new_v4(),
                name: city.name.clone(),
                country: city.country.clone(),
                weather_description: city.weather_description.clone(),
                temperature: city.temperature,
                created_at: chrono::Utc::now(),
            };
            self.cities.lock().unwrap().push(stored.clone());
            Ok(stored)
        }

        async fn list(&self) -> Result<Vec<City>, CoreError> {
            Ok(self.cities.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: CityId) -> Result<Option<City>, CoreError> {
            Ok(self
                .cities
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == id)
                .cloned())
        }

        async fn delete_by_id(&self, id: CityId) -> Result<bool, CoreError> {
            let mut cities = self.cities.lock().unwrap();
            let before = cities.len();
            cities.retain(|c| c.id != id);
            Ok(cities.len() != before)
        }
    }

    /// Weather fake that counts calls and returns a fixed result.
    struct FixedWeather {
        report: Option<WeatherReport>,
        calls: AtomicUsize,
    }

    impl FixedWeather {
        fn ok(description: &str, temperature_celsius: f64) -> Self {
            Self {
                report: Some(WeatherReport {
                    description: description.to_string(),
                    temperature_celsius,
                }),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                report: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WeatherLookup for FixedWeather {
        async fn lookup(&self, _city_name: &str) -> Result<WeatherReport, CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.report
                .clone()
                .ok_or_else(|| CoreError::WeatherLookup("connection refused".to_string()))
        }
    }

    fn service(store: &Arc<MemoryStore>, weather: &Arc<FixedWeather>) -> CityService {
        CityService::new(store.clone(), weather.clone())
    }

    fn input(name: &str, country: Option<&str>) -> CreateCity {
        CreateCity {
            name: Some(name.to_string()),
            country: country.map(str::to_string),
        }
    }

    // -- create ---------------------------------------------------------------

    #[tokio::test]
    async fn create_enriches_with_weather() {
        let store = Arc::new(MemoryStore::default());
        let weather = Arc::new(FixedWeather::ok("clear sky", 21.5));
        let svc = service(&store, &weather);

        let city = svc.create(&input("Berlin", Some("Germany"))).await.unwrap();

        assert_eq!(city.name, "Berlin");
        assert_eq!(city.country.as_deref(), Some("Germany"));
        assert_eq!(city.weather_description, "clear sky");
        assert_eq!(city.temperature, 21.5);
        assert!(!city.id.is_nil());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn create_without_country() {
        let store = Arc::new(MemoryStore::default());
        let weather = Arc::new(FixedWeather::ok("light rain", 9.0));
        let svc = service(&store, &weather);

        let city = svc.create(&input("Nairobi", None)).await.unwrap();
        assert!(city.country.is_none());
    }

    #[tokio::test]
    async fn empty_name_fails_before_lookup_or_write() {
        let store = Arc::new(MemoryStore::default());
        let weather = Arc::new(FixedWeather::ok("clear sky", 21.5));
        let svc = service(&store, &weather);

        let err = svc.create(&input("  ", Some("Germany"))).await.unwrap_err();
        assert_matches!(err, CoreError::Validation(_));

        let err = svc.create(&CreateCity::default()).await.unwrap_err();
        assert_matches!(err, CoreError::Validation(_));

        assert_eq!(weather.calls(), 0);
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn failed_lookup_persists_nothing() {
        let store = Arc::new(MemoryStore::default());
        let weather = Arc::new(FixedWeather::failing());
        let svc = service(&store, &weather);

        let err = svc.create(&input("Atlantis", None)).await.unwrap_err();

        assert_matches!(err, CoreError::WeatherLookup(_));
        assert_eq!(weather.calls(), 1);
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn duplicate_names_are_allowed() {
        let store = Arc::new(MemoryStore::default());
        let weather = Arc::new(FixedWeather::ok("overcast clouds", 14.0));
        let svc = service(&store, &weather);

        let first = svc.create(&input("Paris", None)).await.unwrap();
        let second = svc.create(&input("Paris", None)).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(svc.list().await.unwrap().len(), 2);
    }

    // -- get / delete ---------------------------------------------------------

    #[tokio::test]
    async fn get_after_create_returns_same_record() {
        let store = Arc::new(MemoryStore::default());
        let weather = Arc::new(FixedWeather::ok("clear sky", 21.5));
        let svc = service(&store, &weather);

        let created = svc.create(&input("Berlin", Some("Germany"))).await.unwrap();
        let fetched = svc.get_by_id(&created.id.to_string()).await.unwrap();

        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn get_malformed_id_is_none() {
        let store = Arc::new(MemoryStore::default());
        let weather = Arc::new(FixedWeather::ok("clear sky", 21.5));
        let svc = service(&store, &weather);

        assert_eq!(svc.get_by_id("not-an-id").await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_unknown_id_is_noop() {
        let store = Arc::new(MemoryStore::default());
        let weather = Arc::new(FixedWeather::ok("clear sky", 21.5));
        let svc = service(&store, &weather);

        svc.delete_by_id(&CityId::new_v4().to_string()).await.unwrap();
        svc.delete_by_id("garbage").await.unwrap();
    }

    #[tokio::test]
    async fn deleted_city_is_not_found() {
        let store = Arc::new(MemoryStore::default());
        let weather = Arc::new(FixedWeather::ok("clear sky", 21.5));
        let svc = service(&store, &weather);

        let created = svc.create(&input("Oslo", Some("Norway"))).await.unwrap();
        let id = created.id.to_string();

        svc.delete_by_id(&id).await.unwrap();
        assert_eq!(svc.get_by_id(&id).await.unwrap(), None);

        // Second delete is still fine.
        svc.delete_by_id(&id).await.unwrap();
        assert_eq!(store.len(), 0);
    }
}
