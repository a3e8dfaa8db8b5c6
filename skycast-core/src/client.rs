use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt::Debug;

use crate::error::FetchError;
use crate::icons::Icon;
use crate::model::WeatherRecord;

/// Production OpenWeather host.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Upper bound on geocoding candidates per query.
const SUGGESTION_LIMIT: u8 = 5;

const GEOCODING_ENDPOINT: &str = "geocoding";
const WEATHER_ENDPOINT: &str = "current weather";

/// Source of suggestions and current conditions.
///
/// The interactive surface talks to this trait so it can be exercised
/// against a mock without a network.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Candidate city names for a partial query, deduplicated, ≤5 entries.
    async fn suggest(&self, query: &str) -> Result<Vec<String>, FetchError>;

    /// Current conditions for a city, normalized for display.
    async fn current(&self, city: &str) -> Result<WeatherRecord, FetchError>;
}

/// HTTP client for OpenWeather's geocoding and current-weather endpoints.
///
/// The API key is injected at construction; nothing here reads ambient
/// process state.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different host. Used by tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    async fn get_text(
        &self,
        endpoint: &'static str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<String, FetchError> {
        let url = format!("{}{}", self.base_url, path);

        let res = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| FetchError::Transport { endpoint, source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| FetchError::Transport { endpoint, source })?;

        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint,
                status,
                body: truncate_body(&body),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn suggest(&self, query: &str) -> Result<Vec<String>, FetchError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let limit = SUGGESTION_LIMIT.to_string();
        let body = self
            .get_text(
                GEOCODING_ENDPOINT,
                "/geo/1.0/direct",
                &[
                    ("q", query),
                    ("limit", limit.as_str()),
                    ("appid", self.api_key.as_str()),
                ],
            )
            .await?;

        let places: Vec<GeoPlace> = serde_json::from_str(&body).map_err(|source| {
            FetchError::Decode {
                endpoint: GEOCODING_ENDPOINT,
                source,
            }
        })?;

        tracing::debug!(query, candidates = places.len(), "geocoding lookup done");

        Ok(dedup_names(places.into_iter().map(|p| p.name)))
    }

    async fn current(&self, city: &str) -> Result<WeatherRecord, FetchError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(FetchError::MissingCity);
        }

        let body = self
            .get_text(
                WEATHER_ENDPOINT,
                "/data/2.5/weather",
                &[
                    ("q", city),
                    ("units", "metric"),
                    ("appid", self.api_key.as_str()),
                ],
            )
            .await?;

        let payload: CurrentPayload = serde_json::from_str(&body).map_err(|source| {
            FetchError::Decode {
                endpoint: WEATHER_ENDPOINT,
                source,
            }
        })?;

        Ok(record_from_payload(payload))
    }
}

/// Drop repeated names, keeping the first occurrence of each.
fn dedup_names(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names.filter(|name| seen.insert(name.clone())).collect()
}

/// Normalize a current-conditions payload into the display record.
///
/// Temperature is floored, not rounded. A payload with no `weather` entry
/// resolves to the default icon.
fn record_from_payload(payload: CurrentPayload) -> WeatherRecord {
    let code = payload
        .weather
        .first()
        .map(|w| w.icon.as_str())
        .unwrap_or("");

    WeatherRecord {
        temperature_c: payload.main.temp.floor() as i32,
        location: payload.name,
        humidity_pct: payload.main.humidity,
        wind_speed_mps: payload.wind.speed,
        icon: Icon::for_code(code),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[derive(Debug, Deserialize)]
struct GeoPlace {
    name: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct CurrentPayload {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Unroutable per RFC 5737; any attempt to talk to it would fail, so a
    // passing test proves no request was ever issued.
    fn offline_client() -> OpenWeatherClient {
        OpenWeatherClient::with_base_url("TESTKEY".into(), "http://192.0.2.1".into())
    }

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let names = ["Paris", "Paris", "London"].map(String::from);
        assert_eq!(dedup_names(names.into_iter()), vec!["Paris", "London"]);
    }

    #[test]
    fn dedup_handles_interleaved_duplicates() {
        let names = ["Springfield", "Oslo", "Springfield", "Oslo", "Springfield"].map(String::from);
        assert_eq!(dedup_names(names.into_iter()), vec!["Springfield", "Oslo"]);
    }

    #[test]
    fn dedup_of_empty_input_is_empty() {
        assert!(dedup_names(std::iter::empty()).is_empty());
    }

    #[tokio::test]
    async fn empty_query_returns_empty_without_network() {
        let suggestions = offline_client().suggest("   ").await.unwrap();
        assert!(suggestions.is_empty());
    }

    #[tokio::test]
    async fn empty_city_is_missing_input_without_network() {
        let err = offline_client().current("  ").await.unwrap_err();
        assert!(matches!(err, FetchError::MissingCity));
    }

    #[test]
    fn temperature_is_floored_not_rounded() {
        let payload: CurrentPayload = serde_json::from_str(
            r#"{
                "name": "Paris",
                "main": {"temp": 21.9, "humidity": 64},
                "weather": [{"icon": "02d"}],
                "wind": {"speed": 3.6}
            }"#,
        )
        .unwrap();

        let record = record_from_payload(payload);
        assert_eq!(record.temperature_c, 21);
        assert_eq!(record.location, "Paris");
        assert_eq!(record.humidity_pct, 64);
        assert_eq!(record.icon, Icon::Clouds);
    }

    #[test]
    fn negative_temperature_floors_downward() {
        let payload: CurrentPayload = serde_json::from_str(
            r#"{
                "name": "Oslo",
                "main": {"temp": -0.3, "humidity": 80},
                "weather": [{"icon": "13n"}],
                "wind": {"speed": 1.2}
            }"#,
        )
        .unwrap();

        let record = record_from_payload(payload);
        assert_eq!(record.temperature_c, -1);
        assert_eq!(record.icon, Icon::Snow);
    }

    #[test]
    fn unknown_condition_code_gets_default_icon() {
        let payload: CurrentPayload = serde_json::from_str(
            r#"{
                "name": "Nowhere",
                "main": {"temp": 10.0, "humidity": 50},
                "weather": [{"icon": "99x"}],
                "wind": {"speed": 0.0}
            }"#,
        )
        .unwrap();

        assert_eq!(record_from_payload(payload).icon, crate::icons::DEFAULT_ICON);
    }

    #[test]
    fn missing_weather_entry_gets_default_icon() {
        let payload: CurrentPayload = serde_json::from_str(
            r#"{
                "name": "Nowhere",
                "main": {"temp": 10.0, "humidity": 50},
                "weather": [],
                "wind": {"speed": 0.0}
            }"#,
        )
        .unwrap();

        assert_eq!(record_from_payload(payload).icon, crate::icons::DEFAULT_ICON);
    }

    #[test]
    fn geocoding_payload_tolerates_extra_fields() {
        let places: Vec<GeoPlace> = serde_json::from_str(
            r#"[
                {"name": "Paris", "lat": 48.85, "lon": 2.35, "country": "FR"},
                {"name": "Paris", "lat": 33.66, "lon": -95.55, "country": "US"}
            ]"#,
        )
        .unwrap();

        let names = dedup_names(places.into_iter().map(|p| p.name));
        assert_eq!(names, vec!["Paris"]);
    }
}
