use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{
    config::ApiConfig,
    error::WeatherError,
    model::{Location, WeatherCondition, WeatherReading},
};

use super::WeatherProvider;

const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum";

/// Open-Meteo forecast endpoint: current weather plus one day of aggregates.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(api: &ApiConfig) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .user_agent(api.user_agent.as_str())
            .build()?;

        Ok(Self {
            base_url: api.base_url.clone(),
            http,
        })
    }

    fn query(location: &Location) -> [(&'static str, String); 6] {
        [
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("current_weather", "true".to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("forecast_days", "1".to_string()),
            ("timezone", location.timezone.to_string()),
        ]
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn current(&self, location: &Location) -> Result<WeatherReading, WeatherError> {
        let request = self
            .http
            .get(&self.base_url)
            .query(&Self::query(location))
            .build()?;
        tracing::info!("Fetching {}", request.url());

        let res = self.http.execute(request).await.inspect_err(|e| {
            tracing::warn!("Open-Meteo request failed: {e}");
        })?;

        let status = res.status();
        let body = res.text().await?;
        tracing::debug!("Open-Meteo answered {status} with {} bytes", body.len());

        if !status.is_success() {
            return Err(WeatherError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        parse_forecast(&body, location)
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    temperature: Option<f64>,
    time: Option<String>,
    windspeed: Option<f64>,
    weathercode: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    temperature_2m_max: Option<Vec<Option<f64>>>,
    temperature_2m_min: Option<Vec<Option<f64>>>,
    precipitation_sum: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Deserialize)]
struct OmResponse {
    current_weather: Option<OmCurrent>,
    daily: Option<OmDaily>,
}

/// Parse an Open-Meteo forecast body into a reading for `location`.
///
/// Every value the report shows must be present; a missing object, a missing or
/// empty daily array, or a `null` first entry is a [`WeatherError::Parse`].
pub fn parse_forecast(body: &str, location: &Location) -> Result<WeatherReading, WeatherError> {
    let parsed: OmResponse = serde_json::from_str(body)?;

    let current = parsed
        .current_weather
        .ok_or_else(|| WeatherError::parse("response has no `current_weather` object"))?;
    let daily = parsed
        .daily
        .ok_or_else(|| WeatherError::parse("response has no `daily` object"))?;

    let temperature_c = current
        .temperature
        .ok_or_else(|| WeatherError::parse("`current_weather.temperature` is missing"))?;
    let time = current
        .time
        .ok_or_else(|| WeatherError::parse("`current_weather.time` is missing"))?;

    Ok(WeatherReading {
        location: *location,
        observed_at: parse_local_time(&time)?,
        temperature_c,
        max_temperature_c: first_daily(daily.temperature_2m_max, "temperature_2m_max")?,
        min_temperature_c: first_daily(daily.temperature_2m_min, "temperature_2m_min")?,
        precipitation_mm: first_daily(daily.precipitation_sum, "precipitation_sum")?,
        wind_speed_kmh: current.windspeed,
        condition: WeatherCondition::from_wmo_code(current.weathercode),
    })
}

fn first_daily(values: Option<Vec<Option<f64>>>, field: &str) -> Result<f64, WeatherError> {
    let values =
        values.ok_or_else(|| WeatherError::parse(format!("`daily.{field}` is missing")))?;

    values
        .first()
        .copied()
        .flatten()
        .ok_or_else(|| WeatherError::parse(format!("`daily.{field}` has no value for today")))
}

/// Open-Meteo returns local ISO-8601 without offset, usually without seconds.
fn parse_local_time(raw: &str) -> Result<NaiveDateTime, WeatherError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| WeatherError::parse(format!("invalid timestamp '{raw}': {e}")))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
