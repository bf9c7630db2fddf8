use crate::{Config, Location, WeatherError, WeatherReading, provider::openmeteo::OpenMeteoProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openmeteo;

/// Source of weather readings. The pipeline only talks to this trait, so tests
/// can substitute a canned provider.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, location: &Location) -> Result<WeatherReading, WeatherError>;
}

/// Construct the provider described by `config.api`.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    Ok(Box::new(OpenMeteoProvider::new(&config.api)?))
}
