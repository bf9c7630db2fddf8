//! Fetch, build and write, in that order.

use crate::{
    WeatherError,
    artifact::{ArtifactWriter, Artifacts},
    model::{Location, WeatherReading},
    provider::WeatherProvider,
};

/// Fetch a reading and build both artifacts from it without touching disk.
pub async fn preview(
    provider: &dyn WeatherProvider,
    location: &Location,
) -> Result<(WeatherReading, Artifacts), WeatherError> {
    let reading = provider.current(location).await?;
    tracing::info!(
        "{} at {}: {:.1} °C (max {:.1}, min {:.1}, precip {:.1} mm)",
        reading.location.name,
        reading.observed_at,
        reading.temperature_c,
        reading.max_temperature_c,
        reading.min_temperature_c,
        reading.precipitation_mm,
    );

    let artifacts = Artifacts::from_reading(&reading);
    Ok((reading, artifacts))
}

/// One scheduled run. Nothing is written unless fetching and parsing succeeded.
pub async fn run(
    provider: &dyn WeatherProvider,
    location: &Location,
    writer: &ArtifactWriter,
) -> Result<WeatherReading, WeatherError> {
    let (reading, artifacts) = preview(provider, location).await?;
    writer.write(&artifacts)?;
    Ok(reading)
}
