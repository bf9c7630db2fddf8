//! Markdown summary of a [`WeatherReading`].

use crate::model::WeatherReading;

/// Render the Markdown report. Every number is printed with one decimal.
pub fn format_report(reading: &WeatherReading) -> String {
    let location = &reading.location;
    let date = reading.observed_at.format("%Y-%m-%d");
    let time = reading.observed_at.format("%H:%M");

    let mut out = format!(
        "# Weather in {}\n\n**{date} {time} ({})**\n\n{} {}\n\n",
        location.display_name(),
        location.timezone,
        reading.condition.emoji(),
        reading.condition.description(),
    );

    out.push_str(&format!(
        "- Now: {:.1} °C (measured at {time})\n",
        reading.temperature_c
    ));
    out.push_str(&format!(
        "- Max/Min today: {:.1} °C / {:.1} °C\n",
        reading.max_temperature_c, reading.min_temperature_c
    ));
    out.push_str(&format!(
        "- Precipitation (today): {:.1} mm\n",
        reading.precipitation_mm
    ));
    if let Some(wind) = reading.wind_speed_kmh {
        out.push_str(&format!("- Wind speed: {wind:.1} km/h\n"));
    }

    out.push_str("\n_Source: Open-Meteo API_\n");
    out
}
