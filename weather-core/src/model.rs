use chrono::NaiveDateTime;
use serde::Serialize;

/// A fixed point on the map the report is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub name: &'static str,
    pub region: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA zone name; daily aggregates are aligned to this zone's calendar days.
    pub timezone: &'static str,
}

impl Location {
    pub const ALAMAR: Location = Location {
        name: "Alamar",
        region: "Havana, Cuba",
        latitude: 23.15794,
        longitude: -82.27837,
        timezone: "America/Havana",
    };

    /// "Alamar, Havana, Cuba"
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.region)
    }
}

/// Coarse sky condition derived from the WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    ClearSky,
    PartlyCloudy,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
    Cloudy,
    #[default]
    Unknown,
}

impl WeatherCondition {
    /// See: https://open-meteo.com/en/docs#weathervariables
    pub fn from_wmo_code(code: Option<i64>) -> Self {
        let Some(code) = code else {
            return Self::Unknown;
        };

        match code {
            0 => Self::ClearSky,
            1..=3 => Self::PartlyCloudy,
            45..=48 => Self::Fog,
            51..=67 | 80..=82 => Self::Rain,
            71..=77 | 85..=86 => Self::Snow,
            95..=99 => Self::Thunderstorm,
            _ => Self::Cloudy,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Fog => "Fog",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
            Self::Cloudy => "Cloudy",
            Self::Unknown => "Unknown",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::ClearSky => "☀️",
            Self::PartlyCloudy => "🌤️",
            Self::Fog => "🌫️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Thunderstorm => "⛈️",
            Self::Cloudy => "🌥️",
            Self::Unknown => "❓",
        }
    }
}

/// One snapshot of current and today's aggregate weather.
///
/// Built fresh from each API response and never persisted; the report and the
/// image of a run are both derived from the same value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReading {
    pub location: Location,
    /// Local time at `location.timezone`, as reported by the API.
    pub observed_at: NaiveDateTime,
    pub temperature_c: f64,
    pub max_temperature_c: f64,
    pub min_temperature_c: f64,
    pub precipitation_mm: f64,
    pub wind_speed_kmh: Option<f64>,
    pub condition: WeatherCondition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alamar_display_name() {
        assert_eq!(Location::ALAMAR.display_name(), "Alamar, Havana, Cuba");
    }

    #[test]
    fn wmo_code_ranges() {
        assert_eq!(WeatherCondition::from_wmo_code(Some(0)), WeatherCondition::ClearSky);
        assert_eq!(WeatherCondition::from_wmo_code(Some(2)), WeatherCondition::PartlyCloudy);
        assert_eq!(WeatherCondition::from_wmo_code(Some(48)), WeatherCondition::Fog);
        assert_eq!(WeatherCondition::from_wmo_code(Some(61)), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_wmo_code(Some(81)), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_wmo_code(Some(75)), WeatherCondition::Snow);
        assert_eq!(WeatherCondition::from_wmo_code(Some(86)), WeatherCondition::Snow);
        assert_eq!(WeatherCondition::from_wmo_code(Some(96)), WeatherCondition::Thunderstorm);
    }

    #[test]
    fn unlisted_code_is_cloudy_and_missing_code_is_unknown() {
        assert_eq!(WeatherCondition::from_wmo_code(Some(4)), WeatherCondition::Cloudy);
        assert_eq!(WeatherCondition::from_wmo_code(None), WeatherCondition::Unknown);
        assert_eq!(WeatherCondition::Unknown.description(), "Unknown");
    }
}
