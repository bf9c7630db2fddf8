//! SVG card for a [`WeatherReading`].

use crate::model::WeatherReading;

const WIDTH: u32 = 600;
const HEIGHT: u32 = 280;

/// Daily precipitation at or above this draws rain.
pub const RAIN_THRESHOLD_MM: f64 = 1.0;
/// Current temperature at or above this draws a sun, when it is not raining.
pub const WARM_THRESHOLD_C: f64 = 25.0;

/// Pictogram drawn on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Sun,
    Cloud,
    Rain,
}

impl Glyph {
    pub fn for_reading(reading: &WeatherReading) -> Self {
        if reading.precipitation_mm >= RAIN_THRESHOLD_MM {
            Glyph::Rain
        } else if reading.temperature_c >= WARM_THRESHOLD_C {
            Glyph::Sun
        } else {
            Glyph::Cloud
        }
    }

    fn name(self) -> &'static str {
        match self {
            Glyph::Sun => "sun",
            Glyph::Cloud => "cloud",
            Glyph::Rain => "rain",
        }
    }

    /// Shapes centred on (0, 0), roughly 120px across.
    fn shapes(self) -> String {
        const CLOUD: &str = r##"<g fill="#cbd5e1"><circle cx="-22" cy="0" r="26"/><circle cx="14" cy="-12" r="32"/><circle cx="42" cy="6" r="20"/><rect x="-48" y="0" width="110" height="26" rx="13"/></g>"##;

        match self {
            Glyph::Sun => {
                let mut rays = String::new();
                for i in 0..8 {
                    let angle = i * 45;
                    rays.push_str(&format!(
                        r#"<line x1="0" y1="-40" x2="0" y2="-56" transform="rotate({angle})"/>"#
                    ));
                }
                format!(
                    r##"<circle cx="0" cy="0" r="30" fill="#facc15"/><g stroke="#facc15" stroke-width="6" stroke-linecap="round">{rays}</g>"##
                )
            }
            Glyph::Cloud => CLOUD.to_string(),
            Glyph::Rain => {
                let mut drops = String::new();
                for x in [-30, -6, 18, 42] {
                    drops.push_str(&format!(
                        r#"<line x1="{x}" y1="36" x2="{}" y2="54"/>"#,
                        x - 6
                    ));
                }
                format!(
                    r##"{CLOUD}<g stroke="#60a5fa" stroke-width="5" stroke-linecap="round">{drops}</g>"##
                )
            }
        }
    }
}

/// Render the SVG image. Output depends only on `reading`.
pub fn render_svg(reading: &WeatherReading) -> String {
    let glyph = Glyph::for_reading(reading);
    let title = escape(&format!(
        "{} - {}",
        reading.location.display_name(),
        reading.observed_at.format("%Y-%m-%d %H:%M")
    ));
    let temp = format!("{:.1} °C", reading.temperature_c);
    let wind = reading
        .wind_speed_kmh
        .map(|w| format!("{w:.1} km/h"))
        .unwrap_or_else(|| "--".to_string());
    let condition = escape(&format!(
        "{} | Wind: {wind}",
        reading.condition.description()
    ));
    let extra = format!(
        "Max {:.1} °C / Min {:.1} °C | Precip {:.1} mm",
        reading.max_temperature_c, reading.min_temperature_c, reading.precipitation_mm
    );
    let glyph_name = glyph.name();
    let shapes = glyph.shapes();
    let card_w = WIDTH - 40;
    let card_h = HEIGHT - 40;
    let glyph_x = card_w - 100;
    let foot_y = HEIGHT - 48;

    format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" xmlns="http://www.w3.org/2000/svg" role="img" aria-label="Weather summary">
  <style>
    .bg {{ fill: #0b1220; }}
    .card {{ fill: #0f1724; stroke: #1f2937; stroke-width: 1; }}
    .title {{ font: 20px 'Segoe UI', Roboto, Arial; fill: #e6eef8; }}
    .temp {{ font: 56px 'Segoe UI', Roboto, Arial; fill: #ffffff; font-weight: 700; }}
    .meta {{ font: 14px 'Segoe UI', Roboto, Arial; fill: #cbd5e1; }}
    .foot {{ font: 12px 'Segoe UI', Roboto, Arial; fill: #94a3b8; }}
  </style>
  <rect class="bg" width="100%" height="100%"/>
  <g transform="translate(20,20)">
    <rect class="card" x="0" y="0" width="{card_w}" height="{card_h}" rx="12"/>
    <text class="title" x="24" y="38">{title}</text>
    <g class="glyph" data-glyph="{glyph_name}" transform="translate({glyph_x},100)">{shapes}</g>
    <text class="temp" x="24" y="120">{temp}</text>
    <text class="meta" x="24" y="160">{condition}</text>
    <text class="meta" x="24" y="185">{extra}</text>
    <text class="foot" x="24" y="{foot_y}">Source: Open-Meteo</text>
  </g>
</svg>
"##
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
