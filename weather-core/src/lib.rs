//! Core library for the `alamar-weather` report.
//!
//! This crate defines:
//! - Configuration (API endpoint, timeout, output paths)
//! - The fetcher abstraction and its Open-Meteo implementation
//! - Pure formatting of the Markdown report and the SVG image
//! - Writing both artifacts and the sequential run pipeline
//!
//! It is used by the `alamar-weather` binary, which a scheduler invokes twice a day.

pub mod artifact;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod render;
pub mod report;

pub use artifact::{ArtifactWriter, Artifacts};
pub use config::{ApiConfig, Config, OutputConfig};
pub use error::WeatherError;
pub use model::{Location, WeatherCondition, WeatherReading};
pub use provider::{WeatherProvider, provider_from_config};
pub use render::{Glyph, render_svg};
pub use report::format_report;
