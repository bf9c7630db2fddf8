use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{WeatherError, WeatherReading, report::format_report, render::render_svg};

/// The report and image of a single run.
///
/// Only constructible from one reading, so the two files never mix data from
/// different fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    report: String,
    image: String,
}

impl Artifacts {
    pub fn from_reading(reading: &WeatherReading) -> Self {
        Self {
            report: format_report(reading),
            image: render_svg(reading),
        }
    }

    pub fn report(&self) -> &str {
        &self.report
    }

    pub fn image(&self) -> &str {
        &self.image
    }
}

/// Overwrites the report and the image at fixed paths.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    report_path: PathBuf,
    image_path: PathBuf,
}

impl ArtifactWriter {
    pub fn new(report_path: impl Into<PathBuf>, image_path: impl Into<PathBuf>) -> Self {
        Self {
            report_path: report_path.into(),
            image_path: image_path.into(),
        }
    }

    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    pub fn image_path(&self) -> &Path {
        &self.image_path
    }

    /// Write the report, then the image. Stops at the first failure; a report
    /// written before a failed image write is left in place.
    pub fn write(&self, artifacts: &Artifacts) -> Result<(), WeatherError> {
        overwrite(&self.report_path, artifacts.report())?;
        overwrite(&self.image_path, artifacts.image())?;
        Ok(())
    }
}

fn overwrite(path: &Path, contents: &str) -> Result<(), WeatherError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| WeatherError::io(parent, e))?;
    }

    fs::write(path, contents).map_err(|e| {
        tracing::warn!("Could not write {}: {e}", path.display());
        WeatherError::io(path, e)
    })?;

    tracing::info!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}
