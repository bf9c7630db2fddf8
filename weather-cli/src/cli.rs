use std::path::{Path, PathBuf};

use alamar_weather_core::{ArtifactWriter, Config, Location, pipeline, provider_from_config};
use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "alamar-weather", version, about = "Weather report for Alamar, Havana")]
pub struct Cli {
    /// Config file; defaults to the platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the Markdown report path.
    #[arg(long, global = true)]
    pub report: Option<PathBuf>,

    /// Override the SVG image path.
    #[arg(long, global = true)]
    pub image: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the weather and overwrite the report and image (default).
    Run,

    /// Fetch the weather and print the report to stdout without writing files.
    Show,

    /// Interactively set output paths and request timeout.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config_path = match self.config {
            Some(p) => p,
            None => Config::config_file_path()?,
        };
        tracing::debug!("Using config file {}", config_path.display());
        let config =
            Config::load_from(&config_path)?.with_output_overrides(self.report, self.image);

        match self.command.unwrap_or(Command::Run) {
            Command::Run => {
                let provider = provider_from_config(&config)?;
                let writer =
                    ArtifactWriter::new(&config.output.report_path, &config.output.image_path);

                pipeline::run(provider.as_ref(), &Location::ALAMAR, &writer)
                    .await
                    .context("Weather run failed")?;
            }
            Command::Show => {
                let provider = provider_from_config(&config)?;
                let (_, artifacts) = pipeline::preview(provider.as_ref(), &Location::ALAMAR)
                    .await
                    .context("Weather fetch failed")?;
                print!("{}", artifacts.report());
            }
            Command::Configure => configure(config, &config_path)?,
        }

        Ok(())
    }
}

fn configure(mut config: Config, path: &Path) -> anyhow::Result<()> {
    let report = Text::new("Markdown report path:")
        .with_default(&config.output.report_path.to_string_lossy())
        .prompt()?;
    let image = Text::new("SVG image path:")
        .with_default(&config.output.image_path.to_string_lossy())
        .prompt()?;
    let timeout = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(config.api.timeout_secs)
        .with_error_message("Please enter a whole number of seconds")
        .prompt()?;

    if timeout == 0 {
        anyhow::bail!("Request timeout must be greater than zero");
    }

    config.output.report_path = PathBuf::from(report);
    config.output.image_path = PathBuf::from(image);
    config.api.timeout_secs = timeout;
    config.save_to(path)?;

    println!("Saved configuration to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_default_run() {
        let cli = Cli::try_parse_from(["alamar-weather"]).expect("should parse");
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn global_path_overrides_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "alamar-weather",
            "show",
            "--report",
            "out/weather.md",
            "--image",
            "out/weather.svg",
        ])
        .expect("should parse");

        assert!(matches!(cli.command, Some(Command::Show)));
        assert_eq!(cli.report, Some(PathBuf::from("out/weather.md")));
        assert_eq!(cli.image, Some(PathBuf::from("out/weather.svg")));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["alamar-weather", "forecast"]).is_err());
    }
}
