use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// How to reach the weather API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("alamar-weather/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Where the two artifacts go. Relative paths resolve against the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub report_path: PathBuf,
    pub image_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from("weather.md"),
            image_path: PathBuf::from("art/weather.svg"),
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// [api]
/// timeout_secs = 20
///
/// [output]
/// report_path = "docs/weather.md"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load config from `path`, or return the defaults if it doesn't exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if cfg.api.timeout_secs == 0 {
            return Err(anyhow!(
                "Invalid config file {}: api.timeout_secs must be greater than zero",
                path.display()
            ));
        }

        Ok(cfg)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "alamar-weather", "alamar-weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_output_overrides(
        mut self,
        report_path: Option<PathBuf>,
        image_path: Option<PathBuf>,
    ) -> Self {
        if let Some(p) = report_path {
            self.output.report_path = p;
        }
        if let Some(p) = image_path {
            self.output.image_path = p;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_scheduled_layout() {
        let cfg = Config::default();
        assert_eq!(cfg.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.api.timeout_secs, 15);
        assert!(cfg.api.user_agent.starts_with("alamar-weather/"));
        assert_eq!(cfg.output.report_path, PathBuf::from("weather.md"));
        assert_eq!(cfg.output.image_path, PathBuf::from("art/weather.svg"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from(&dir.path().join("nope.toml")).expect("load");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[output]\nreport_path = \"docs/weather.md\"\n").expect("seed");

        let cfg = Config::load_from(&path).expect("load");
        assert_eq!(cfg.output.report_path, PathBuf::from("docs/weather.md"));
        assert_eq!(cfg.output.image_path, PathBuf::from("art/weather.svg"));
        assert_eq!(cfg.api, ApiConfig::default());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api]\ntimeout_secs = 0\n").expect("seed");

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.api.timeout_secs = 30;
        cfg.output.image_path = PathBuf::from("public/weather.svg");
        cfg.save_to(&path).expect("save");

        assert_eq!(Config::load_from(&path).expect("load"), cfg);
    }

    #[test]
    fn overrides_replace_only_given_paths() {
        let cfg = Config::default().with_output_overrides(Some(PathBuf::from("out.md")), None);
        assert_eq!(cfg.output.report_path, PathBuf::from("out.md"));
        assert_eq!(cfg.output.image_path, PathBuf::from("art/weather.svg"));
    }
}
