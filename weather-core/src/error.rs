use std::path::PathBuf;

/// Everything that can abort a report run.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// Connection failure, DNS failure or request timeout.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered, but not with a success status.
    #[error("Weather API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the JSON shape we expect.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WeatherError {
    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// True when the request was abandoned because it hit the client timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
