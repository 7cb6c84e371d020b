//! Client configuration.
//!
//! Read from `<config dir>/seek/config.toml` when present; every field has a
//! default, so a missing file or a partial file is fine.
//!
//! ```toml
//! backend_url = "http://localhost:5001"
//! request_timeout_secs = 30
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;
use tracing::info;

use crate::error::{Result, SeekError};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5001";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Path of the query endpoint, relative to `backend_url`.
const QUERY_PATH: &str = "query";

/// Settings for talking to the answer backend.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the backend; queries go to `<backend_url>/query`.
    pub backend_url: String,
    /// Upper bound on a single request, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Loads the config from a specific TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SeekError::config(format!("failed to read {}: {}", path.display(), e))
        })?;

        let config: ClientConfig = toml::from_str(&content).map_err(|e| {
            SeekError::config(format!("failed to parse {}: {}", path.display(), e))
        })?;

        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads the config from `path`, or from the platform default path.
    ///
    /// Returns defaults when the default file does not exist; an explicit
    /// `path` must exist. The result is not validated, so callers can apply
    /// overrides first and then call [`ClientConfig::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load_from_path(&path),
                _ => {
                    info!("no config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn with_backend_url(mut self, backend_url: impl Into<String>) -> Self {
        self.backend_url = backend_url.into();
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Checks that the URL is usable and the timeout is non-zero.
    pub fn validate(&self) -> Result<()> {
        self.query_url()?;
        if self.request_timeout_secs == 0 {
            return Err(SeekError::config("request_timeout_secs must be greater than 0"));
        }
        Ok(())
    }

    /// Full URL of the query endpoint.
    ///
    /// A trailing `/` on the base URL is tolerated, and a base URL with a
    /// path prefix keeps it (`http://host/api` -> `http://host/api/query`).
    pub fn query_url(&self) -> Result<Url> {
        let mut base = Url::parse(&self.backend_url).map_err(|e| {
            SeekError::config(format!("invalid backend_url '{}': {}", self.backend_url, e))
        })?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(SeekError::config(format!(
                "backend_url must use http or https, got '{}'",
                base.scheme()
            )));
        }

        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        base.join(QUERY_PATH).map_err(|e| {
            SeekError::config(format!("invalid backend_url '{}': {}", self.backend_url, e))
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Platform config file location, e.g. `~/.config/seek/config.toml` on Linux.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("seek").join("config.toml"))
}
