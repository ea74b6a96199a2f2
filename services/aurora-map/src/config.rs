//! Configuration for map rendering.
//!
//! Precedence, lowest first: built-in defaults, YAML file, environment
//! variables, command-line flags (applied in `main`).

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use aurora_common::filesystem_safe_utc_date_string;
use chrono::{DateTime, Utc};
use renderer::MappingMode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Rendering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Base map image, must be 1024x512.
    pub basemap: PathBuf,

    /// Directory for generated maps when no explicit output path is given.
    pub output_dir: PathBuf,

    /// Color mapping and blend mode.
    pub mode: MappingMode,

    /// Activity feed file path or http(s) URL.
    pub feed: Option<String>,

    /// Timeout for fetching the feed over HTTP.
    pub fetch_timeout_secs: u64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            basemap: PathBuf::from("maps/basemap-512.png"),
            output_dir: PathBuf::from("."),
            mode: MappingMode::Continuous,
            feed: None,
            fetch_timeout_secs: 30,
        }
    }
}

impl MapConfig {
    /// Load configuration from a YAML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Override fields from `AURORA_*` environment variables.
    pub fn apply_env(self) -> Self {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Override fields using `lookup` in place of the process environment.
    pub fn apply_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(val) = lookup("AURORA_BASEMAP") {
            self.basemap = PathBuf::from(val);
        }

        if let Some(val) = lookup("AURORA_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(val);
        }

        if let Some(val) = lookup("AURORA_MODE") {
            match val.parse() {
                Ok(mode) => self.mode = mode,
                Err(err) => warn!(error = %err, "Ignoring AURORA_MODE"),
            }
        }

        if let Some(val) = lookup("AURORA_FEED") {
            self.feed = Some(val);
        }

        if let Some(val) = lookup("AURORA_FETCH_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                self.fetch_timeout_secs = secs;
            }
        }

        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.basemap.as_os_str().is_empty() {
            bail!("basemap path must not be empty");
        }

        if self.output_dir.as_os_str().is_empty() {
            bail!("output_dir must not be empty");
        }

        if self.feed.as_deref().is_some_and(|feed| feed.trim().is_empty()) {
            bail!("feed must not be empty");
        }

        if self.fetch_timeout_secs == 0 {
            bail!("fetch_timeout_secs must be > 0");
        }

        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Default output file for a map rendered at `time`.
    pub fn output_path(&self, time: &DateTime<Utc>) -> PathBuf {
        self.output_dir
            .join(format!("aurora-map-{}.png", filesystem_safe_utc_date_string(time)))
    }
}
