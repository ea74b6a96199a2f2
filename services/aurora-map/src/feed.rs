//! Reading the activity feed from disk or over HTTP.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::Client;
use tracing::{debug, instrument};

/// Where the activity feed comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    File(PathBuf),
    Url(String),
}

impl FeedSource {
    /// `http://` and `https://` locations are URLs, anything else a path.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Read the raw feed text.
#[instrument(skip(timeout), fields(source = %source))]
pub async fn read_feed(source: &FeedSource, timeout: Duration) -> Result<String> {
    let raw = match source {
        FeedSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read feed file {}", path.display()))?,
        FeedSource::Url(url) => fetch_feed(url, timeout).await?,
    };

    debug!(bytes = raw.len(), "Read activity feed");
    Ok(raw)
}

async fn fetch_feed(url: &str, timeout: Duration) -> Result<String> {
    let client = Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(30)))
        .build()
        .context("Failed to create HTTP client")?;

    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Feed request to {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        bail!("Feed request to {} returned {}", url, status);
    }

    response
        .text()
        .await
        .with_context(|| format!("Failed to read feed body from {}", url))
}
