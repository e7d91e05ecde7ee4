use crate::config::TransferConfig;
use anyhow::{Context, Result};
use std::time::Duration;

/// Builds the HTTP client used for the download.
pub fn setup_http(config: &TransferConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(config.http_connect_timeout_secs))
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()
        .context("building the HTTP client")
}
