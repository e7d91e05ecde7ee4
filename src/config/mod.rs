use std::env;

/// Runtime knobs for the transfer, all environment-driven with defaults.
///
/// Credentials are deliberately absent: the AWS SDK's default provider
/// chain resolves them on its own.
#[derive(Debug, Clone)]
pub struct TransferConfig {
    /// Override the S3 endpoint, e.g. for MinIO (default: none)
    pub endpoint_url: Option<String>,

    /// Override the AWS region; SDK resolution applies otherwise
    pub region: Option<String>,

    /// Use path-style bucket addressing, needed by most MinIO setups
    /// (default: false)
    pub force_path_style: bool,

    /// TCP connect timeout for the download, in seconds (default: 30)
    pub http_connect_timeout_secs: u64,

    /// Whole-request timeout for the download, in seconds (default: 300)
    pub http_timeout_secs: u64,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            region: None,
            force_path_style: false,
            http_connect_timeout_secs: 30,
            http_timeout_secs: 300,
        }
    }
}

impl TransferConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            endpoint_url: env::var("S3_ENDPOINT_URL").ok(),

            region: env::var("S3_REGION").ok(),

            force_path_style: env::var("S3_FORCE_PATH_STYLE")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(default.force_path_style),

            http_connect_timeout_secs: env::var("HTTP_CONNECT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.http_connect_timeout_secs),

            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.http_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TransferConfig::default();
        assert!(config.endpoint_url.is_none());
        assert!(config.region.is_none());
        assert!(!config.force_path_style);
        assert_eq!(config.http_connect_timeout_secs, 30);
        assert_eq!(config.http_timeout_secs, 300);
    }
}
