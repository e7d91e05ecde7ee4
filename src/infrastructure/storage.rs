use crate::config::TransferConfig;
use crate::services::storage::S3StorageService;
use aws_sdk_s3::config::Region;
use tracing::info;

/// Builds the S3-backed storage service for `bucket`.
///
/// Credentials come from the SDK's default provider chain (environment,
/// shared config, instance metadata); only the endpoint, region, and
/// addressing style can be overridden here.
pub async fn setup_storage(config: &TransferConfig, bucket: String) -> S3StorageService {
    let mut loader = aws_config::from_env();

    if let Some(endpoint_url) = &config.endpoint_url {
        info!("☁️  S3 endpoint override: {} (Bucket: {})", endpoint_url, bucket);
        loader = loader.endpoint_url(endpoint_url);
    }
    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }

    let aws_config = loader.load().await;

    let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
        .force_path_style(config.force_path_style)
        .build();

    let s3_client = aws_sdk_s3::Client::from_conf(s3_config);
    S3StorageService::new(s3_client, bucket)
}
