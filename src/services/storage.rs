use crate::models::LinkOptions;
use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use std::time::Duration;

/// The object-store operations the pipeline needs, kept behind a trait so
/// tests can run against an in-memory fake.
#[async_trait]
pub trait StorageService: Send + Sync {
    /// Stores `data` under `key`, overwriting any existing object of the
    /// same name.
    async fn upload_file(&self, key: &str, data: Vec<u8>) -> Result<()>;

    /// Mints a presigned GET link for `key`, valid for exactly
    /// `expires_in`, with the response headers from `link` baked into the
    /// signature.
    async fn presigned_download_url(
        &self,
        key: &str,
        expires_in: Duration,
        link: &LinkOptions,
    ) -> Result<String>;
}

pub struct S3StorageService {
    client: Client,
    bucket: String,
}

impl S3StorageService {
    pub fn new(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl StorageService for S3StorageService {
    async fn upload_file(&self, key: &str, data: Vec<u8>) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .send()
            .await?;
        Ok(())
    }

    async fn presigned_download_url(
        &self,
        key: &str,
        expires_in: Duration,
        link: &LinkOptions,
    ) -> Result<String> {
        // The SDK rejects zero and anything over seven days.
        let presigning = PresigningConfig::expires_in(expires_in)
            .context("presigned link lifetime rejected")?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .response_content_disposition(link.disposition.as_header_value())
            .response_content_type(link.content_type.to_string())
            .presigned(presigning)
            .await?;

        Ok(request.uri().to_string())
    }
}
