use crate::models::{Disposition, LinkOptions, TransferRequest};
use crate::services::download;
use anyhow::Result;
use clap::Parser;
use mime::Mime;
use reqwest::Url;
use std::time::Duration;

/// Fetch a file from a URL, upload it to an S3 bucket, and print a
/// presigned download link.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Direct URL to download the file from.
    pub url: Url,

    /// S3 bucket to upload the file to.
    pub bucket: String,

    /// Lifetime of the presigned link, in seconds.
    pub expiration: u64,

    /// Custom name for the saved/uploaded file. Defaults to the last path
    /// segment of the URL.
    #[arg(long)]
    pub filename: Option<String>,

    /// Keep the file locally after the upload.
    #[arg(long)]
    pub keep: bool,

    /// Content type the signed link advertises for the object.
    #[arg(long, default_value = "image/jpeg")]
    pub content_type: Mime,

    /// Content disposition the signed link advertises.
    #[arg(long, value_enum, default_value = "inline")]
    pub disposition: Disposition,
}

impl Args {
    /// Resolves the raw arguments into an immutable transfer request,
    /// deriving the filename from the URL when none was given.
    pub fn into_request(self) -> Result<TransferRequest> {
        let filename = match self.filename {
            Some(name) => name,
            None => download::derive_filename(&self.url)?,
        };

        Ok(TransferRequest {
            source: self.url,
            bucket: self.bucket,
            expires_in: Duration::from_secs(self.expiration),
            filename,
            keep_local: self.keep,
            link: LinkOptions {
                disposition: self.disposition,
                content_type: self.content_type,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_required_positionals() {
        let args = Args::try_parse_from([
            "fetch-to-s3",
            "https://example.com/pic.jpg",
            "my-bucket",
            "600",
        ])
        .unwrap();

        assert_eq!(args.bucket, "my-bucket");
        assert_eq!(args.expiration, 600);
        assert!(!args.keep);

        let request = args.into_request().unwrap();
        assert_eq!(request.filename, "pic.jpg");
        assert_eq!(request.expires_in, Duration::from_secs(600));
        assert_eq!(request.link.disposition, Disposition::Inline);
        assert_eq!(request.link.content_type, mime::IMAGE_JPEG);
    }

    #[test]
    fn filename_override_wins() {
        let args = Args::try_parse_from([
            "fetch-to-s3",
            "https://example.com/pic.jpg",
            "my-bucket",
            "600",
            "--filename",
            "renamed.bin",
            "--keep",
        ])
        .unwrap();

        let request = args.into_request().unwrap();
        assert_eq!(request.filename, "renamed.bin");
        assert!(request.keep_local);
    }

    #[test]
    fn link_header_flags_are_honored() {
        let args = Args::try_parse_from([
            "fetch-to-s3",
            "https://example.com/report.pdf",
            "my-bucket",
            "3600",
            "--content-type",
            "application/pdf",
            "--disposition",
            "attachment",
        ])
        .unwrap();

        let request = args.into_request().unwrap();
        assert_eq!(request.link.content_type.essence_str(), "application/pdf");
        assert_eq!(request.link.disposition, Disposition::Attachment);
    }

    #[test]
    fn rejects_missing_arguments() {
        assert!(Args::try_parse_from(["fetch-to-s3"]).is_err());
        assert!(Args::try_parse_from(["fetch-to-s3", "https://example.com/pic.jpg"]).is_err());
        assert!(
            Args::try_parse_from(["fetch-to-s3", "https://example.com/pic.jpg", "my-bucket"])
                .is_err()
        );
    }

    #[test]
    fn rejects_invalid_expiration() {
        assert!(
            Args::try_parse_from([
                "fetch-to-s3",
                "https://example.com/pic.jpg",
                "my-bucket",
                "soon",
            ])
            .is_err()
        );
        assert!(
            Args::try_parse_from([
                "fetch-to-s3",
                "https://example.com/pic.jpg",
                "my-bucket",
                "-600",
            ])
            .is_err()
        );
    }

    #[test]
    fn rejects_invalid_url() {
        assert!(
            Args::try_parse_from(["fetch-to-s3", "not a url", "my-bucket", "600"]).is_err()
        );
    }

    #[test]
    fn url_without_filename_needs_override() {
        let args =
            Args::try_parse_from(["fetch-to-s3", "https://example.com/", "my-bucket", "600"])
                .unwrap();
        assert!(args.into_request().is_err());
    }
}
