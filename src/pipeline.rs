use crate::error::TransferError;
use crate::models::TransferRequest;
use crate::services::download;
use crate::services::storage::StorageService;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What a completed run produced.
#[derive(Debug)]
pub struct TransferOutcome {
    /// Presigned download link for the uploaded object.
    pub signed_url: String,

    /// Where the downloaded file was written.
    pub local_path: PathBuf,

    /// Whether the local copy still exists.
    pub kept_local: bool,
}

/// Runs one transfer end to end: download, upload, sign, clean up.
///
/// Steps run strictly in order and the first fatal failure aborts the
/// rest. A cleanup failure is only logged: the upload and the link already
/// succeeded, so the run still counts as a success. Nothing is rolled
/// back; an uploaded object stays in the bucket even if signing fails
/// afterwards.
pub async fn run(
    request: &TransferRequest,
    http: &reqwest::Client,
    storage: &dyn StorageService,
    work_dir: &Path,
) -> Result<TransferOutcome, TransferError> {
    let local_path = work_dir.join(&request.filename);

    info!("⬇️  Downloading from {}...", request.source);
    let size = download::fetch_to_path(http, &request.source, &local_path)
        .await
        .map_err(|source| TransferError::Download {
            url: request.source.to_string(),
            source,
        })?;
    info!("💾 File was saved as '{}' ({} bytes)", local_path.display(), size);

    info!(
        "☁️  Uploading '{}' to bucket '{}'...",
        request.filename, request.bucket
    );
    let data = tokio::fs::read(&local_path)
        .await
        .map_err(|source| TransferError::Upload {
            bucket: request.bucket.clone(),
            key: request.filename.clone(),
            source: source.into(),
        })?;
    storage
        .upload_file(&request.filename, data)
        .await
        .map_err(|source| TransferError::Upload {
            bucket: request.bucket.clone(),
            key: request.filename.clone(),
            source,
        })?;
    info!("✅ Upload complete");

    info!(
        "🔗 Signing a download link valid for {} seconds...",
        request.expires_in.as_secs()
    );
    let signed_url = storage
        .presigned_download_url(&request.filename, request.expires_in, &request.link)
        .await
        .map_err(|source| TransferError::SignLink {
            key: request.filename.clone(),
            source,
        })?;

    let kept_local = if request.keep_local {
        info!("📦 Keeping local copy at '{}'", local_path.display());
        true
    } else {
        match tokio::fs::remove_file(&local_path).await {
            Ok(()) => {
                info!("🧹 Removed local file '{}'", local_path.display());
                false
            }
            Err(e) => {
                warn!(
                    "Could not delete local file '{}': {}",
                    local_path.display(),
                    e
                );
                true
            }
        }
    };

    Ok(TransferOutcome {
        signed_url,
        local_path,
        kept_local,
    })
}
