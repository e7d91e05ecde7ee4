use thiserror::Error;

/// A fatal failure in one pipeline step.
///
/// The variant records which call failed so the operator can tell a dead
/// download from a rejected upload; the source carries the collaborator's
/// own report. Cleanup problems are not represented here: by the time
/// cleanup runs the transfer has already succeeded, so they are logged and
/// swallowed instead.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("downloading {url} failed: {source:#}")]
    Download {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("uploading '{key}' to bucket '{bucket}' failed: {source:#}")]
    Upload {
        bucket: String,
        key: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("signing the download link for '{key}' failed: {source:#}")]
    SignLink {
        key: String,
        #[source]
        source: anyhow::Error,
    },
}
