use anyhow::{Context, Result, anyhow};
use percent_encoding::percent_decode_str;
use reqwest::{Client, Url};
use std::path::Path;

/// Derives the local/object filename from the final path segment of a URL.
///
/// The segment is percent-decoded, so `my%20pic.jpg` lands as `my pic.jpg`.
///
/// # Errors
///
/// Returns an error if the URL has no non-empty final segment (for example
/// `https://host/` or `https://host/dir/`).
pub fn derive_filename(url: &Url) -> Result<String> {
    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| {
            anyhow!(
                "no filename in URL path '{}'; pass --filename",
                url.path()
            )
        })?;

    let decoded = percent_decode_str(segment)
        .decode_utf8()
        .context("URL filename is not valid UTF-8")?;
    Ok(decoded.into_owned())
}

/// Downloads `url` and writes the whole response body to `dest`,
/// overwriting any existing file. Returns the number of bytes written.
///
/// Transport failures and non-success statuses are treated as the same
/// kind of failure; there is no retry.
pub async fn fetch_to_path(client: &Client, url: &Url, dest: &Path) -> Result<u64> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {url} failed"))?
        .error_for_status()
        .with_context(|| format!("GET {url} returned an error status"))?;

    let body = response
        .bytes()
        .await
        .with_context(|| format!("reading the response body from {url}"))?;

    tokio::fs::write(dest, &body)
        .await
        .with_context(|| format!("writing '{}'", dest.display()))?;

    Ok(body.len() as u64)
}
