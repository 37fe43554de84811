use crate::error::{InstallError, Result};
use crate::http::{FetchError, HttpClient};
use crate::progress::ProgressSink;
use crate::runtime::Runtime;
use anyhow::Context;
use log::info;
use std::path::Path;

/// Streams `url` into a new file at `dest`.
///
/// The file is created before the request is sent and is left in place if
/// the transfer fails.
#[tracing::instrument(skip(runtime, dest, http_client, progress))]
pub async fn download_file<R: Runtime>(
    runtime: &R,
    url: &str,
    dest: &Path,
    http_client: &HttpClient,
    progress: &mut dyn ProgressSink,
) -> Result<u64> {
    println!("Downloading the instant client from: {}", url);

    let mut writer = runtime
        .create_file(dest)
        .with_context(|| format!("Failed to create archive file at {:?}", dest))
        .map_err(InstallError::filesystem)?;

    let bytes = http_client
        .download_to(url, &mut writer, progress)
        .await
        .map_err(|e| match e {
            FetchError::Write(io) => InstallError::filesystem(
                anyhow::Error::new(io).context(format!("Failed to write to {:?}", dest)),
            ),
            other => InstallError::TransportFailure {
                url: url.to_string(),
                source: other,
            },
        })?;

    info!("Download complete.");
    Ok(bytes)
}
