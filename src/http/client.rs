//! Streaming HTTP client.

use log::debug;
use reqwest::Client;
use std::io::Write;

use super::FetchError;
use crate::progress::{ByteCounter, ProgressSink};

/// HTTP client used to fetch the archive.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Streams the body of `url` into `writer`, chunk by chunk.
    ///
    /// A non-success response has its body drained and printed to stderr
    /// before the error is returned. Returns the number of bytes written.
    #[tracing::instrument(skip(self, writer, progress))]
    pub async fn download_to<W>(
        &self,
        url: &str,
        writer: &mut W,
        progress: &mut dyn ProgressSink,
    ) -> Result<u64, FetchError>
    where
        W: Write + ?Sized,
    {
        debug!("GET {}...", url);

        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            eprintln!("Error status code: {}", status.as_u16());
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!("Failed to drain error response body: {}", e);
                    String::new()
                }
            };
            if !body.is_empty() {
                eprintln!("{}", body);
            }
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let mut counter = ByteCounter::default();
        while let Some(chunk) = response.chunk().await.map_err(FetchError::Stream)? {
            writer.write_all(&chunk).map_err(FetchError::Write)?;
            if let Some(event) = counter.record(chunk.len()) {
                progress.on_event(event);
            }
        }
        writer.flush().map_err(FetchError::Write)?;
        progress.on_event(counter.finish());

        debug!(
            "Downloaded {:.2} MB",
            counter.received() as f64 / (1024.0 * 1024.0)
        );

        Ok(counter.received())
    }
}
