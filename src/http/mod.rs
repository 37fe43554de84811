//! HTTP client module with streaming download and error handling.

mod client;

use thiserror::Error;

pub use client::HttpClient;

/// Failure while fetching a remote resource.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{0}")]
    Request(#[source] reqwest::Error),

    /// Non-success response. `body` holds the drained response text.
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },

    #[error("Failed to read chunk from download stream: {0}")]
    Stream(#[source] reqwest::Error),

    #[error("Failed to write chunk to file: {0}")]
    Write(#[source] std::io::Error),
}
