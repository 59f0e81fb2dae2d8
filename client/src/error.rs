//! Client error type.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`Mastodon`](crate::Mastodon) operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The instance base URL, or an endpoint URL derived from it, is invalid.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request could not be sent, or the response body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    ///
    /// The body is captured for diagnostics, truncated to a fixed cap.
    #[error("server returned {status}: {body}")]
    Api {
        /// HTTP status of the response.
        status: StatusCode,
        /// Response body, truncated.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
