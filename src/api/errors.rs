/// Errors from the remote API layer.
use thiserror::Error;

/// Failures talking to the content management server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server returned {status} for {url}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Request URL.
        url: String,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response body did not have the expected shape.
    #[error("Unexpected response from {url}: {reason}")]
    Decode {
        /// Request URL.
        url: String,
        /// What went wrong.
        reason: String,
    },

    /// A label lookup matched more than one entity.
    #[error("{count} entries labeled '{label}' returned by {url}")]
    Ambiguous {
        /// Request URL.
        url: String,
        /// The label that was looked up.
        label: String,
        /// Number of matching entries.
        count: usize,
    },

    /// A request URL could not be built from the configured server URL.
    #[error("Invalid request URL: {0}")]
    Url(String),
}
