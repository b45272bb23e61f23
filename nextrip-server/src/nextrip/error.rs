//! NexTrip client error types.

/// Errors from a NexTrip request.
///
/// The selection controller treats every variant the same way (empty
/// result plus a message), so these exist for logging rather than for
/// callers to branch on.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// HTTP request failed (connection refused, DNS, reset, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the JSON we expected
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// The configured base URL cannot carry path segments
    #[error("invalid base URL {url}: {message}")]
    InvalidUrl { url: String, message: String },
}

impl NetworkError {
    /// Build a `Json` error, keeping a short excerpt of the offending body.
    pub(crate) fn json(message: impl ToString, body: &str) -> Self {
        NetworkError::Json {
            message: message.to_string(),
            body: Some(body.chars().take(500).collect()),
        }
    }
}
