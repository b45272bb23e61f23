//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Form body for the `/select/*` endpoints.
#[derive(Debug, Deserialize)]
pub struct SelectForm {
    /// Chosen id; empty (or missing) clears the level
    #[serde(default)]
    pub id: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
