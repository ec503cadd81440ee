use std::collections::HashMap;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by the session store and the API client.
///
/// Nothing here is fatal: auth failures clear the local session, validation
/// maps go back to the caller for per-field display, and network failures
/// degrade the affected collection instead of crashing aggregation.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Login rejected; carries the server-reported detail message.
    #[error("invalid credentials: {0}")]
    Credentials(String),
    /// The access token was rejected; the caller should log in again.
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    /// Field-keyed validation messages, propagated verbatim so forms can
    /// annotate individual fields.
    #[error("validation failed")]
    Validation(HashMap<String, Vec<String>>),
    #[error("server error: {0}")]
    Server(String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid base url: {0}")]
    BaseUrl(String),
}
