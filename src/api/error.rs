//! Fetch failure taxonomy.
//!
//! The variants keep the technical cause for the log, but the user only ever
//! sees one message: the data could not be retrieved.

use thiserror::Error;

/// Message shown in place of the card area when a load fails.
pub const FETCH_FAILED_MESSAGE: &str = "Data could not be retrieved from the API";

#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with a non-success status.
    #[error("Data could not be retrieved from the API")]
    Status { status: u16 },

    /// DNS, connect, TLS or body read failure.
    #[error("Data could not be retrieved from the API")]
    Transport(#[source] reqwest::Error),

    /// The body was not a JSON envelope of characters.
    #[error("Data could not be retrieved from the API")]
    Decode(#[source] serde_json::Error),
}

impl FetchError {
    /// User-facing message. Identical for every variant.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }

    /// Technical details for diagnostics.
    pub fn details(&self) -> String {
        match self {
            FetchError::Status { status } => format!("API responded with HTTP {}", status),
            FetchError::Transport(err) => format!("Request failed: {}", err),
            FetchError::Decode(err) => format!("Malformed response body: {}", err),
        }
    }

    /// Short kind label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Status { .. } => "status",
            FetchError::Transport(_) => "transport",
            FetchError::Decode(_) => "decode",
        }
    }
}
