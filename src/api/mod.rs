//! Data loader for the character API.
//!
//! One GET per activation, no retries, no timeout override. The caller owns
//! the decision of when an activation happens.

mod error;
mod types;

pub use error::{FetchError, FETCH_FAILED_MESSAGE};
pub use types::{Character, Envelope, ImageSource};

use reqwest::Client;

/// The public endpoint the browser reads from.
pub const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/api/character";

#[derive(Debug, Clone)]
pub struct CharacterClient {
    client: Client,
    endpoint: String,
}

impl CharacterClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Host part of the endpoint, or the whole endpoint if it does not parse.
    pub fn host(&self) -> String {
        reqwest::Url::parse(&self.endpoint)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| self.endpoint.clone())
    }

    /// Issue a single GET and decode the envelope.
    ///
    /// Every failure mode maps onto [`FetchError`], whose user-facing message
    /// is the same for all variants.
    pub async fn fetch_characters(&self) -> Result<Vec<Character>, FetchError> {
        tracing::info!(endpoint = %self.endpoint, "Fetching characters");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(FetchError::Transport)?;
        let characters = Envelope::decode(&body).map_err(FetchError::Decode)?;

        tracing::info!(count = characters.len(), "Characters loaded");
        Ok(characters)
    }
}

impl Default for CharacterClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
