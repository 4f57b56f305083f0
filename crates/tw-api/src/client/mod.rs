//! Typed Twitter v2 API client.
//!
//! This client wraps `ApiClient` from `tw-client`, decodes every response
//! through the envelope parser and reconciles authors before handing
//! entities back.

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use birdwire_tw_client::{ApiClient, ClientConfig, TextResponse};
use tracing::{debug, warn};

use crate::envelope::{self, Answer, DecodeConfig};
use crate::error::{Error, ErrorKind, Result};

mod likes;
mod stream;
mod tweets;
mod users;

/// Environment variable holding the bearer token.
pub const TOKEN_ENV: &str = "TWITTER_TOKEN";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "TWITTER_API_URL";

/// Twitter v2 API client.
///
/// Provides typed methods for:
/// - Tweet lookups (by id, by author)
/// - User lookups by username
/// - Filtered stream rules and the filtered stream itself
/// - Likes
///
/// Cloning is cheap and clones share the connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use birdwire_tw_api::{TwitterClient, UserOption};
///
/// let client = TwitterClient::from_env()?;
///
/// let tweets = client
///     .get_tweets(&["1389189291582967809"], &[UserOption::CreatedAt])
///     .await?;
/// for tweet in tweets {
///     println!("{}: {}", tweet.author.map(|a| a.username).unwrap_or_default(), tweet.text);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TwitterClient {
    client: ApiClient,
    decode: DecodeConfig,
}

impl TwitterClient {
    /// Create a new client with the given bearer token.
    pub fn new(bearer_token: impl Into<String>) -> Result<Self> {
        let client = ApiClient::new(bearer_token)?;
        Ok(Self::from_client(client))
    }

    /// Create a new client with custom HTTP configuration.
    pub fn with_config(bearer_token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let client = ApiClient::with_config(bearer_token, config)?;
        Ok(Self::from_client(client))
    }

    /// Create a client from `TWITTER_TOKEN` and, if set, `TWITTER_API_URL`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV).map_err(|e| Error {
            kind: ErrorKind::Config(format!("{TOKEN_ENV} is not set")),
            source: Some(Box::new(e)),
        })?;

        let client = Self::new(token)?;
        match std::env::var(BASE_URL_ENV) {
            Ok(base_url) if !base_url.is_empty() => client.with_base_url(&base_url),
            _ => Ok(client),
        }
    }

    /// Create a client from an existing `ApiClient`.
    pub fn from_client(client: ApiClient) -> Self {
        Self {
            client,
            decode: DecodeConfig::default(),
        }
    }

    /// Point the client at a different base URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.client = self.client.with_base_url(base_url)?;
        Ok(self)
    }

    /// Replace the decoder options.
    pub fn with_decode_config(mut self, decode: DecodeConfig) -> Self {
        self.decode = decode;
        self
    }

    /// Get the underlying `ApiClient`.
    pub fn inner(&self) -> &ApiClient {
        &self.client
    }

    /// Get the decoder options.
    pub fn decode_config(&self) -> &DecodeConfig {
        &self.decode
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    // =========================================================================
    // Exchange helpers
    // =========================================================================

    pub(crate) async fn get_answer<T: DeserializeOwned>(&self, path: &str) -> Result<Answer<T>> {
        let response = self.client.get_text(path).await?;
        self.read_answer(response)
    }

    pub(crate) async fn post_answer<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Answer<T>> {
        let response = self.client.post_json_text(path, body).await?;
        self.read_answer(response)
    }

    pub(crate) async fn delete_answer<T: DeserializeOwned>(&self, path: &str) -> Result<Answer<T>> {
        let response = self.client.delete_text(path).await?;
        self.read_answer(response)
    }

    /// Decode a body, surfacing an error envelope on any status.
    pub(crate) fn read_answer<T: DeserializeOwned>(
        &self,
        response: TextResponse,
    ) -> Result<Answer<T>> {
        note_rate_limit(&response);
        if !response.is_success() {
            return Err(self.rejection(&response));
        }
        envelope::decode::<T>(&response.body, &self.decode)
    }

    /// The error for a non-success response.
    ///
    /// A body carrying a `detail` becomes [`ErrorKind::Api`]; anything else
    /// is classified by status as a transport error.
    pub(crate) fn rejection(&self, response: &TextResponse) -> Error {
        match envelope::decode::<IgnoredAny>(&response.body, &self.decode).and_then(Answer::check) {
            Err(err) if err.is_api_error() => err,
            _ => response.to_error().into(),
        }
    }
}

pub(crate) fn note_rate_limit(response: &TextResponse) {
    let Some(limit) = response.rate_limit else {
        return;
    };
    if limit.is_exhausted() {
        warn!(limit = limit.limit, reset = ?limit.reset, "Rate limit window exhausted");
    } else {
        debug!(used = limit.used(), limit = limit.limit, "Rate limit usage");
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use wiremock::MockServer;

    pub fn client_for(server: &MockServer) -> TwitterClient {
        TwitterClient::with_config(
            "test-token",
            ClientConfig::builder()
                .with_base_url(format!("{}/2/", server.uri()))
                .build(),
        )
        .unwrap()
    }
}
