//! Authenticated client bound to one API base URL.
//!
//! `ApiClient` combines a bearer token with an [`HttpClient`] and exposes the
//! three transport primitives the typed API layer is built on: fetch a body
//! as text, post JSON and fetch the reply as text, and open a line-delimited
//! stream.
//!
//! ## Security
//!
//! - The bearer token is redacted in Debug output
//! - Request bodies and the token are skipped in tracing spans

use serde::Serialize;
use tracing::instrument;

use crate::client::HttpClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::request::RequestBuilder;
use crate::response::TextResponse;
use crate::stream::StreamOpen;

/// Bearer-authenticated API client.
///
/// # Example
///
/// ```rust,ignore
/// use birdwire_tw_client::ApiClient;
///
/// let client = ApiClient::new(std::env::var("TWITTER_TOKEN")?)?;
/// let response = client.get_text(&client.url("users/by?usernames=jack")).await?;
/// ```
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
    bearer_token: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("bearer_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new client with the given bearer token and default configuration.
    pub fn new(bearer_token: impl Into<String>) -> Result<Self> {
        Self::with_config(bearer_token, ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    pub fn with_config(bearer_token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        let http = HttpClient::new(config)?;
        Ok(Self {
            http,
            base_url,
            bearer_token: bearer_token.into(),
        })
    }

    /// Point the client at a different base URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }

    /// Get the base URL (always ends with `/`).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for a path.
    ///
    /// Relative paths (with or without a leading `/`) are appended to the
    /// base URL; absolute URLs are returned as-is.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    /// Create a GET request builder with authentication.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.http.get(url).bearer_auth(&self.bearer_token)
    }

    /// Create a POST request builder with authentication.
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.http.post(url).bearer_auth(&self.bearer_token)
    }

    /// Create a DELETE request builder with authentication.
    pub fn delete(&self, url: &str) -> RequestBuilder {
        self.http.delete(url).bearer_auth(&self.bearer_token)
    }

    /// GET and read the body as text, whatever the status.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_text(&self, url: &str) -> Result<TextResponse> {
        let request = self.get(&self.url(url));
        self.http.execute(request).await?.into_text_response().await
    }

    /// POST a JSON body and read the reply as text, whatever the status.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn post_json_text<B: Serialize>(&self, url: &str, body: &B) -> Result<TextResponse> {
        let request = self.post(&self.url(url)).json(body)?;
        self.http.execute(request).await?.into_text_response().await
    }

    /// DELETE and read the reply as text, whatever the status.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn delete_text(&self, url: &str) -> Result<TextResponse> {
        let request = self.delete(&self.url(url));
        self.http.execute(request).await?.into_text_response().await
    }

    /// Open a long-lived newline-delimited stream.
    ///
    /// A non-success status is read to completion and handed back as
    /// [`StreamOpen::Rejected`] so the caller can inspect the error body.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn open_stream(&self, url: &str) -> Result<StreamOpen> {
        let request = self.get(&self.url(url));
        let response = self.http.execute_streaming(request).await?;
        if !response.is_success() {
            return Ok(StreamOpen::Rejected(response.into_text_response().await?));
        }
        Ok(StreamOpen::Connected(response.into_lines()))
    }
}

fn normalize_base_url(base_url: &str) -> Result<String> {
    let parsed = url::Url::parse(base_url)?;
    let mut normalized = parsed.to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::with_config(
            "test-token",
            ClientConfig::builder()
                .with_base_url(format!("{}/2", server.uri()))
                .build(),
        )
        .unwrap()
    }

    #[test]
    fn test_url_building() {
        let client = ApiClient::new("token123").unwrap();

        assert_eq!(client.base_url(), "https://api.twitter.com/2/");
        assert_eq!(
            client.url("tweets?ids=20"),
            "https://api.twitter.com/2/tweets?ids=20"
        );
        assert_eq!(
            client.url("/users/by?usernames=jack"),
            "https://api.twitter.com/2/users/by?usernames=jack"
        );
        assert_eq!(client.url("https://other.com/path"), "https://other.com/path");
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = ApiClient::new("token")
            .unwrap()
            .with_base_url("http://localhost:8080/2")
            .unwrap();

        assert_eq!(client.base_url(), "http://localhost:8080/2/");
        assert_eq!(client.url("tweets"), "http://localhost:8080/2/tweets");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ApiClient::new("token")
            .unwrap()
            .with_base_url("not a url")
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidUrl(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = ApiClient::new("very-secret-token").unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("very-secret-token"));
    }

    #[tokio::test]
    async fn test_get_text_sends_bearer() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/2/tweets/search/stream/rules"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":[]}"#))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let response = client.get_text("tweets/search/stream/rules").await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"data":[]}"#);
    }

    #[tokio::test]
    async fn test_post_json_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/2/users/1/likes"))
            .and(body_json(serde_json::json!({"tweet_id": "20"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"data":{"liked":true}}"#),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let response = client
            .post_json_text("users/1/likes", &serde_json::json!({"tweet_id": "20"}))
            .await
            .unwrap();

        assert!(response.is_success());
        assert!(response.body.contains("liked"));
    }

    #[tokio::test]
    async fn test_open_stream_reads_lines() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/2/tweets/search/stream"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "{\"data\":{\"id\":\"1\",\"text\":\"a\"}}\r\n\r\n{\"data\":{\"id\":\"2\",\"text\":\"b\"}}\r\n",
            ))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let StreamOpen::Connected(mut lines) = client.open_stream("tweets/search/stream").await.unwrap()
        else {
            panic!("stream should open");
        };

        let mut collected = Vec::new();
        while let Some(line) = lines.next_line().await {
            collected.push(line.unwrap());
        }

        assert_eq!(collected.len(), 3);
        assert!(collected[0].contains("\"id\":\"1\""));
        assert_eq!(collected[1], "");
        assert!(collected[2].contains("\"id\":\"2\""));
    }

    #[tokio::test]
    async fn test_open_stream_rejects_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/2/tweets/search/stream"))
            .respond_with(
                ResponseTemplate::new(429)
                    .insert_header("x-rate-limit-limit", "50")
                    .insert_header("x-rate-limit-remaining", "0")
                    .insert_header("x-rate-limit-reset", "1700000000")
                    .set_body_string(r#"{"title":"ConnectionException","detail":"Too many connections"}"#),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let StreamOpen::Rejected(response) = client.open_stream("tweets/search/stream").await.unwrap()
        else {
            panic!("stream should be rejected");
        };

        assert_eq!(response.status, 429);
        assert!(response.body.contains("Too many connections"));
        assert!(response.rate_limit.unwrap().is_exhausted());

        let err = response.to_error();
        assert!(err.is_rate_limited());
        match err.kind {
            ErrorKind::RateLimited { reset } => {
                assert_eq!(reset.unwrap().timestamp(), 1_700_000_000);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }
}
