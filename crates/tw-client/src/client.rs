//! Core HTTP client: one pooled client for lookups, one for the stream.

use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBody, RequestBuilder, RequestMethod};
use crate::response::Response;

/// HTTP client for the v2 API.
///
/// Non-success statuses are returned as a normal [`Response`]: the API layer
/// needs to read error envelopes out of their bodies.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    streaming: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let inner = Self::builder(&config)
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        // The stream stays open indefinitely, so it gets its own client
        // without the whole-request timeout.
        let mut streaming = Self::builder(&config);
        if let Some(read_timeout) = config.stream_timeout {
            streaming = streaming.read_timeout(read_timeout);
        }
        let streaming = streaming
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            inner,
            streaming,
            config,
        })
    }

    // reqwest adds Accept-Encoding and decompresses when gzip/deflate are on.
    fn builder(config: &ClientConfig) -> reqwest::ClientBuilder {
        reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(config.accept_compressed)
            .deflate(config.accept_compressed)
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a GET request builder.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Get, url)
    }

    /// Create a POST request builder.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Post, url)
    }

    /// Create a DELETE request builder.
    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Delete, url)
    }

    /// Execute a request and return the response, whatever its status.
    #[instrument(skip(self, request), fields(method = ?request.method, url = %request.url))]
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        self.send_with(&self.inner, &request).await
    }

    /// Execute a request on the streaming client (no overall timeout).
    #[instrument(skip(self, request), fields(method = ?request.method, url = %request.url))]
    pub async fn execute_streaming(&self, request: RequestBuilder) -> Result<Response> {
        self.send_with(&self.streaming, &request).await
    }

    async fn send_with(
        &self,
        client: &reqwest::Client,
        request: &RequestBuilder,
    ) -> Result<Response> {
        let mut req = client.request(request.method.to_reqwest(), &request.url);

        if let Some(ref token) = request.bearer_token {
            req = req.bearer_auth(token);
        }

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if !request.query_params.is_empty() {
            req = req.query(&request.query_params);
        }

        if let Some(RequestBody::Json(ref value)) = request.body {
            req = req.json(value);
        }

        if self.config.enable_tracing {
            debug!(
                method = ?request.method,
                url = %request.url,
                "Sending request"
            );
        }

        let response = req.send().await?;

        if self.config.enable_tracing {
            let status = response.status().as_u16();
            let content_length = response.content_length();

            if response.status().is_success() {
                debug!(status, content_length, "Response received");
            } else {
                info!(status, content_length, "Non-success response");
            }
        }

        Ok(Response::new(response))
    }
}
