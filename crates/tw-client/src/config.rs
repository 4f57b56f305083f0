//! Client configuration.

use std::time::Duration;

/// Configuration for the HTTP client.
///
/// Regular calls and the filtered stream share everything here except
/// timeouts: `timeout` bounds a whole lookup, while the stream only gets
/// `stream_timeout` as a per-read limit.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every relative path is resolved against.
    pub base_url: String,
    pub timeout: Duration,
    /// `None` keeps the stream open until the server or the caller closes it.
    pub stream_timeout: Option<Duration>,
    pub connect_timeout: Duration,
    pub pool_idle_timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub user_agent: String,
    /// Send `Accept-Encoding: gzip, deflate` and decompress transparently.
    pub accept_compressed: bool,
    /// Emit `debug!` events for every request and response.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: crate::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            stream_timeout: None,
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 10,
            user_agent: crate::USER_AGENT.to_string(),
            accept_compressed: true,
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Point at another host, e.g. a mock server in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Fail the stream if no bytes arrive for `timeout`.
    ///
    /// The server sends a keep-alive newline every 20 seconds, so anything
    /// comfortably above that detects a stalled connection.
    pub fn with_stream_timeout(mut self, timeout: Duration) -> Self {
        self.config.stream_timeout = Some(timeout);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Tune the connection pool.
    pub fn with_pool(mut self, idle_timeout: Duration, max_idle_per_host: usize) -> Self {
        self.config.pool_idle_timeout = idle_timeout;
        self.config.pool_max_idle_per_host = max_idle_per_host;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn with_compression(mut self, accept_compressed: bool) -> Self {
        self.config.accept_compressed = accept_compressed;
        self
    }

    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.twitter.com/2/");
        assert!(config.accept_compressed);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.stream_timeout.is_none());
        assert!(config.user_agent.starts_with("birdwire/"));
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::builder()
            .with_base_url("http://127.0.0.1:9000/2/")
            .with_timeout(Duration::from_secs(60))
            .with_stream_timeout(Duration::from_secs(45))
            .with_pool(Duration::from_secs(5), 2)
            .with_compression(false)
            .with_user_agent("custom-agent/1.0")
            .with_tracing(false)
            .build();

        assert_eq!(config.base_url, "http://127.0.0.1:9000/2/");
        assert!(!config.accept_compressed);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.stream_timeout, Some(Duration::from_secs(45)));
        assert_eq!(config.pool_idle_timeout, Duration::from_secs(5));
        assert_eq!(config.pool_max_idle_per_host, 2);
        assert_eq!(config.user_agent, "custom-agent/1.0");
        assert!(!config.enable_tracing);
    }
}
