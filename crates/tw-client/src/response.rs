//! HTTP response handling.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::stream::LineStream;

/// Wrapper around HTTP response with additional functionality.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        let status = self.status();
        (200..300).contains(&status)
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Rate limit window reported by the `x-rate-limit-*` headers.
    pub fn rate_limit(&self) -> Option<RateLimit> {
        let limit = self.header("x-rate-limit-limit")?.parse().ok()?;
        let remaining = self.header("x-rate-limit-remaining")?.parse().ok()?;
        let reset = self
            .header("x-rate-limit-reset")
            .and_then(|v| v.parse::<i64>().ok())
            .and_then(|secs| DateTime::from_timestamp(secs, 0));
        Some(RateLimit {
            limit,
            remaining,
            reset,
        })
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Read the whole body and keep the status and rate limit alongside it.
    pub async fn into_text_response(self) -> Result<TextResponse> {
        let status = self.status();
        let rate_limit = self.rate_limit();
        let body = self.text().await?;
        Ok(TextResponse {
            status,
            body,
            rate_limit,
        })
    }

    /// Consume the body lazily as newline-delimited lines.
    pub fn into_lines(self) -> LineStream {
        LineStream::new(self.inner.bytes_stream())
    }
}

/// A fully read response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw body text.
    pub body: String,
    /// Rate limit headers, when the server sent them.
    pub rate_limit: Option<RateLimit>,
}

impl TextResponse {
    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Classify a non-success response by status, carrying the reset
    /// instant from the rate-limit headers into a 429.
    pub fn to_error(&self) -> Error {
        Error::from_status(self.status, &self.body)
            .with_reset(self.rate_limit.and_then(|limit| limit.reset))
    }
}

/// Rate limit window information from response headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed in the current window.
    pub limit: u64,
    /// Requests left in the current window.
    pub remaining: u64,
    /// When the window resets.
    pub reset: Option<DateTime<Utc>>,
}

impl RateLimit {
    /// Number of requests already spent in this window.
    pub fn used(&self) -> u64 {
        self.limit.saturating_sub(self.remaining)
    }


    /// Returns true once the window has nothing left.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// Sanitize an error message to prevent exposing sensitive data.
///
/// This function:
/// - Redacts `Bearer <token>` pairs
/// - Redacts app-only bearer tokens (they start with a long run of `A`)
/// - Truncates messages longer than 500 characters
pub(crate) fn sanitize_error_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let mut sanitized = message.to_string();

    let bearer_pattern = regex_lite::Regex::new(r"Bearer[ \t]+[A-Za-z0-9%._~+/=-]+")
        .expect("static regex is valid");
    sanitized = bearer_pattern
        .replace_all(&sanitized, "Bearer [REDACTED_TOKEN]")
        .to_string();

    let token_pattern = regex_lite::Regex::new(r"A{20,}[A-Za-z0-9%._~+/=-]+")
        .expect("static regex is valid");
    sanitized = token_pattern
        .replace_all(&sanitized, "[REDACTED_TOKEN]")
        .to_string();

    if sanitized.len() > MAX_LENGTH {
        let mut cut = MAX_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}
