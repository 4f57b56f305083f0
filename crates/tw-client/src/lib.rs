//! # tw-client
//!
//! Core HTTP transport for the Twitter v2 API.
//!
//! This crate provides the foundational HTTP layer with:
//! - Bearer token authentication
//! - Compression support (gzip, deflate)
//! - Rate limit header inspection (read-only, nothing is retried)
//! - Connection pooling
//! - Line-delimited streaming responses
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (tw-api: envelopes, reconciliation, typed operations)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ApiClient                              │
//! │  - Holds base URL + bearer token + HTTP client              │
//! │  - get_text / post_json_text / delete_text / open_stream    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HttpClient                             │
//! │  - Raw HTTP with compression and tracing                    │
//! │  - Request building                                         │
//! │  - Response handling                                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use birdwire_tw_client::{ApiClient, StreamOpen};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), birdwire_tw_client::Error> {
//!     let client = ApiClient::new("bearer-token")?;
//!
//!     let response = client.get_text(&client.url("tweets?ids=20")).await?;
//!     println!("{} {}", response.status, response.body);
//!
//!     let mut lines = match client.open_stream(&client.url("tweets/search/stream")).await? {
//!         StreamOpen::Connected(lines) => lines,
//!         StreamOpen::Rejected(response) => return Err(response.to_error()),
//!     };
//!     while let Some(line) = lines.next_line().await {
//!         println!("{}", line?);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod api_client;
mod client;
mod config;
mod error;
mod request;
mod response;
pub mod security;
mod stream;

pub use api_client::ApiClient;
pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBody, RequestBuilder, RequestMethod};
pub use response::{RateLimit, Response, TextResponse};
pub use stream::{LineStream, StreamOpen};

/// Default base URL of the v2 API.
pub const DEFAULT_BASE_URL: &str = "https://api.twitter.com/2/";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("birdwire/", env!("CARGO_PKG_VERSION"));
