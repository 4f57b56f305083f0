//! # birdwire
//!
//! A typed client for the Twitter v2 REST and filtered-stream API.
//!
//! Responses are decoded into typed entities, expanded authors are attached
//! to the tweets that reference them, and error envelopes surface as typed
//! errors.
//!
//! ## Security
//!
//! - The bearer token is redacted in Debug output
//! - Tracing spans skip the token and request bodies
//! - Error messages built from response bodies have tokens redacted
//!
//! ## Crates
//!
//! - **birdwire-tw-client** - HTTP transport: bearer auth, compression, line-delimited streams
//! - **birdwire-tw-api** - Envelopes, author reconciliation, lookups, stream rules, likes
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use birdwire::{TwitterClient, UserOption};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads TWITTER_TOKEN
//!     let client = TwitterClient::from_env()?;
//!
//!     let tweets = client
//!         .get_tweets(&["1389189291582967809"], &[UserOption::Username])
//!         .await?;
//!
//!     for tweet in tweets {
//!         let author = tweet.author.map(|a| a.username).unwrap_or_default();
//!         println!("@{author}: {}", tweet.text);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "api")]
pub use birdwire_tw_api as api;
#[cfg(feature = "client")]
pub use birdwire_tw_client as client;

// Re-export commonly used types at the top level
#[cfg(feature = "api")]
pub use birdwire_tw_api::{
    Error, ErrorKind, Expression, Result, RuleValue, StreamInfo, StreamRule, Tweet, TwitterClient,
    User, UserOption,
};
#[cfg(feature = "client")]
pub use birdwire_tw_client::{ApiClient, ClientConfig};
