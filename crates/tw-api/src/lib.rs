//! # tw-api
//!
//! Typed Twitter v2 API on top of `tw-client`.
//!
//! ## Features
//!
//! - **Envelopes** - Decode `data` / `includes` / `detail` / `meta` responses
//! - **Author reconciliation** - Attach expanded authors to their tweets
//! - **Lookups** - Tweets by id or author, users by username
//! - **Filtered stream** - Manage rules and read the live stream
//! - **Likes** - Like and unlike tweets
//!
//! ## Example
//!
//! ```rust,ignore
//! use birdwire_tw_api::{Expression, StreamRule, TwitterClient, UserOption};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), birdwire_tw_api::Error> {
//!     let client = TwitterClient::from_env()?;
//!
//!     let users = client.get_users(&["TwitterDev"], &[UserOption::Description]).await?;
//!
//!     client
//!         .add_stream_rules(&[StreamRule::new(Expression::hashtag("rustlang")).with_tag("rust")])
//!         .await?;
//!
//!     client
//!         .next_tweet_stream_until(&[UserOption::Username], async {
//!             let _ = tokio::signal::ctrl_c().await;
//!         }, |tweet| println!("{}", tweet.text))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
pub mod envelope;
mod error;
pub mod expression;
mod model;
mod options;
pub mod query;
pub mod reconcile;

pub use client::{TwitterClient, BASE_URL_ENV, TOKEN_ENV};
pub use envelope::{decode, Answer, DecodeConfig};
pub use error::{Error, ErrorKind, Result};
pub use expression::{Expression, RuleValue};
pub use model::{HasAuthor, Includes, Like, Meta, Problem, StreamInfo, Summary, Tweet, User};
pub use options::UserOption;
pub use query::{QueryBuilder, StreamRule};
pub use reconcile::Reconcile;

pub use birdwire_tw_client::{ClientConfig, ClientConfigBuilder, RateLimit};
