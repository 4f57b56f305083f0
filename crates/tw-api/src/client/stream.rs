use std::future::Future;

use futures::stream::{self, Stream};
use serde::de::IgnoredAny;
use tracing::{debug, info, instrument};

use birdwire_tw_client::{LineStream, StreamOpen};

use crate::envelope::{self, DecodeConfig};
use crate::error::{Error, ErrorKind, Result};
use crate::model::{StreamInfo, Tweet};
use crate::options::UserOption;
use crate::query::{AddRules, DeleteIds, DeleteRules, QueryBuilder, StreamRule};

const RULES_PATH: &str = "tweets/search/stream/rules";
const STREAM_PATH: &str = "tweets/search/stream";

impl super::TwitterClient {
    // =========================================================================
    // Rules
    // =========================================================================

    /// List the rules currently registered on the filtered stream.
    #[instrument(skip(self))]
    pub async fn get_stream_rules(&self) -> Result<Vec<StreamInfo>> {
        self.get_answer::<Vec<StreamInfo>>(RULES_PATH)
            .await?
            .into_many()
    }

    /// Register rules; returns the rules the server created.
    #[instrument(skip(self))]
    pub async fn add_stream_rules(&self, rules: &[StreamRule]) -> Result<Vec<StreamInfo>> {
        if rules.is_empty() {
            return Ok(Vec::new());
        }
        self.post_answer::<Vec<StreamInfo>, _>(RULES_PATH, &AddRules { add: rules })
            .await?
            .into_many()
    }

    /// Remove rules by id; returns how many the server deleted.
    #[instrument(skip(self))]
    pub async fn delete_stream_rules(&self, ids: &[&str]) -> Result<u32> {
        if ids.is_empty() {
            return Ok(0);
        }
        let body = DeleteRules {
            delete: DeleteIds { ids },
        };
        let answer = self
            .post_answer::<IgnoredAny, _>(RULES_PATH, &body)
            .await?
            .check()?;
        answer
            .summary()
            .map(|summary| summary.deleted)
            .ok_or_else(|| Error::new(ErrorKind::MissingData))
    }

    // =========================================================================
    // Filtered stream
    // =========================================================================

    /// Read the filtered stream until the server closes it, calling
    /// `on_tweet` for every tweet.
    pub async fn next_tweet_stream<C>(&self, options: &[UserOption], on_tweet: C) -> Result<()>
    where
        C: FnMut(Tweet),
    {
        self.next_tweet_stream_until(options, std::future::pending(), on_tweet)
            .await
    }

    /// Read the filtered stream until the server closes it or `shutdown`
    /// completes, calling `on_tweet` for every tweet.
    ///
    /// Blank keep-alive lines and lines without a tweet are skipped. A line
    /// carrying an error `detail` ends the read with [`ErrorKind::Api`].
    /// The connection is dropped as soon as this returns.
    #[instrument(skip(self, shutdown, on_tweet))]
    pub async fn next_tweet_stream_until<F, C>(
        &self,
        options: &[UserOption],
        shutdown: F,
        mut on_tweet: C,
    ) -> Result<()>
    where
        F: Future<Output = ()>,
        C: FnMut(Tweet),
    {
        tokio::pin!(shutdown);

        let path = stream_path(options);
        let mut lines = tokio::select! {
            biased;
            _ = &mut shutdown => {
                info!("Shutdown requested before the stream opened");
                return Ok(());
            }
            opened = self.open_feed(&path) => opened?,
        };
        info!("Filtered stream connected");

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!("Shutdown requested, closing filtered stream");
                    return Ok(());
                }
                line = lines.next_line() => match line {
                    Some(line) => {
                        if let Some(tweet) = parse_stream_line(&line?, &self.decode)? {
                            on_tweet(tweet);
                        }
                    }
                    None => {
                        info!("Filtered stream closed by server");
                        return Ok(());
                    }
                },
            }
        }
    }

    /// The filtered stream as a `futures::Stream` of tweets.
    ///
    /// The connection opens on first poll and closes when the stream is
    /// dropped. The stream ends after yielding its first error.
    pub fn tweet_stream(
        &self,
        options: &[UserOption],
    ) -> impl Stream<Item = Result<Tweet>> + Send + 'static {
        let start = Feed::Connect {
            client: self.clone(),
            path: stream_path(options),
        };

        stream::unfold(start, |feed| async move {
            let (mut lines, decode) = match feed {
                Feed::Connect { client, path } => match client.open_feed(&path).await {
                    Ok(lines) => (lines, client.decode),
                    Err(err) => return Some((Err(err), Feed::Done)),
                },
                Feed::Read { lines, decode } => (lines, decode),
                Feed::Done => return None,
            };

            loop {
                let line = match lines.next_line().await? {
                    Ok(line) => line,
                    Err(err) => return Some((Err(err.into()), Feed::Done)),
                };
                match parse_stream_line(&line, &decode) {
                    Ok(Some(tweet)) => return Some((Ok(tweet), Feed::Read { lines, decode })),
                    Ok(None) => continue,
                    Err(err) => return Some((Err(err), Feed::Done)),
                }
            }
        })
    }

    /// Connect to the filtered stream.
    ///
    /// A refused connection is reported the same way as a refused lookup: its
    /// `detail` if the body has one, otherwise the status.
    async fn open_feed(&self, path: &str) -> Result<LineStream> {
        match self.client.open_stream(path).await? {
            StreamOpen::Connected(lines) => Ok(lines),
            StreamOpen::Rejected(response) => {
                super::note_rate_limit(&response);
                Err(self.rejection(&response))
            }
        }
    }
}

enum Feed {
    Connect {
        client: super::TwitterClient,
        path: String,
    },
    Read {
        lines: LineStream,
        decode: DecodeConfig,
    },
    Done,
}

fn stream_path(options: &[UserOption]) -> String {
    QueryBuilder::new(STREAM_PATH).author_fields(options).build()
}

/// Decode one line of the filtered stream.
///
/// Each line is its own single-tweet envelope, reconciled on the single
/// path. Blank lines and envelopes without data yield `None`.
fn parse_stream_line(line: &str, decode: &DecodeConfig) -> Result<Option<Tweet>> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    let tweet = envelope::decode::<Tweet>(line, decode)?.into_one()?;
    if tweet.is_none() {
        debug!(line_len = line.len(), "Stream line carried no tweet");
    }
    Ok(tweet)
}
