use tracing::instrument;

use crate::error::{Error, ErrorKind, Result};
use crate::model::Like;
use crate::query::{path_segment, LikeRequest};

impl super::TwitterClient {
    /// Like a tweet on behalf of `user_id`.
    ///
    /// Requires a user-context token; an app-only bearer token gets an
    /// error detail back.
    #[instrument(skip(self))]
    pub async fn like_tweet(&self, user_id: &str, tweet_id: &str) -> Result<Like> {
        let path = format!("users/{}/likes", path_segment(user_id));
        self.post_answer::<Like, _>(&path, &LikeRequest { tweet_id })
            .await?
            .into_one()?
            .ok_or_else(|| Error::new(ErrorKind::MissingData))
    }

    /// Undo a like on behalf of `user_id`.
    #[instrument(skip(self))]
    pub async fn unlike_tweet(&self, user_id: &str, tweet_id: &str) -> Result<Like> {
        let path = format!(
            "users/{}/likes/{}",
            path_segment(user_id),
            path_segment(tweet_id)
        );
        self.delete_answer::<Like>(&path)
            .await?
            .into_one()?
            .ok_or_else(|| Error::new(ErrorKind::MissingData))
    }
}
