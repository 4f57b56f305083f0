use tracing::instrument;

use crate::error::{Error, ErrorKind, Result};
use crate::model::Tweet;
use crate::options::UserOption;
use crate::query::{path_segment, QueryBuilder};

impl super::TwitterClient {
    /// Fetch one tweet by id.
    ///
    /// With `options`, the author is expanded and attached to the tweet.
    #[instrument(skip(self))]
    pub async fn get_tweet(&self, id: &str, options: &[UserOption]) -> Result<Tweet> {
        let path = QueryBuilder::new(format!("tweets/{}", path_segment(id)))
            .author_fields(options)
            .build();
        self.get_answer::<Tweet>(&path)
            .await?
            .into_one()?
            .ok_or_else(|| Error::new(ErrorKind::MissingData))
    }

    /// Fetch tweets by id.
    ///
    /// Unknown ids are left out of the result rather than failing the call.
    #[instrument(skip(self))]
    pub async fn get_tweets(&self, ids: &[&str], options: &[UserOption]) -> Result<Vec<Tweet>> {
        let path = QueryBuilder::new("tweets")
            .list("ids", ids)
            .author_fields(options)
            .build();
        self.get_answer::<Vec<Tweet>>(&path).await?.into_many()
    }

    /// Fetch the most recent tweets authored by a user.
    #[instrument(skip(self))]
    pub async fn get_tweets_from_user_id(
        &self,
        user_id: &str,
        options: &[UserOption],
    ) -> Result<Vec<Tweet>> {
        let path = QueryBuilder::new(format!("users/{}/tweets", path_segment(user_id)))
            .author_fields(options)
            .build();
        self.get_answer::<Vec<Tweet>>(&path).await?.into_many()
    }
}
