use tracing::instrument;

use crate::error::Result;
use crate::model::User;
use crate::options::UserOption;
use crate::query::QueryBuilder;

impl super::TwitterClient {
    /// Fetch users by username.
    #[instrument(skip(self))]
    pub async fn get_users(&self, usernames: &[&str], options: &[UserOption]) -> Result<Vec<User>> {
        let path = QueryBuilder::new("users/by")
            .list("usernames", usernames)
            .user_fields(options)
            .build();
        self.get_answer::<Vec<User>>(&path).await?.into_many()
    }
}
