//! Tweet and user lookups against the live API.

use super::common::get_client;
use birdwire::UserOption;

#[tokio::test]
#[ignore]
async fn test_get_tweets_by_ids() {
    let client = get_client();

    let tweets = client
        .get_tweets(&["1389189291582967809"], &[])
        .await
        .expect("lookup should succeed");

    assert_eq!(tweets.len(), 1);
    assert_eq!(tweets[0].id, "1389189291582967809");
    assert!(tweets[0].author.is_none(), "no expansion was requested");
}

#[tokio::test]
#[ignore]
async fn test_get_tweets_with_author() {
    let client = get_client();

    let tweets = client
        .get_tweets(
            &["1389189291582967809", "1389330151779930113"],
            &[UserOption::CreatedAt, UserOption::Verified],
        )
        .await
        .expect("lookup should succeed");

    assert_eq!(tweets.len(), 2);
    for tweet in &tweets {
        let author = tweet.author.as_ref().expect("author should be expanded");
        assert_eq!(Some(author.id.as_str()), tweet.author_id.as_deref());
        assert!(author.created_at.is_some());
    }
}

#[tokio::test]
#[ignore]
async fn test_get_tweet_single() {
    let client = get_client();

    let tweet = client
        .get_tweet("1389189291582967809", &[UserOption::Username])
        .await
        .expect("lookup should succeed");

    let author = tweet.author.expect("author should be expanded");
    assert_eq!(Some(author.id.as_str()), tweet.author_id.as_deref());
}

#[tokio::test]
#[ignore]
async fn test_get_tweets_from_user_id() {
    let client = get_client();

    // @TwitterDev
    let tweets = client
        .get_tweets_from_user_id("2244994945", &[UserOption::Username])
        .await
        .expect("timeline should load");

    for tweet in &tweets {
        assert_eq!(
            tweet.author.as_ref().map(|a| a.username.as_str()),
            Some("TwitterDev")
        );
    }
}

#[tokio::test]
#[ignore]
async fn test_get_users() {
    let client = get_client();

    let users = client
        .get_users(&["TwitterDev"], &[UserOption::Description])
        .await
        .expect("user lookup should succeed");

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, "2244994945");
    assert!(users[0].description.is_some());
}

#[tokio::test]
#[ignore]
async fn test_invalid_token_is_api_error() {
    let client = birdwire::TwitterClient::new("not-a-real-token").expect("client");

    let err = client
        .get_tweets(&["20"], &[])
        .await
        .expect_err("bad token must fail");

    assert!(err.is_api_error(), "unexpected error: {err:?}");
}
