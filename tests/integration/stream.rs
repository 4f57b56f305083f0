//! Filtered stream rules and reading against the live API.

use std::time::Duration;

use super::common::get_client;
use birdwire::{Expression, StreamRule};

#[tokio::test]
#[ignore]
async fn test_stream_rule_lifecycle() {
    let client = get_client();
    let tag = format!("birdwire-it-{}", std::process::id());

    let created = client
        .add_stream_rules(&[StreamRule::new(
            Expression::hashtag("rustlang").and(Expression::keyword("is:retweet").not()),
        )
        .with_tag(&tag)])
        .await
        .expect("rule should be added");
    assert_eq!(created.len(), 1);

    let rules = client.get_stream_rules().await.expect("rules should list");
    assert!(rules.iter().any(|r| r.id == created[0].id));

    let deleted = client
        .delete_stream_rules(&[created[0].id.as_str()])
        .await
        .expect("rule should be deleted");
    assert_eq!(deleted, 1);
}

#[tokio::test]
#[ignore]
async fn test_stream_stops_on_shutdown() {
    let client = get_client();

    let mut received = 0usize;
    client
        .next_tweet_stream_until(&[], tokio::time::sleep(Duration::from_secs(5)), |_| {
            received += 1
        })
        .await
        .expect("stream should end cleanly on shutdown");

    println!("received {received} tweets in 5s");
}
