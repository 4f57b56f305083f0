use birdwire::TwitterClient;

/// Build a client from `TWITTER_TOKEN`.
///
/// Live tests MUST run against the real API: this panics with a helpful
/// message instead of skipping when the token is missing.
pub fn get_client() -> TwitterClient {
    match std::env::var("TWITTER_TOKEN") {
        Ok(token) if !token.is_empty() => {}
        _ => panic!(
            "\n\n\
            TWITTER_TOKEN is not set.\n\
            Live integration tests need an app bearer token:\n\
            \x20 export TWITTER_TOKEN='AAAA...'\n\
            \x20 cargo test --test integration -- --ignored\n\n"
        ),
    }

    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    TwitterClient::from_env().expect("Failed to create client")
}
