//! Print the filtered stream until Ctrl+C.
//!
//! Any arguments are registered as stream rules (tagged `stream-tail`)
//! before the stream is opened.
//!
//! ```sh
//! export TWITTER_TOKEN='AAAA...'
//! cargo run --bin stream-tail -- '#rustlang' 'from:rustlang'
//! ```

use anyhow::Context;
use birdwire::{StreamRule, TwitterClient, UserOption};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const RULE_TAG: &str = "stream-tail";

/// Waits for SIGINT (and SIGTERM on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, closing stream"),
        () = terminate => info!("Received SIGTERM, closing stream"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stream_tail=info,birdwire_tw_api=info,birdwire_tw_client=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = TwitterClient::from_env().context("TWITTER_TOKEN must hold a bearer token")?;

    let new_rules: Vec<StreamRule> = std::env::args()
        .skip(1)
        .map(|query| StreamRule::new(query).with_tag(RULE_TAG))
        .collect();
    if !new_rules.is_empty() {
        let created = client
            .add_stream_rules(&new_rules)
            .await
            .context("failed to add stream rules")?;
        info!(count = created.len(), "Rules added");
    }

    let rules = client
        .get_stream_rules()
        .await
        .context("failed to list stream rules")?;
    for rule in &rules {
        eprintln!(
            "rule {} [{}]: {}",
            rule.id,
            rule.tag.as_deref().unwrap_or("-"),
            rule.value
        );
    }
    if rules.is_empty() {
        warn!("No rules registered; the stream will stay silent");
    }

    client
        .next_tweet_stream_until(
            &[UserOption::Username, UserOption::Name],
            shutdown_signal(),
            |tweet| {
                let author = tweet
                    .author
                    .as_ref()
                    .map(|user| user.username.as_str())
                    .unwrap_or("?");
                println!("{} @{}: {}", tweet.id, author, tweet.text);
            },
        )
        .await
        .context("filtered stream failed")?;

    Ok(())
}
