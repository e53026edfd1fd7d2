//! sns-notify - Monitoring Check Notifier
//!
//! Sends one monitoring check result to an AWS SNS topic, with a full text
//! body for email subscribers and a one-line form for SMS subscribers.

use anyhow::Result;
use clap::Parser;
use sns_notify::{app, cli::Cli, config::Config, notification::AwsSnsClient};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration by layering sources: defaults, file, environment, and CLI args.
    let config = Config::load(&cli).unwrap_or_else(|err| {
        // Logging is configured from the config, so fall back to the default level here.
        init_tracing("info");
        error!("Failed to load configuration: {:#}", err);
        std::process::exit(1);
    });

    init_tracing(&config.log_level);

    debug!("Log Level: {}", config.log_level);
    debug!(
        "AWS Region: {}",
        config.aws.region.as_deref().unwrap_or("provider chain")
    );
    if let Some(profile) = &config.aws.profile {
        debug!("AWS Profile: {}", profile);
    }
    if let Some(endpoint_url) = &config.aws.endpoint_url {
        debug!("SNS Endpoint: {}", endpoint_url);
    }
    debug!("Publish Timeout: {}s", config.aws.timeout_seconds);

    let client = AwsSnsClient::from_config(&config.aws).await;
    let receipt = app::run(&cli, &client).await?;

    info!(
        "Notification delivered to {} (message id: {}).",
        cli.topic_arn,
        receipt.message_id.as_deref().unwrap_or("unknown")
    );
    Ok(())
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over `default_level`.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
