//! The main application logic, decoupled from the entry point.

use crate::{
    cli::Cli,
    core::{PublishClient, PublishReceipt},
    notification::publish_message,
};
use anyhow::Result;
use tracing::{debug, info, instrument};

/// Builds the notification described by `cli` and publishes it once through
/// `client`.
#[instrument(skip_all, fields(topic_arn = %cli.topic_arn))]
pub async fn run(cli: &Cli, client: &dyn PublishClient) -> Result<PublishReceipt> {
    let check = cli.check_notification();
    let message = check.to_message();

    info!(
        check_target = %check.check_target(),
        subject = message.subject(),
        "Sending notification."
    );
    debug!(payload = message.payload(), "Built protocol payload.");

    let receipt = publish_message(client, &cli.topic_arn, &message).await?;
    Ok(receipt)
}
