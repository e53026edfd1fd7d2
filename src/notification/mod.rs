//! Publishing notification messages to a topic.
//!
//! `publish_message` translates a [`NotificationMessage`] into a single
//! [`PublishRequest`] and hands it to a [`PublishClient`]. Failures are passed
//! back to the caller as-is; nothing here retries.
pub mod sns;

use crate::core::{MessageStructure, PublishClient, PublishReceipt, PublishRequest};
use crate::message::NotificationMessage;
use thiserror::Error;
use tracing::{error, info, instrument};

pub use sns::AwsSnsClient;

/// Boxed error raised by a publish client.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("topic ARN must not be empty")]
    EmptyTopicArn,

    #[error("failed to publish to {topic_arn}")]
    Service {
        topic_arn: String,
        #[source]
        source: BoxError,
    },
}

impl PublishError {
    /// Wraps an error returned by the notification service.
    pub fn service(topic_arn: impl Into<String>, source: impl Into<BoxError>) -> Self {
        PublishError::Service {
            topic_arn: topic_arn.into(),
            source: source.into(),
        }
    }

    /// The error and every underlying cause, joined with `": "`.
    pub fn reason(&self) -> String {
        anyhow::Chain::new(self)
            .map(|cause| cause.to_string())
            .collect::<Vec<_>>()
            .join(": ")
    }
}

/// Publishes `message` to `topic_arn` with one call to `client`.
#[instrument(skip(client, message), fields(client = client.name(), subject = message.subject()))]
pub async fn publish_message(
    client: &dyn PublishClient,
    topic_arn: &str,
    message: &NotificationMessage,
) -> Result<PublishReceipt, PublishError> {
    if topic_arn.is_empty() {
        return Err(PublishError::EmptyTopicArn);
    }

    let request = PublishRequest {
        topic_arn: topic_arn.to_string(),
        message: message.payload().to_string(),
        message_structure: MessageStructure::Json,
        subject: message.subject().to_string(),
    };

    match client.publish(&request).await {
        Ok(receipt) => {
            info!(
                message_id = receipt.message_id.as_deref().unwrap_or("<none>"),
                "Published notification."
            );
            Ok(receipt)
        }
        Err(e) => {
            error!(error = %e.reason(), "Publish failed");
            Err(e)
        }
    }
}
