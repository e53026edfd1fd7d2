//! A client for publishing to AWS SNS.

use crate::config::AwsConfig;
use crate::core::{PublishClient, PublishReceipt, PublishRequest};
use crate::notification::PublishError;
use async_trait::async_trait;
use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion, ConfigLoader};
use aws_sdk_sns::config::Region;
use std::time::Duration;
use tracing::{debug, instrument};

/// Publishes through the AWS SDK's SNS client.
pub struct AwsSnsClient {
    client: aws_sdk_sns::Client,
}

impl AwsSnsClient {
    /// Creates a new `AwsSnsClient` around an existing SDK client.
    pub fn new(client: aws_sdk_sns::Client) -> Self {
        Self { client }
    }

    /// Resolves credentials and region from the standard AWS provider chain,
    /// applying any overrides from `config`. SDK retries are disabled so each
    /// publish is exactly one request.
    pub async fn from_config(config: &AwsConfig) -> Self {
        Self::from_loader(config, Self::loader(config)).await
    }

    fn loader(config: &AwsConfig) -> ConfigLoader {
        let timeout = Duration::from_secs(config.timeout_seconds);
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .retry_config(RetryConfig::disabled())
            .timeout_config(TimeoutConfig::builder().operation_timeout(timeout).build());

        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        loader
    }

    async fn from_loader(config: &AwsConfig, loader: ConfigLoader) -> Self {
        let sdk_config = loader.load().await;
        debug!(
            region = ?sdk_config.region(),
            timeout_seconds = config.timeout_seconds,
            "SNS client configured"
        );
        Self::new(aws_sdk_sns::Client::new(&sdk_config))
    }
}

#[async_trait]
impl PublishClient for AwsSnsClient {
    fn name(&self) -> &str {
        "sns"
    }

    #[instrument(skip(self, request), fields(topic_arn = %request.topic_arn))]
    async fn publish(&self, request: &PublishRequest) -> Result<PublishReceipt, PublishError> {
        debug!(payload = %request.message, "Sending SNS publish request.");
        let output = self
            .client
            .publish()
            .topic_arn(&request.topic_arn)
            .message(&request.message)
            .message_structure(request.message_structure.as_str())
            .subject(&request.subject)
            .send()
            .await
            .map_err(|e| PublishError::service(&request.topic_arn, e))?;

        Ok(PublishReceipt {
            message_id: output.message_id().map(str::to_string),
        })
    }
}
