//! Core domain types and service traits for sns-notify
//!
//! This module defines the data passed between the CLI, the message builder
//! and the publisher, along with the trait contract for the external publish
//! capability.

use crate::notification::PublishError;
use async_trait::async_trait;
use std::fmt;

/// The result of a monitoring check, as handed over by the check scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckNotification {
    /// The host on which the check was done
    pub host: String,
    /// The service being checked; `None` for a host check
    pub service: Option<String>,
    /// Notification type, e.g. "PROBLEM", "RECOVERY" or "ACKNOWLEDGMENT"
    pub notification_type: String,
    /// Check state, e.g. "OK", "WARNING" or "CRITICAL"
    pub state: String,
    /// Output of the check command
    pub output: String,
}

/// How SNS should interpret the message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStructure {
    /// The body is a JSON object mapping protocol names to protocol-specific text.
    Json,
}

impl MessageStructure {
    /// The value of the `MessageStructure` request parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStructure::Json => "json",
        }
    }
}

impl fmt::Display for MessageStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parameters of a single SNS `Publish` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    pub topic_arn: String,
    /// The serialized protocol map
    pub message: String,
    pub message_structure: MessageStructure,
    pub subject: String,
}

/// What the service returned for an accepted publish.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PublishReceipt {
    /// The message id assigned by SNS, when the service reports one
    pub message_id: Option<String>,
}

// =============================================================================
// Service Traits
// =============================================================================

/// Delivers a publish request to a notification service.
#[async_trait]
pub trait PublishClient: Send + Sync {
    /// A short, descriptive name for the client (e.g., "sns").
    /// Used for logging.
    fn name(&self) -> &str;

    /// Sends one publish request.
    ///
    /// # Returns
    /// * `Ok(PublishReceipt)` if the service accepted the message
    /// * `Err(PublishError::Service)` wrapping the service or transport error
    ///   untouched
    async fn publish(&self, request: &PublishRequest) -> Result<PublishReceipt, PublishError>;
}
