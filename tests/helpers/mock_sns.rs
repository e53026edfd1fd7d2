//! A mock SNS client for testing publish integration.

use async_trait::async_trait;
use sns_notify::core::{PublishClient, PublishReceipt, PublishRequest};
use sns_notify::notification::PublishError;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Stand-in for an error reported by the notification service.
#[derive(Error, Debug, Clone)]
#[error("{0}")]
pub struct MockServiceError(pub String);

#[derive(Clone, Debug, Default)]
pub struct MockSnsClient {
    pub sent_requests: Arc<Mutex<Vec<PublishRequest>>>,
    failure: Option<String>,
}

impl MockSnsClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose every publish fails with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Default::default()
        }
    }

    pub fn get_sent_requests(&self) -> Vec<PublishRequest> {
        self.sent_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PublishClient for MockSnsClient {
    fn name(&self) -> &str {
        "mock-sns"
    }

    async fn publish(&self, request: &PublishRequest) -> Result<PublishReceipt, PublishError> {
        self.sent_requests.lock().unwrap().push(request.clone());
        match &self.failure {
            Some(reason) => Err(PublishError::service(
                &request.topic_arn,
                MockServiceError(reason.clone()),
            )),
            None => Ok(PublishReceipt {
                message_id: Some(format!("mock-{}", self.sent_requests.lock().unwrap().len())),
            }),
        }
    }
}
