/// sns-notify - send monitoring check notifications to AWS SNS
///
/// This library builds multi-protocol notification messages and publishes
/// them to an SNS topic with `MessageStructure=json`.
pub mod notification;

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod formatting;
pub mod message;

// Re-export core types for convenience
pub use crate::core::*;
pub use message::{MessageBuilder, NotificationMessage};
pub use notification::{publish_message, PublishError};
