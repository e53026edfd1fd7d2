// src/formatting.rs

use crate::core::CheckNotification;
use crate::message::{MessageBuilder, NotificationMessage, SMS_PROTOCOL};

impl CheckNotification {
    /// `host`, or `host:service` for a service check.
    pub fn check_target(&self) -> String {
        match self.service.as_deref() {
            Some(service) if !service.is_empty() => format!("{}:{}", self.host, service),
            _ => self.host.clone(),
        }
    }

    /// The email subject line.
    pub fn subject(&self) -> String {
        format!(
            "{} {} {}",
            self.notification_type,
            self.check_target(),
            self.state
        )
    }

    /// The email body, also used as the default for every other protocol.
    pub fn email_body(&self) -> String {
        format!("{}\n{}\n\n{}", self.check_target(), self.state, self.output)
    }

    /// The single-line SMS text.
    pub fn sms_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.notification_type,
            self.check_target(),
            self.state,
            self.output
        )
    }

    /// Wraps the check up as a message with an SMS override.
    pub fn to_message(&self) -> NotificationMessage {
        MessageBuilder::new(self.subject(), self.email_body())
            .with_override(SMS_PROTOCOL, self.sms_text())
            .build()
    }
}
