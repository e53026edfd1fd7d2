//! Multi-protocol notification messages.
//!
//! A `NotificationMessage` pairs a subject with a JSON payload mapping SNS
//! protocol names to the text delivered over that protocol. The payload always
//! carries a `"default"` entry; overrides are layered on top of it.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Protocol key SNS falls back to for any protocol without its own entry.
pub const DEFAULT_PROTOCOL: &str = "default";

/// Protocol key used for SMS subscribers.
pub const SMS_PROTOCOL: &str = "sms";

/// An immutable notification, ready to be published with `MessageStructure=json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    subject: String,
    default_body: String,
    protocol_overrides: BTreeMap<String, String>,
    payload: String,
}

impl NotificationMessage {
    /// Builds a message from a subject, a default body and optional per-protocol
    /// overrides. An override keyed `"default"` replaces the default body in the
    /// payload.
    pub fn new(
        subject: impl Into<String>,
        default_body: impl Into<String>,
        protocol_overrides: Option<BTreeMap<String, String>>,
    ) -> Self {
        let subject = subject.into();
        let default_body = default_body.into();
        let protocol_overrides = protocol_overrides.unwrap_or_default();

        let mut protocols = Map::new();
        protocols.insert(
            DEFAULT_PROTOCOL.to_string(),
            Value::String(default_body.clone()),
        );
        for (protocol, text) in &protocol_overrides {
            protocols.insert(protocol.clone(), Value::String(text.clone()));
        }
        let payload = Value::Object(protocols).to_string();

        Self {
            subject,
            default_body,
            protocol_overrides,
            payload,
        }
    }

    /// Builds a message that renders identically for every protocol.
    pub fn uniform(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(subject, body, None)
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn default_body(&self) -> &str {
        &self.default_body
    }

    pub fn protocol_overrides(&self) -> &BTreeMap<String, String> {
        &self.protocol_overrides
    }

    /// The serialized protocol map sent as the SNS message body.
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

/// Fluent construction of a [`NotificationMessage`].
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    subject: String,
    default_body: String,
    overrides: BTreeMap<String, String>,
}

impl MessageBuilder {
    pub fn new(subject: impl Into<String>, default_body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            default_body: default_body.into(),
            overrides: BTreeMap::new(),
        }
    }

    /// Sets the text for a single protocol, replacing any earlier override for it.
    pub fn with_override(mut self, protocol: impl Into<String>, text: impl Into<String>) -> Self {
        self.overrides.insert(protocol.into(), text.into());
        self
    }

    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.overrides
            .extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn build(self) -> NotificationMessage {
        let overrides = if self.overrides.is_empty() {
            None
        } else {
            Some(self.overrides)
        };
        NotificationMessage::new(self.subject, self.default_body, overrides)
    }
}
