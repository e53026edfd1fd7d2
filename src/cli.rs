//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments using the `clap` crate. The
//! check fields describe the notification to send; the remaining flags are
//! merged over the `sns-notify.toml` file and environment variables.

use clap::Parser;
use figment::{
    value::{Dict, Map, Tag, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

use crate::core::CheckNotification;

/// Send a monitoring check notification to an AWS SNS topic.
#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The ARN for the SNS topic to notify.
    #[arg(value_name = "TOPICARN")]
    pub topic_arn: String,

    /// The name of the service being checked. When absent, this is a host
    /// check notification.
    #[arg(short = 'S', long)]
    pub service: Option<String>,

    /// The host on which the check was done.
    #[arg(short = 'H', long)]
    pub host: String,

    /// "PROBLEM", "RECOVERY", or "ACKNOWLEDGMENT".
    #[arg(short = 'T', long = "type", visible_alias = "notification-type")]
    pub notification_type: String,

    /// "OK", "WARNING", or "CRITICAL".
    #[arg(long)]
    pub state: String,

    /// The output of the check command. Sent in full in the SMS form.
    #[arg(long, visible_alias = "check-output")]
    pub output: String,

    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// AWS region of the topic.
    #[arg(long)]
    pub region: Option<String>,

    /// Named AWS profile to take credentials from.
    #[arg(long)]
    pub profile: Option<String>,

    /// Custom SNS endpoint URL.
    #[arg(long, value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Timeout for the publish call in seconds.
    #[arg(long, value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Log filter used when RUST_LOG is not set (e.g. "debug").
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// The check described by the arguments.
    pub fn check_notification(&self) -> CheckNotification {
        CheckNotification {
            host: self.host.clone(),
            service: self.service.clone(),
            notification_type: self.notification_type.clone(),
            state: self.state.clone(),
            output: self.output.clone(),
        }
    }
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();

        if let Some(level) = &self.log_level {
            dict.insert("log_level".into(), Value::from(level.clone()));
        }

        let mut aws = Dict::new();
        if let Some(region) = &self.region {
            aws.insert("region".into(), Value::from(region.clone()));
        }
        if let Some(profile) = &self.profile {
            aws.insert("profile".into(), Value::from(profile.clone()));
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            aws.insert("endpoint_url".into(), Value::from(endpoint_url.clone()));
        }
        if let Some(timeout) = self.timeout_secs {
            aws.insert("timeout_seconds".into(), Value::from(timeout));
        }
        if !aws.is_empty() {
            dict.insert("aws".into(), Value::Dict(Tag::Default, aws));
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const TOPIC: &str = "arn:aws:sns:us-east-1:123456789012:test";

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_long_flags() {
        let cli = Cli::try_parse_from([
            "sns-notify",
            TOPIC,
            "--host=web1",
            "--service=nginx",
            "--type=PROBLEM",
            "--state=CRITICAL",
            "--output=connection refused",
        ])
        .unwrap();

        assert_eq!(cli.topic_arn, TOPIC);
        assert_eq!(cli.host, "web1");
        assert_eq!(cli.service.as_deref(), Some("nginx"));
        assert_eq!(cli.notification_type, "PROBLEM");
        assert_eq!(cli.state, "CRITICAL");
        assert_eq!(cli.output, "connection refused");
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_short_flags_and_aliases() {
        let cli = Cli::try_parse_from([
            "sns-notify",
            TOPIC,
            "-H",
            "db1",
            "-S",
            "postgres",
            "--notification-type",
            "RECOVERY",
            "--state",
            "OK",
            "--check-output",
            "accepting connections",
        ])
        .unwrap();

        let check = cli.check_notification();
        assert_eq!(check.host, "db1");
        assert_eq!(check.service.as_deref(), Some("postgres"));
        assert_eq!(check.notification_type, "RECOVERY");
        assert_eq!(check.output, "accepting connections");

        let cli = Cli::try_parse_from([
            "sns-notify", TOPIC, "-H", "db1", "-T", "ACKNOWLEDGMENT", "--state", "WARNING",
            "--output", "slow",
        ])
        .unwrap();
        assert_eq!(cli.notification_type, "ACKNOWLEDGMENT");
        assert!(cli.service.is_none());
    }

    #[test]
    fn test_missing_required_flag_is_an_error() {
        let result = Cli::try_parse_from([
            "sns-notify", TOPIC, "--host", "web1", "--type", "PROBLEM", "--state", "CRITICAL",
        ]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_missing_topic_arn_is_an_error() {
        let result = Cli::try_parse_from([
            "sns-notify", "--host", "web1", "--type", "PROBLEM", "--state", "CRITICAL",
            "--output", "x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_provider_only_emits_given_overrides() {
        let cli = Cli::default();
        let data = cli.data().unwrap();
        assert!(data[&Profile::Default].is_empty());

        let cli = Cli {
            region: Some("eu-west-1".to_string()),
            timeout_secs: Some(5),
            ..Default::default()
        };
        let data = cli.data().unwrap();
        let aws = data[&Profile::Default]["aws"].as_dict().unwrap();
        assert_eq!(aws["region"].as_str(), Some("eu-west-1"));
        assert_eq!(aws["timeout_seconds"].to_u128(), Some(5));
        assert!(!aws.contains_key("profile"));
    }
}
