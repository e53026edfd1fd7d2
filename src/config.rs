//! Configuration management for sns-notify
//!
//! This module defines the `Config` struct holding the logging and AWS client
//! settings. It uses the `figment` crate to layer defaults, an optional
//! `sns-notify.toml` file, `SNS_NOTIFY_`-prefixed environment variables and
//! command-line flags, in that order of precedence.

use anyhow::{bail, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::Cli;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "sns-notify.toml";

/// Prefix for environment overrides, e.g. `SNS_NOTIFY_AWS__REGION=eu-west-1`.
pub const ENV_PREFIX: &str = "SNS_NOTIFY_";

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Default log filter, used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Configuration for the SNS client.
    pub aws: AwsConfig,
}

/// Configuration for the SNS client.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AwsConfig {
    /// AWS region; falls back to the SDK's provider chain when unset.
    #[serde(default)]
    pub region: Option<String>,
    /// Named profile from the shared AWS config files.
    #[serde(default)]
    pub profile: Option<String>,
    /// Custom SNS endpoint, e.g. a local emulator.
    #[serde(default)]
    pub endpoint_url: Option<String>,
    /// Upper bound on the publish call, in seconds.
    pub timeout_seconds: u64,
}

impl Config {
    /// Loads the application configuration.
    ///
    /// # Arguments
    /// * `cli` - Parsed command-line arguments; supplies the config file path
    ///   and the highest-precedence overrides.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = match &cli.config {
            Some(path) if !path.exists() => {
                bail!("Configuration file not found at {:?}", path)
            }
            Some(path) => path.clone(),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(cli.clone())
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.aws.timeout_seconds == 0 {
            bail!("aws.timeout_seconds must be greater than zero");
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            aws: AwsConfig::default(),
        }
    }
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: None,
            profile: None,
            endpoint_url: None,
            timeout_seconds: 30,
        }
    }
}
