//! Configuration management for Herald
//!
//! This module defines the main `Config` struct and its sub-structs,
//! responsible for holding all application settings. It uses the `figment`
//! crate to layer defaults, a `herald.toml` file, environment variables,
//! and command-line arguments.

use crate::cli::Cli;
use crate::notification::ChannelKind;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// The logging level for the application.
    pub log_level: String,
    /// Configuration for the process-wide holder.
    pub holder: HolderConfig,
    /// Configuration for notification dispatch.
    pub dispatch: DispatchConfig,
    /// Configuration for output rendering.
    pub output: OutputConfig,
}

/// Configuration for the process-wide holder.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct HolderConfig {
    /// The value stored on first access. Any JSON value is accepted.
    pub initial_value: Option<serde_json::Value>,
}

/// Configuration for notification dispatch.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DispatchConfig {
    /// The channel kinds to dispatch through.
    pub channels: Vec<ChannelKind>,
    /// The recipient passed to every channel. Opaque text, not validated.
    pub recipient: String,
    /// The message passed to every channel. Opaque text, not validated.
    pub message: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            channels: ChannelKind::ALL.to_vec(),
            recipient: "user@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }
}

/// The format for stdout output.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    PlainText,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("Json"),
            OutputFormat::PlainText => f.write_str("PlainText"),
        }
    }
}

/// Configuration for output rendering.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    /// The format to use for stdout output.
    pub format: OutputFormat,
}

impl Config {
    /// Loads the application configuration by layering sources: defaults,
    /// the TOML file, environment variables, and CLI arguments.
    ///
    /// A config file named on the command line must exist; the implicit
    /// `herald.toml` in the working directory is optional.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        match &cli.config {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found at specified path: {}", path.display());
                }
                figment = figment.merge(Toml::file(path));
            }
            None => figment = figment.merge(Toml::file("herald.toml")),
        }

        let config: Config = figment
            // Allow overriding with environment variables, e.g., HERALD_LOG_LEVEL=debug
            .merge(Env::prefixed("HERALD_"))
            .merge(cli.clone())
            .extract()?;
        Ok(config)
    }
}

// Provide a default implementation for tests and easy setup.
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            holder: HolderConfig::default(),
            dispatch: DispatchConfig::default(),
            output: OutputConfig {
                format: OutputFormat::PlainText,
            },
        }
    }
}
