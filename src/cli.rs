//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the application using
//! the `clap` crate. These arguments are parsed at startup and then merged
//! with the configuration from the `herald.toml` file and environment
//! variables; `Cli` implements `figment::Provider` so it can sit at the top
//! of the configuration stack.

use crate::notification::ChannelKind;
use clap::Parser;
use figment::{
    value::{Dict, Map, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

/// A demonstration notification dispatcher with a process-wide value holder.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Channel kinds to dispatch through (repeatable; defaults to all).
    #[arg(long = "channel", value_name = "KIND")]
    pub channels: Vec<ChannelKind>,

    /// Recipient handed to every channel.
    #[arg(long, value_name = "RECIPIENT")]
    pub recipient: Option<String>,

    /// Message handed to every channel.
    #[arg(long, value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Initial value stored in the holder on first access.
    #[arg(long, value_name = "VALUE")]
    pub holder_value: Option<String>,

    /// Emit dispatch records as JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();

        let mut dispatch = Dict::new();
        if !self.channels.is_empty() {
            dispatch.insert("channels".into(), Value::serialize(&self.channels)?);
        }
        if let Some(recipient) = &self.recipient {
            dispatch.insert("recipient".into(), Value::from(recipient.clone()));
        }
        if let Some(message) = &self.message {
            dispatch.insert("message".into(), Value::from(message.clone()));
        }
        if !dispatch.is_empty() {
            dict.insert("dispatch".into(), Value::serialize(dispatch)?);
        }

        if let Some(value) = &self.holder_value {
            let mut holder = Dict::new();
            holder.insert("initial_value".into(), Value::from(value.clone()));
            dict.insert("holder".into(), Value::serialize(holder)?);
        }

        // The `--json` flag is a shorthand for `output.format = "Json"`.
        if self.json {
            let mut output = Dict::new();
            output.insert("format".into(), Value::from("Json"));
            dict.insert("output".into(), Value::serialize(output)?);
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}
