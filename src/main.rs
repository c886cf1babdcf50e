//! Herald - notification dispatch demo driver
//!
//! Loads the layered configuration, initializes logging, then walks the two
//! demonstrations: the process-wide holder lifecycle and one dispatch per
//! configured notification channel.

use anyhow::Result;
use clap::Parser;
use herald::{
    cli::Cli,
    config::Config,
    formatting::{formatter_for, DispatchRecord},
    holder::Holder,
    notification::factory::{run, Factory},
};
use itertools::Itertools;
use serde_json::Value;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration by layering sources: defaults, file, environment, and CLI args.
    let config = match Config::load(&cli) {
        Ok(config) => config,
        Err(err) => {
            // Manually initialize logging for this specific error
            tracing_subscriber::fmt().init();
            error!("Failed to load configuration: {}", err);
            // Exit if configuration fails, as it's a critical step.
            std::process::exit(1);
        }
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("Herald starting up...");

    // Log the loaded configuration settings for visibility
    info!("-------------------- Configuration --------------------");
    info!("Log Level: {}", config.log_level);
    info!(
        "Channels: {}",
        config
            .dispatch
            .channels
            .iter()
            .map(|kind| kind.to_string())
            .join(", ")
    );
    info!("Recipient: {}", config.dispatch.recipient);
    info!("Message: {}", config.dispatch.message);
    info!("Output Format: {}", config.output.format);
    match &config.holder.initial_value {
        Some(value) => info!("Holder Initial Value: {}", value),
        None => info!("Holder Initial Value: Not configured"),
    }
    info!("-------------------------------------------------------");

    run_holder_demo(&config);
    run_dispatch_demo(&config);

    info!("Herald finished.");
    Ok(())
}

/// Walks the holder lifecycle: lazy construction, shared mutation, and a
/// rejected second construction.
fn run_holder_demo(config: &Config) {
    let initial = config
        .holder
        .initial_value
        .clone()
        .unwrap_or_else(|| Value::String("First instance".to_string()));

    let first = Holder::instance(Some(initial));
    let second = Holder::instance(Some(Value::String("Second instance".to_string())));

    if std::ptr::eq(first, second) {
        println!("Holder works, both references point to the same instance.");
    } else {
        println!("Holder failed, references point to different instances.");
    }

    println!("first value: {}", first.display_value());
    println!("second value: {}", second.display_value());

    // The initialization value of the second call is discarded
    second.set_value(Value::String("Updated value".to_string()));
    println!("first value after update: {}", first.display_value());
    println!("second value after update: {}", second.display_value());

    match Holder::try_init(Value::String("Third instance".to_string())) {
        Ok(_) => println!("Holder failed, a second construction was allowed."),
        Err(err) => println!("Direct construction rejected: {}", err),
    }

    println!("{}", first.describe());
}

/// Dispatches the configured message over every configured channel.
fn run_dispatch_demo(config: &Config) {
    let formatter = formatter_for(&config.output.format);

    for kind in &config.dispatch.channels {
        let factory = Factory::new(*kind);
        let confirmation = run(&factory, &config.dispatch.recipient, &config.dispatch.message);
        let record = DispatchRecord::new(
            *kind,
            &config.dispatch.recipient,
            &config.dispatch.message,
            confirmation,
        );
        println!("{}", formatter.format(&record));
    }
}
