//! CLI commands.

mod location;
mod normalize;
mod policy;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::PolicyArgs;
use crate::output::OutputFormat;

/// wms CLI - Normalize warehouse labels and location keys.
#[derive(Debug, Parser)]
#[command(name = "wms")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(flatten)]
    policy: PolicyArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize values into fixed-width labels.
    Normalize(normalize::NormalizeCommand),

    /// Show the effective padding policy.
    Policy,

    /// Parse location keys (AREA/AISLE/X/Y/Z).
    Location(location::LocationCommand),
}

impl Cli {
    /// Initialize tracing (prefer RUST_LOG, fallback to WMS_LOG_LEVEL).
    pub fn init_tracing(&self) {
        let level = std::env::var("WMS_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        let registry = tracing_subscriber::registry().with(filter);

        if self.log_json {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        } else {
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let ctx = CommandContext {
            format: self.format,
            policy: self.policy,
        };

        match self.command {
            Commands::Normalize(cmd) => cmd.run(ctx),
            Commands::Policy => policy::show(ctx),
            Commands::Location(cmd) => cmd.run(ctx),
        }
    }
}

/// Context passed to commands.
#[derive(Debug)]
pub struct CommandContext {
    pub format: OutputFormat,
    pub policy: PolicyArgs,
}
