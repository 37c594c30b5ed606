//! CLI command definitions and dispatch.

pub mod account;
pub mod config;
pub mod migrate;

use clap::{Parser, Subcommand};

use chatgate_core::config::AppConfig;
use chatgate_core::error::AppError;

use crate::output::OutputFormat;

/// Chatgate administration
#[derive(Debug, Parser)]
#[command(name = "chatgate", version, about, long_about = None)]
pub struct Cli {
    /// Configuration overlay to load on top of `config/default.toml`
    #[arg(short, long, env = "CHATGATE_ENV", default_value = "development")]
    pub env: String,

    /// Directory holding the configuration files
    #[arg(long, default_value = "config")]
    pub config_dir: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Account management
    Account(account::AccountArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load_from(&self.config_dir, &self.env)?;

        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Account(args) => account::execute(args, &config, self.format).await,
            Commands::Config(args) => config::execute(args, &config, &self.env),
        }
    }
}
