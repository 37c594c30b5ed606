//! Configuration inspection commands.

use clap::{Args, Subcommand};

use chatgate_core::config::AppConfig;
use chatgate_core::error::AppError;
use chatgate_database::connection::mask_password;

use crate::output;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Validate and print the effective configuration
    Show,
}

/// Execute config commands. Loading already validated the configuration.
pub fn execute(args: &ConfigArgs, config: &AppConfig, env: &str) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            println!("Configuration ({env}):");
            output::print_kv("server.bind_address", &config.server.bind_address());
            output::print_kv(
                "server.request_timeout_seconds",
                &config.server.request_timeout_seconds.to_string(),
            );
            output::print_kv("database.backend", &format!("{:?}", config.database.backend));
            output::print_kv("database.url", &mask_password(&config.database.url));
            output::print_kv("auth.token_ttl_hours", &config.auth.token_ttl_hours.to_string());
            output::print_kv(
                "auth.password_min_length",
                &config.auth.password_min_length.to_string(),
            );
            output::print_kv("providers.grok_enabled", &config.providers.grok_enabled.to_string());
            output::print_kv(
                "providers.default_temperature",
                &config.providers.default_temperature.to_string(),
            );
            output::print_kv("logging.level", &config.logging.level);

            if config.auth.uses_placeholder_secret() {
                output::print_warning("auth.jwt_secret is still the placeholder value");
            } else {
                output::print_success("Configuration is valid.");
            }
        }
    }
    Ok(())
}
