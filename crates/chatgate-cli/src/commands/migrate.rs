//! Database migration management commands.

use clap::{Args, Subcommand};

use chatgate_core::config::{AppConfig, DatabaseBackend};
use chatgate_core::error::AppError;
use chatgate_database::DatabasePool;
use chatgate_database::migration::{applied_migrations, run_migrations};

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
    /// Show applied migrations
    Status,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    if config.database.backend != DatabaseBackend::Postgres {
        return Err(AppError::configuration(
            "Migrations need database.backend = \"postgres\"",
        ));
    }
    let pool = DatabasePool::connect(&config.database).await?;

    let result = match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            run_migrations(pool.pool()).await.map(|()| {
                output::print_success("All migrations applied successfully.");
            })
        }
        MigrateCommand::Status => applied_migrations(pool.pool()).await.map(|applied| {
            if applied.is_empty() {
                output::print_warning("No migrations have been applied.");
            }
            for entry in &applied {
                let state = if entry.success { "applied" } else { "FAILED" };
                println!(
                    "  {} - {} ({}, {})",
                    entry.version,
                    entry.description,
                    state,
                    entry.installed_on.format("%Y-%m-%d %H:%M:%S")
                );
            }
        }),
    };

    pool.close().await;
    result
}
