//! Account management commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;
use uuid::Uuid;

use chatgate_auth::{PasswordHasher, PasswordValidator, TokenService};
use chatgate_core::config::AppConfig;
use chatgate_core::error::AppError;
use chatgate_database::{AccountStore, open_store};
use chatgate_entity::account::{Account, Role};
use chatgate_service::AccountService;

use crate::output::{self, OutputFormat};

/// Arguments for account commands
#[derive(Debug, Args)]
pub struct AccountArgs {
    /// Account subcommand
    #[command(subcommand)]
    pub command: AccountCommand,
}

/// Account subcommands
#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// Create an account
    Create {
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Initial password
        #[arg(short, long)]
        password: String,
        /// Grant the admin role
        #[arg(long)]
        admin: bool,
    },
    /// List all accounts
    List,
    /// Grant the admin role
    Promote {
        /// Email address
        #[arg(short, long)]
        email: String,
    },
    /// Revoke the admin role
    Demote {
        /// Email address
        #[arg(short, long)]
        email: String,
    },
    /// Set a new password without knowing the current one
    ResetPassword {
        /// Email address
        #[arg(short, long)]
        email: String,
        /// New password
        #[arg(short, long)]
        password: String,
    },
}

/// Account row for table/JSON output
#[derive(Debug, Serialize, Tabled)]
struct AccountRow {
    #[tabled(rename = "ID")]
    id: Uuid,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Created")]
    created_at: String,
}

impl From<&Account> for AccountRow {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            role: account.role().to_string(),
            created_at: account.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute account commands
pub async fn execute(
    args: &AccountArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    debug!(backend = ?config.database.backend, "Opening account store");
    let opened = open_store(&config.database).await?;
    let result = run(args, config, format, opened.store).await;
    if let Some(pool) = opened.pool {
        pool.close().await;
    }
    result
}

async fn run(
    args: &AccountArgs,
    config: &AppConfig,
    format: OutputFormat,
    store: Arc<dyn AccountStore>,
) -> Result<(), AppError> {
    match &args.command {
        AccountCommand::Create {
            email,
            password,
            admin,
        } => {
            let service = AccountService::new(
                Arc::clone(&store),
                Arc::new(TokenService::new(&config.auth)?),
                Arc::new(PasswordHasher::new()),
                Arc::new(PasswordValidator::new(&config.auth)),
                config.providers.default_temperature,
            );
            let role = if *admin { Role::Admin } else { Role::User };
            let session = service.register(email, password, role).await?;

            output::print_item(&AccountRow::from(&session.account), format);
            output::print_success(&format!("Account '{email}' created as {role}."));
        }
        AccountCommand::List => {
            let accounts = store.list().await?;
            let rows: Vec<AccountRow> = accounts.iter().map(AccountRow::from).collect();
            output::print_list(&rows, format);
        }
        AccountCommand::Promote { email } => {
            let account = set_admin(store.as_ref(), email, true).await?;
            output::print_success(&format!("'{}' is now {}.", account.email, account.role()));
        }
        AccountCommand::Demote { email } => {
            let account = set_admin(store.as_ref(), email, false).await?;
            output::print_success(&format!("'{}' is now {}.", account.email, account.role()));
        }
        AccountCommand::ResetPassword { email, password } => {
            PasswordValidator::new(&config.auth).validate(password)?;
            let account = find(store.as_ref(), email).await?;
            let hash = PasswordHasher::new().hash_password(password)?;
            store.update_password(account.id, &hash).await?;
            output::print_success(&format!("Password for '{email}' has been reset."));
        }
    }

    Ok(())
}

async fn find(store: &dyn AccountStore, email: &str) -> Result<Account, AppError> {
    store
        .find_by_email(email)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No account with email '{email}'")))
}

async fn set_admin(store: &dyn AccountStore, email: &str, is_admin: bool) -> Result<Account, AppError> {
    let account = find(store, email).await?;
    if account.is_admin == is_admin {
        output::print_warning(&format!("'{email}' already has that role."));
        return Ok(account);
    }
    store.set_admin(account.id, is_admin).await
}
