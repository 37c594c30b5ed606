//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use chatgate_auth::{PasswordHasher, PasswordValidator, SessionGuard, TokenService};
use chatgate_core::config::AppConfig;
use chatgate_core::result::AppResult;
use chatgate_database::AccountStore;
use chatgate_service::{AccountService, AdminService, SettingsService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Read-only after
/// startup; every field is `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Credential store (PostgreSQL or in-memory)
    pub store: Arc<dyn AccountStore>,

    // ── Auth ─────────────────────────────────────────────────
    /// Session token issuer/verifier
    pub tokens: Arc<TokenService>,
    /// Bearer-token guard used by the extractors
    pub guard: Arc<SessionGuard>,

    // ── Services ─────────────────────────────────────────────
    /// Registration, login and `me`
    pub accounts: Arc<AccountService>,
    /// Per-account AI settings
    pub settings: Arc<SettingsService>,
    /// Admin account management
    pub admin: Arc<AdminService>,
}

impl AppState {
    /// Wires services over `store`. The hasher is passed in so callers
    /// choose the Argon2 cost.
    pub fn new(
        config: AppConfig,
        store: Arc<dyn AccountStore>,
        hasher: PasswordHasher,
    ) -> AppResult<Self> {
        let tokens = Arc::new(TokenService::new(&config.auth)?);
        let guard = Arc::new(SessionGuard::new(Arc::clone(&tokens)));
        let validator = Arc::new(PasswordValidator::new(&config.auth));

        let accounts = Arc::new(AccountService::new(
            Arc::clone(&store),
            Arc::clone(&tokens),
            Arc::new(hasher),
            validator,
            config.providers.default_temperature,
        ));
        let settings = Arc::new(SettingsService::new(
            Arc::clone(&store),
            config.providers.grok_enabled,
        ));
        let admin = Arc::new(AdminService::new(Arc::clone(&store), Arc::clone(&guard)));

        Ok(Self {
            config: Arc::new(config),
            store,
            tokens,
            guard,
            accounts,
            settings,
            admin,
        })
    }
}
