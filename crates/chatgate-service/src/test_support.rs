//! Shared fixtures for service tests.

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use chatgate_auth::{PasswordHasher, PasswordValidator, RequestContext, SessionGuard, TokenService};
use chatgate_core::config::AuthConfig;
use chatgate_database::{AccountStore, MemoryAccountStore};
use chatgate_entity::account::{DEFAULT_TEMPERATURE, Role};

use crate::{AccountService, AdminService, SettingsService};

pub(crate) struct Harness {
    pub store: MemoryAccountStore,
    pub tokens: Arc<TokenService>,
    pub guard: Arc<SessionGuard>,
    pub accounts: AccountService,
    pub settings: SettingsService,
    pub admin: AdminService,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_grok(false)
    }

    pub fn with_grok(grok_enabled: bool) -> Self {
        let config = AuthConfig {
            jwt_secret: "service-test-secret".to_string(),
            ..AuthConfig::default()
        };
        let store = MemoryAccountStore::new();
        let shared: Arc<dyn AccountStore> = Arc::new(store.clone());
        let tokens = Arc::new(TokenService::new(&config).unwrap());
        let guard = Arc::new(SessionGuard::new(Arc::clone(&tokens)));
        let hasher = Arc::new(PasswordHasher::with_cost(1024, 1).unwrap());
        let validator = Arc::new(PasswordValidator::new(&config));

        Self {
            accounts: AccountService::new(
                Arc::clone(&shared),
                Arc::clone(&tokens),
                hasher,
                validator,
                DEFAULT_TEMPERATURE,
            ),
            settings: SettingsService::new(Arc::clone(&shared), grok_enabled),
            admin: AdminService::new(shared, Arc::clone(&guard)),
            store,
            tokens,
            guard,
        }
    }
}

/// A context as the guard would build it for `account_id`.
pub(crate) fn context_for(account_id: Uuid, role: Role) -> RequestContext {
    let now = Utc::now();
    RequestContext {
        account_id,
        role,
        token_issued_at: now,
        token_expires_at: now + Duration::hours(1),
        ip_address: None,
        user_agent: None,
        request_time: now,
    }
}
