//! Account lifecycle: register, login, `me` and password change.

use std::sync::Arc;

use tracing::{debug, info};
use validator::ValidateEmail;

use chatgate_auth::{
    IssuedToken, PasswordHasher, PasswordValidator, RequestContext, TokenService,
    UnauthenticatedReason,
};
use chatgate_core::error::AppError;
use chatgate_core::result::AppResult;
use chatgate_database::AccountStore;
use chatgate_entity::account::{Account, AiSettings, CreateAccount, Role};

/// A freshly issued session for an account.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Signed session token and its expiry.
    pub token: IssuedToken,
    /// The account the token was issued for.
    pub account: Account,
}

/// Handles credential checks and session issuance.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
    tokens: Arc<TokenService>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    /// Starting Gemini temperature for new accounts.
    default_temperature: f32,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        store: Arc<dyn AccountStore>,
        tokens: Arc<TokenService>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        default_temperature: f32,
    ) -> Self {
        Self {
            store,
            tokens,
            hasher,
            validator,
            default_temperature,
        }
    }

    /// Creates an account and signs it in.
    ///
    /// The HTTP surface always passes [`Role::User`]; only the admin CLI
    /// creates admins directly.
    pub async fn register(&self, email: &str, password: &str, role: Role) -> AppResult<AuthSession> {
        validate_email(email)?;
        self.validator.validate(password)?;

        let password_hash = self.hash(password).await?;
        let account = self
            .store
            .create(&CreateAccount {
                email: email.to_string(),
                password_hash,
                role,
                ai_settings: AiSettings::with_temperature(self.default_temperature),
            })
            .await?;

        info!(account_id = %account.id, role = %role, "Account registered");

        self.start_session(account)
    }

    /// Checks credentials and issues a session.
    ///
    /// Unknown email and wrong password fail identically, and both pay for
    /// one Argon2 verification.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        let Some(account) = self.store.find_by_email(email).await? else {
            let hasher = Arc::clone(&self.hasher);
            let password = password.to_owned();
            blocking(move || {
                hasher.verify_dummy(&password);
                Ok(())
            })
            .await?;
            debug!("Login rejected: unknown email");
            return Err(AppError::invalid_credentials());
        };

        if !self.verify(password, &account.password_hash).await? {
            debug!(account_id = %account.id, "Login rejected: wrong password");
            return Err(AppError::invalid_credentials());
        }

        info!(account_id = %account.id, "Account logged in");

        self.start_session(account)
    }

    /// Loads the account behind an authenticated request.
    pub async fn me(&self, ctx: &RequestContext) -> AppResult<Account> {
        match self.store.find_by_id(ctx.account_id).await? {
            Some(account) => Ok(account),
            None => {
                debug!(
                    account_id = %ctx.account_id,
                    reason = UnauthenticatedReason::UnknownAccount.as_str(),
                    "Rejected unauthenticated request"
                );
                Err(AppError::unauthenticated(
                    UnauthenticatedReason::UnknownAccount,
                ))
            }
        }
    }

    /// Replaces the caller's password after checking the current one.
    ///
    /// Outstanding tokens stay valid until they expire.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<Account> {
        let account = self.me(ctx).await?;

        if !self.verify(current_password, &account.password_hash).await? {
            return Err(AppError::invalid_credentials());
        }
        self.validator.validate(new_password)?;

        let password_hash = self.hash(new_password).await?;
        let account = self
            .store
            .update_password(account.id, &password_hash)
            .await?;

        info!(account_id = %account.id, "Password changed");

        Ok(account)
    }

    fn start_session(&self, account: Account) -> AppResult<AuthSession> {
        let token = self.tokens.issue(account.id, account.role())?;
        Ok(AuthSession { token, account })
    }

    async fn hash(&self, password: &str) -> AppResult<String> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        blocking(move || hasher.hash_password(&password)).await
    }

    async fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        let hash = hash.to_owned();
        blocking(move || hasher.verify_password(&password, &hash)).await
    }
}

/// Runs CPU-bound password work off the async executor.
async fn blocking<T, F>(work: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::internal(format!("Password task failed: {e}")))?
}

fn validate_email(email: &str) -> AppResult<()> {
    if email.is_empty() {
        return Err(AppError::invalid_input("Email is required"));
    }
    if !email.validate_email() {
        return Err(AppError::invalid_input("Email is not a valid address"));
    }
    Ok(())
}
