//! Account store trait.

use async_trait::async_trait;
use uuid::Uuid;

use chatgate_core::result::AppResult;
use chatgate_entity::account::{Account, CreateAccount, SettingsPatch};

/// Persistence for account records.
///
/// Implementations enforce email uniqueness themselves and report a
/// collision as `ErrorKind::DuplicateEmail`. Lookups by email are exact.
#[async_trait]
pub trait AccountStore: Send + Sync + 'static {
    /// Insert a new account.
    async fn create(&self, data: &CreateAccount) -> AppResult<Account>;

    /// Find an account by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>>;

    /// Find an account by exact email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// All accounts, oldest first.
    async fn list(&self) -> AppResult<Vec<Account>>;

    /// Merge `patch` into the stored settings as one atomic read-modify-write,
    /// so concurrent patches of different fields all survive. Fails with
    /// `NotFound` for an unknown id.
    async fn patch_settings(&self, id: Uuid, patch: &SettingsPatch) -> AppResult<Account>;

    /// Replace the password hash. Fails with `NotFound` for an unknown id.
    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<Account>;

    /// Set the admin flag. Fails with `NotFound` for an unknown id.
    async fn set_admin(&self, id: Uuid, is_admin: bool) -> AppResult<Account>;

    /// Confirms the backing storage answers. Fails with `UpstreamFailure`.
    async fn health_check(&self) -> AppResult<()>;
}
