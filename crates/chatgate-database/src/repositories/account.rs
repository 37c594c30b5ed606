//! Account repository backed by PostgreSQL.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use chatgate_core::error::{AppError, ErrorKind};
use chatgate_core::result::AppResult;
use chatgate_entity::account::{Account, AiSettings, CreateAccount, SettingsPatch};

use crate::store::AccountStore;

const EMAIL_CONSTRAINT: &str = "accounts_email_key";

/// Repository for account rows.
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    /// Create a new account repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::UpstreamFailure, context, e)
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create(&self, data: &CreateAccount) -> AppResult<Account> {
        let now = Utc::now();
        sqlx::query_as::<_, Account>(
            "INSERT INTO accounts (id, email, password_hash, is_admin, ai_settings, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $6) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.role.is_admin())
        .bind(Json(&data.ai_settings))
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(EMAIL_CONSTRAINT) => {
                AppError::duplicate_email(&data.email)
            }
            other => {
                AppError::with_source(ErrorKind::UpstreamFailure, "Failed to create account", other)
            }
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find account by id"))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find account by email"))
    }

    async fn list(&self) -> AppResult<Vec<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list accounts"))
    }

    async fn patch_settings(&self, id: Uuid, patch: &SettingsPatch) -> AppResult<Account> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to start settings update"))?;

        // Row lock held until commit; concurrent patches apply one after another
        let current: Option<Json<AiSettings>> =
            sqlx::query_scalar("SELECT ai_settings FROM accounts WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(db_error("Failed to load settings"))?;
        let Json(mut settings) = current.ok_or_else(|| AppError::not_found("Account not found"))?;

        patch.apply(&mut settings);

        let account = sqlx::query_as::<_, Account>(
            "UPDATE accounts SET ai_settings = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Json(&settings))
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Failed to update settings"))?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit settings update"))?;
        Ok(account)
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "UPDATE accounts SET password_hash = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update password"))?
        .ok_or_else(|| AppError::not_found("Account not found"))
    }

    async fn set_admin(&self, id: Uuid, is_admin: bool) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "UPDATE accounts SET is_admin = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(is_admin)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update role"))?
        .ok_or_else(|| AppError::not_found("Account not found"))
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Database health check failed"))?;
        Ok(())
    }
}
