//! Account listing and role changes for administrators.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use chatgate_auth::{RequestContext, SessionGuard};
use chatgate_core::error::AppError;
use chatgate_core::result::AppResult;
use chatgate_database::AccountStore;
use chatgate_entity::account::{Account, Role};

/// Handles administrative account operations.
///
/// Every method re-checks the caller's role, independent of the route.
#[derive(Clone)]
pub struct AdminService {
    store: Arc<dyn AccountStore>,
    guard: Arc<SessionGuard>,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(store: Arc<dyn AccountStore>, guard: Arc<SessionGuard>) -> Self {
        Self { store, guard }
    }

    /// Lists every account, oldest first.
    pub async fn list_accounts(&self, ctx: &RequestContext) -> AppResult<Vec<Account>> {
        self.guard.authorize(ctx, Some(Role::Admin))?;
        self.store.list().await
    }

    /// Gets one account by id.
    pub async fn get_account(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Account> {
        self.guard.authorize(ctx, Some(Role::Admin))?;
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Account not found"))
    }

    /// Grants or revokes admin on `id`.
    ///
    /// An admin cannot demote themselves. The target's outstanding tokens
    /// keep the role they were issued with until they expire.
    pub async fn set_role(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        is_admin: bool,
    ) -> AppResult<Account> {
        self.guard.authorize(ctx, Some(Role::Admin))?;

        if id == ctx.account_id && !is_admin {
            return Err(AppError::invalid_input(
                "Administrators cannot revoke their own admin role",
            ));
        }

        let account = self.store.set_admin(id, is_admin).await?;

        info!(
            actor = %ctx.account_id,
            account_id = %account.id,
            role = %account.role(),
            "Account role changed"
        );

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Harness, context_for};
    use chatgate_core::ErrorKind;

    #[tokio::test]
    async fn test_non_admin_forbidden() {
        let h = Harness::new();
        let user = h
            .accounts
            .register("u@x.com", "secret1", Role::User)
            .await
            .unwrap();
        let ctx = context_for(user.account.id, Role::User);

        let err = h.admin.list_accounts(&ctx).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        let err = h.admin.get_account(&ctx, user.account.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        let err = h
            .admin
            .set_role(&ctx, user.account.id, true)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn test_admin_manages_accounts() {
        let h = Harness::new();
        let admin = h
            .accounts
            .register("root@x.com", "secret1", Role::Admin)
            .await
            .unwrap();
        let user = h
            .accounts
            .register("u@x.com", "secret1", Role::User)
            .await
            .unwrap();
        let ctx = context_for(admin.account.id, Role::Admin);

        let all = h.admin.list_accounts(&ctx).await.unwrap();
        assert_eq!(all.len(), 2);

        let promoted = h.admin.set_role(&ctx, user.account.id, true).await.unwrap();
        assert!(promoted.is_admin);
        let fetched = h.admin.get_account(&ctx, user.account.id).await.unwrap();
        assert!(fetched.is_admin);

        let err = h
            .admin
            .get_account(&ctx, Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_admin_cannot_demote_self() {
        let h = Harness::new();
        let admin = h
            .accounts
            .register("root@x.com", "secret1", Role::Admin)
            .await
            .unwrap();
        let ctx = context_for(admin.account.id, Role::Admin);
        let err = h
            .admin
            .set_role(&ctx, admin.account.id, false)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }
}
