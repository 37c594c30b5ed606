//! Reading and patching the caller's settings.

use std::sync::Arc;

use tracing::{debug, info};

use chatgate_auth::{RequestContext, UnauthenticatedReason};
use chatgate_core::error::{AppError, ErrorKind};
use chatgate_core::result::AppResult;
use chatgate_database::AccountStore;
use chatgate_entity::account::{Account, ProviderKind, SettingsPatch};

use super::view::SettingsView;

/// Handles the settings panel of the authenticated account.
#[derive(Clone)]
pub struct SettingsService {
    store: Arc<dyn AccountStore>,
    /// Whether accounts may select Grok as their default provider.
    grok_enabled: bool,
}

impl SettingsService {
    /// Creates a new settings service.
    pub fn new(store: Arc<dyn AccountStore>, grok_enabled: bool) -> Self {
        Self {
            store,
            grok_enabled,
        }
    }

    /// Returns the caller's settings without API keys.
    pub async fn get(&self, ctx: &RequestContext) -> AppResult<SettingsView> {
        let account = self.owner(ctx).await?;
        Ok(SettingsView::from(&account.ai_settings))
    }

    /// Merges `patch` into the stored settings. Absent fields are kept.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        patch: SettingsPatch,
    ) -> AppResult<SettingsView> {
        patch.validate()?;
        if patch.default_model == Some(ProviderKind::Grok) && !self.grok_enabled {
            return Err(AppError::invalid_input("Grok provider is not enabled"));
        }

        let account = match self.store.patch_settings(ctx.account_id, &patch).await {
            Ok(account) => account,
            Err(e) if e.kind == ErrorKind::NotFound => return Err(unknown_account(ctx)),
            Err(e) => return Err(e),
        };

        info!(
            account_id = %account.id,
            default_model = %account.ai_settings.default_model,
            "Settings updated"
        );

        Ok(SettingsView::from(&account.ai_settings))
    }

    async fn owner(&self, ctx: &RequestContext) -> AppResult<Account> {
        self.store
            .find_by_id(ctx.account_id)
            .await?
            .ok_or_else(|| unknown_account(ctx))
    }
}

fn unknown_account(ctx: &RequestContext) -> AppError {
    debug!(
        account_id = %ctx.account_id,
        reason = UnauthenticatedReason::UnknownAccount.as_str(),
        "Rejected unauthenticated request"
    );
    AppError::unauthenticated(UnauthenticatedReason::UnknownAccount)
}
