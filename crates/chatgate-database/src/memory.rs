//! In-process account store using dashmap.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;
use uuid::Uuid;

use chatgate_core::error::AppError;
use chatgate_core::result::AppResult;
use chatgate_entity::account::{Account, CreateAccount, SettingsPatch};

use crate::store::AccountStore;

/// In-memory account store.
///
/// The email index entry stays locked while the account row is inserted,
/// so two concurrent registrations of one email produce one account.
#[derive(Debug, Clone, Default)]
pub struct MemoryAccountStore {
    accounts: Arc<DashMap<Uuid, Account>>,
    emails: Arc<DashMap<String, Uuid>>,
}

impl MemoryAccountStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn update<F>(&self, id: Uuid, apply: F) -> AppResult<Account>
    where
        F: FnOnce(&mut Account),
    {
        let mut entry = self
            .accounts
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Account not found"))?;
        apply(entry.value_mut());
        entry.updated_at = Utc::now();
        Ok(entry.value().clone())
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create(&self, data: &CreateAccount) -> AppResult<Account> {
        match self.emails.entry(data.email.clone()) {
            Entry::Occupied(_) => Err(AppError::duplicate_email(&data.email)),
            Entry::Vacant(slot) => {
                let now = Utc::now();
                let account = Account {
                    id: Uuid::new_v4(),
                    email: data.email.clone(),
                    password_hash: data.password_hash.clone(),
                    is_admin: data.role.is_admin(),
                    ai_settings: data.ai_settings.clone(),
                    created_at: now,
                    updated_at: now,
                };
                self.accounts.insert(account.id, account.clone());
                slot.insert(account.id);
                debug!(account_id = %account.id, "Account stored in memory");
                Ok(account)
            }
        }
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        Ok(self.accounts.get(&id).map(|a| a.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let Some(id) = self.emails.get(email).map(|id| *id) else {
            return Ok(None);
        };
        self.find_by_id(id).await
    }

    async fn list(&self) -> AppResult<Vec<Account>> {
        let mut accounts: Vec<Account> = self.accounts.iter().map(|a| a.value().clone()).collect();
        accounts.sort_by_key(|a| a.created_at);
        Ok(accounts)
    }

    async fn patch_settings(&self, id: Uuid, patch: &SettingsPatch) -> AppResult<Account> {
        // The row stays locked by `get_mut` for the whole merge
        self.update(id, |account| patch.apply(&mut account.ai_settings))
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<Account> {
        self.update(id, |account| account.password_hash = password_hash.to_string())
    }

    async fn set_admin(&self, id: Uuid, is_admin: bool) -> AppResult<Account> {
        self.update(id, |account| account.is_admin = is_admin)
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatgate_core::ErrorKind;
    use chatgate_entity::account::{AiSettings, GeminiPatch, GrokPatch, ProviderKind, Role};

    fn new_account(email: &str) -> CreateAccount {
        CreateAccount {
            email: email.to_string(),
            password_hash: "$argon2id$stub".to_string(),
            role: Role::User,
            ai_settings: AiSettings::default(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryAccountStore::new();
        store.create(&new_account("a@x.com")).await.unwrap();
        let err = store.create(&new_account("a@x.com")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateEmail);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_email_lookup_is_exact() {
        let store = MemoryAccountStore::new();
        store.create(&new_account("a@x.com")).await.unwrap();
        assert!(store.find_by_email("a@x.com").await.unwrap().is_some());
        assert!(store.find_by_email("A@x.com").await.unwrap().is_none());
        store.create(&new_account("A@x.com")).await.unwrap();
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_registration_single_winner() {
        let store = MemoryAccountStore::new();
        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.create(&new_account("race@x.com")).await.is_ok()
            }));
        }
        let mut wins = 0;
        for handle in handles {
            if handle.await.unwrap() {
                wins += 1;
            }
        }
        assert_eq!(wins, 1);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_updates() {
        let store = MemoryAccountStore::new();
        let account = store.create(&new_account("a@x.com")).await.unwrap();

        let patch = SettingsPatch {
            default_model: Some(ProviderKind::Grok),
            ..SettingsPatch::default()
        };
        let updated = store.patch_settings(account.id, &patch).await.unwrap();
        assert_eq!(updated.ai_settings.default_model, ProviderKind::Grok);

        let err = store.patch_settings(Uuid::new_v4(), &patch).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        let promoted = store.set_admin(account.id, true).await.unwrap();
        assert!(promoted.is_admin);

        let err = store.set_admin(Uuid::new_v4(), true).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_concurrent_patches_of_different_fields_both_apply() {
        let store = MemoryAccountStore::new();
        let account = store.create(&new_account("a@x.com")).await.unwrap();

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            let patch = if i % 2 == 0 {
                SettingsPatch {
                    gemini: Some(GeminiPatch {
                        temperature: Some(0.25),
                        ..GeminiPatch::default()
                    }),
                    ..SettingsPatch::default()
                }
            } else {
                SettingsPatch {
                    grok: Some(GrokPatch {
                        api_key: Some("xai-key".to_string()),
                    }),
                    ..SettingsPatch::default()
                }
            };
            handles.push(tokio::spawn(async move {
                store.patch_settings(account.id, &patch).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let stored = store.find_by_id(account.id).await.unwrap().unwrap();
        assert_eq!(stored.ai_settings.gemini.temperature, 0.25);
        assert_eq!(stored.ai_settings.grok.api_key.as_deref(), Some("xai-key"));
    }
}
