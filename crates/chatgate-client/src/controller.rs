//! Client session state machine.
//!
//! ```text
//! Loading ──init──▶ Authenticated | Anonymous
//! Anonymous ──login/register ok──▶ Authenticated
//! Authenticated ──logout / UNAUTHENTICATED──▶ Anonymous
//! ```

use tracing::{debug, info, warn};

use crate::api::AuthApi;
use crate::error::ClientError;
use crate::store::TokenStore;
use crate::types::{AccountInfo, Session};

/// Where the controller currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// `init` has not finished.
    Loading,
    /// A verified token and the identity behind it.
    Authenticated { token: String, account: AccountInfo },
    /// No usable session.
    Anonymous,
}

/// Screen a state maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Wait,
    Login,
    App,
    Admin,
}

/// Owns the session for one client. Methods take `&mut self`; the last
/// successful login or register wins the stored token.
pub struct AuthController<A, S> {
    api: A,
    store: S,
    state: AuthState,
}

impl<A: AuthApi, S: TokenStore> AuthController<A, S> {
    /// A controller in `Loading`; call [`AuthController::init`] next.
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            state: AuthState::Loading,
        }
    }

    /// Restores a stored session if the server still accepts it.
    ///
    /// Any failure to read or confirm the stored token clears it, so the
    /// controller always leaves `Loading`.
    pub async fn init(&mut self) -> Result<&AuthState, ClientError> {
        let token = match self.store.load().await {
            Ok(Some(token)) => token,
            Ok(None) => {
                self.state = AuthState::Anonymous;
                return Ok(&self.state);
            }
            Err(e) => {
                warn!(error = %e, "Stored token is unreadable; discarding it");
                self.clear_session().await?;
                return Ok(&self.state);
            }
        };

        match self.api.me(&token).await {
            Ok(account) => {
                debug!(account_id = %account.id, "Restored stored session");
                self.state = AuthState::Authenticated { token, account };
            }
            Err(e) => {
                debug!(error = %e, "Stored token rejected");
                self.clear_session().await?;
            }
        }
        Ok(&self.state)
    }

    /// Registers and signs in. On failure the state is unchanged.
    pub async fn register(&mut self, email: &str, password: &str) -> Result<AccountInfo, ClientError> {
        let session = self.api.register(email, password).await?;
        self.adopt(session).await
    }

    /// Signs in. On failure the state is unchanged.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<AccountInfo, ClientError> {
        let session = self.api.login(email, password).await?;
        self.adopt(session).await
    }

    /// Forgets the session locally. Tokens are not revoked server-side.
    pub async fn logout(&mut self) -> Result<(), ClientError> {
        self.clear_session().await?;
        info!("Logged out");
        Ok(())
    }

    /// Re-fetches the identity for the current token.
    pub async fn refresh(&mut self) -> Result<AccountInfo, ClientError> {
        let token = match &self.state {
            AuthState::Authenticated { token, .. } => token.clone(),
            _ => {
                return Err(ClientError::Unauthenticated(
                    "Authentication required".to_string(),
                ));
            }
        };

        let result = self.api.me(&token).await;
        let account = self.observe(result).await?;
        self.state = AuthState::Authenticated {
            token,
            account: account.clone(),
        };
        Ok(account)
    }

    /// Passes `result` through, ending the session first if it is an
    /// `UNAUTHENTICATED` error. Wrap every authenticated call with this.
    pub async fn observe<T>(&mut self, result: Result<T, ClientError>) -> Result<T, ClientError> {
        if let Err(e) = &result {
            if e.is_unauthenticated() {
                debug!("Session rejected by server");
                self.clear_session().await?;
            }
        }
        result
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Token to pass to authenticated requests.
    pub fn token(&self) -> Option<&str> {
        match &self.state {
            AuthState::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn account(&self) -> Option<&AccountInfo> {
        match &self.state {
            AuthState::Authenticated { account, .. } => Some(account),
            _ => None,
        }
    }

    /// Default screen for the current state. Admins land in the app too.
    pub fn landing(&self) -> Landing {
        match &self.state {
            AuthState::Loading => Landing::Wait,
            AuthState::Anonymous => Landing::Login,
            AuthState::Authenticated { .. } => Landing::App,
        }
    }

    /// Whether `route` may be shown in the current state.
    pub fn allows(&self, route: Landing) -> bool {
        match (route, &self.state) {
            (Landing::Wait, AuthState::Loading) => true,
            (Landing::Login, AuthState::Anonymous) => true,
            (Landing::App, AuthState::Authenticated { .. }) => true,
            (Landing::Admin, AuthState::Authenticated { account, .. }) => account.is_admin,
            _ => false,
        }
    }

    async fn adopt(&mut self, session: Session) -> Result<AccountInfo, ClientError> {
        self.store.save(&session.token).await?;
        info!(account_id = %session.account.id, "Signed in");
        self.state = AuthState::Authenticated {
            token: session.token,
            account: session.account.clone(),
        };
        Ok(session.account)
    }

    async fn clear_session(&mut self) -> Result<(), ClientError> {
        self.state = AuthState::Anonymous;
        self.store.clear().await
    }
}
