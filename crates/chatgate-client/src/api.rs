//! The auth calls the controller depends on.

use async_trait::async_trait;
use reqwest::Method;

use crate::error::ClientError;
use crate::http::ApiClient;
use crate::types::{AccountInfo, Credentials, MeBody, Session};

/// Auth endpoints as seen by [`AuthController`](crate::AuthController).
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /api/auth/register`
    async fn register(&self, email: &str, password: &str) -> Result<Session, ClientError>;

    /// `POST /api/auth/login`
    async fn login(&self, email: &str, password: &str) -> Result<Session, ClientError>;

    /// `GET /api/auth/me` with `token`
    async fn me(&self, token: &str) -> Result<AccountInfo, ClientError>;
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn register(&self, email: &str, password: &str) -> Result<Session, ClientError> {
        let request = self
            .request(Method::POST, "/api/auth/register", None)
            .json(&Credentials { email, password });
        self.send(request).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<Session, ClientError> {
        let request = self
            .request(Method::POST, "/api/auth/login", None)
            .json(&Credentials { email, password });
        self.send(request).await
    }

    async fn me(&self, token: &str) -> Result<AccountInfo, ClientError> {
        let request = self.request(Method::GET, "/api/auth/me", Some(token));
        let body: MeBody = self.send(request).await?;
        Ok(body.account)
    }
}
