//! Session token encoding, decoding and claims.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod error;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use chatgate_core::config::AuthConfig;
use chatgate_core::error::AppError;
use chatgate_entity::account::Role;

pub use claims::Claims;
pub use decoder::{JwtDecoder, VerifiedToken};
pub use encoder::{IssuedToken, JwtEncoder};
pub use error::{InvalidToken, InvalidTokenReason};

/// Issues and verifies session tokens with one server-held secret.
///
/// Stateless: a token stays valid until it expires. Changing the secret
/// invalidates every outstanding token.
#[derive(Debug, Clone)]
pub struct TokenService {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl TokenService {
    /// Creates the service from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        if config.jwt_secret.is_empty() {
            return Err(AppError::configuration("Token signing secret is empty"));
        }
        if config.uses_placeholder_secret() {
            tracing::warn!("auth.jwt_secret is the shipped placeholder; set a real secret");
        }
        Ok(Self {
            encoder: JwtEncoder::new(config)?,
            decoder: JwtDecoder::new(config),
        })
    }

    /// Issues a token for `account_id` valid from now for the configured TTL.
    pub fn issue(&self, account_id: Uuid, role: Role) -> Result<IssuedToken, AppError> {
        self.encoder.issue_at(account_id, role, Utc::now())
    }

    /// Issues a token as if the current time were `now`.
    pub fn issue_at(
        &self,
        account_id: Uuid,
        role: Role,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        self.encoder.issue_at(account_id, role, now)
    }

    /// Verifies signature, shape and expiry against the current time.
    pub fn verify(&self, token: &str) -> Result<VerifiedToken, InvalidToken> {
        self.decoder.verify_at(token, Utc::now())
    }

    /// Verifies as if the current time were `now`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<VerifiedToken, InvalidToken> {
        self.decoder.verify_at(token, now)
    }
}
