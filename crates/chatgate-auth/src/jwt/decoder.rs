//! Token validation.

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use uuid::Uuid;

use chatgate_core::config::AuthConfig;
use chatgate_entity::account::Role;

use super::claims::Claims;
use super::error::{InvalidToken, InvalidTokenReason};

/// Identity recovered from a valid token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    /// Account the token was issued to.
    pub account_id: Uuid,
    /// Role at issuance.
    pub role: Role,
    /// Issuance time.
    pub issued_at: DateTime<Utc>,
    /// Expiry time.
    pub expires_at: DateTime<Utc>,
}

/// Verifies HS256 session tokens.
///
/// Expiry is checked here against an explicit clock rather than inside
/// `jsonwebtoken`, so there is no leeway and `now == exp` is already expired.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Checks signature, claim shape and expiry at `now`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<VerifiedToken, InvalidToken> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            let reason = match e.kind() {
                JwtErrorKind::InvalidSignature => InvalidTokenReason::BadSignature,
                JwtErrorKind::ExpiredSignature => InvalidTokenReason::Expired,
                _ => InvalidTokenReason::Malformed,
            };
            InvalidToken::from(reason)
        })?;

        let claims = data.claims;
        if claims.is_expired_at(now) {
            return Err(InvalidTokenReason::Expired.into());
        }

        let issued_at = DateTime::from_timestamp(claims.iat, 0)
            .ok_or(InvalidToken::from(InvalidTokenReason::Malformed))?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0)
            .ok_or(InvalidToken::from(InvalidTokenReason::Malformed))?;

        Ok(VerifiedToken {
            account_id: claims.account_id(),
            role: claims.role,
            issued_at,
            expires_at,
        })
    }
}
