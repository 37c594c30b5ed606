//! Token verification failure.

use thiserror::Error;

/// Why a token was rejected. Only ever logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTokenReason {
    /// The signature does not match the payload under the server secret.
    BadSignature,
    /// The token is not a well-formed JWT for our claims.
    Malformed,
    /// The current time is at or past `exp`.
    Expired,
}

impl InvalidTokenReason {
    /// Short code for structured logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadSignature => "bad_signature",
            Self::Malformed => "malformed_token",
            Self::Expired => "expired",
        }
    }
}

/// A token failed verification. Displays identically for every reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid token")]
pub struct InvalidToken {
    /// Internal reason.
    pub reason: InvalidTokenReason,
}

impl From<InvalidTokenReason> for InvalidToken {
    fn from(reason: InvalidTokenReason) -> Self {
        Self { reason }
    }
}
