//! Internal reason codes for authentication failures.

use thiserror::Error;

use crate::jwt::InvalidTokenReason;

/// Why a request was not authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnauthenticatedReason {
    /// No `Authorization` header.
    #[error("missing authorization header")]
    MissingHeader,
    /// Header present but not `Bearer <token>`.
    #[error("malformed authorization header")]
    MalformedHeader,
    /// `Bearer` with nothing after it.
    #[error("empty bearer token")]
    EmptyToken,
    /// The token itself failed verification.
    #[error("token rejected: {}", .0.as_str())]
    Token(InvalidTokenReason),
    /// Valid token whose account no longer exists.
    #[error("token subject no longer exists")]
    UnknownAccount,
}

impl UnauthenticatedReason {
    /// Short code for structured logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingHeader => "missing_header",
            Self::MalformedHeader => "malformed_header",
            Self::EmptyToken => "empty_token",
            Self::Token(reason) => reason.as_str(),
            Self::UnknownAccount => "unknown_account",
        }
    }
}
