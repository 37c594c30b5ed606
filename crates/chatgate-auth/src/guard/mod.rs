//! Session guard: bearer-token authentication and role authorization.
//!
//! Every failure to authenticate surfaces as the same
//! `ErrorKind::Unauthenticated` error. The specific
//! [`UnauthenticatedReason`] travels as the error source and is logged at
//! `debug`, never returned to the caller.

pub mod context;
pub mod reason;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use chatgate_core::error::AppError;
use chatgate_entity::account::Role;

use crate::jwt::TokenService;

pub use context::RequestContext;
pub use reason::UnauthenticatedReason;

/// Gate in front of every protected operation.
#[derive(Debug, Clone)]
pub struct SessionGuard {
    tokens: Arc<TokenService>,
}

impl SessionGuard {
    /// Creates a guard that verifies with `tokens`.
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    /// Authenticates a raw `Authorization` header value (or its absence).
    pub fn authenticate(&self, authorization: Option<&str>) -> Result<RequestContext, AppError> {
        self.authenticate_at(authorization, Utc::now())
    }

    /// Same as [`SessionGuard::authenticate`] against an explicit clock.
    pub fn authenticate_at(
        &self,
        authorization: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<RequestContext, AppError> {
        let result = authorization
            .ok_or(UnauthenticatedReason::MissingHeader)
            .and_then(bearer_token)
            .and_then(|token| {
                self.tokens
                    .verify_at(token, now)
                    .map_err(|e| UnauthenticatedReason::Token(e.reason))
            });

        match result {
            Ok(verified) => Ok(RequestContext::from_verified(verified, now)),
            Err(reason) => {
                debug!(reason = reason.as_str(), "Rejected unauthenticated request");
                Err(AppError::unauthenticated(reason))
            }
        }
    }

    /// Checks `ctx` against an optional required role.
    pub fn authorize(&self, ctx: &RequestContext, required: Option<Role>) -> Result<(), AppError> {
        match required {
            Some(role) if !ctx.role.satisfies(role) => {
                debug!(
                    account_id = %ctx.account_id,
                    role = %ctx.role,
                    required = %role,
                    "Rejected under-privileged request"
                );
                Err(AppError::forbidden(format!("{role} access required")))
            }
            _ => Ok(()),
        }
    }
}

/// Extracts the token from `Bearer <token>`. The scheme is case-insensitive.
pub fn bearer_token(header: &str) -> Result<&str, UnauthenticatedReason> {
    let (scheme, token) = header
        .trim_start()
        .split_once(' ')
        .ok_or(UnauthenticatedReason::MalformedHeader)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(UnauthenticatedReason::MalformedHeader);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(UnauthenticatedReason::EmptyToken);
    }
    Ok(token)
}
