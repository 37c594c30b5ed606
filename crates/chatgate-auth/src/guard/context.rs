//! Request context carrying the authenticated account.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use chatgate_entity::account::Role;

use crate::jwt::VerifiedToken;

/// Context for the current authenticated request.
///
/// Only [`SessionGuard`](super::SessionGuard) can build one, after the
/// token's signature and expiry checks pass. Lives for one request.
#[derive(Debug, Clone, Serialize)]
pub struct RequestContext {
    /// The authenticated account's ID.
    pub account_id: Uuid,
    /// The role at the time the token was issued.
    pub role: Role,
    /// When the presented token was issued.
    pub token_issued_at: DateTime<Utc>,
    /// When the presented token expires.
    pub token_expires_at: DateTime<Utc>,
    /// Client address, if known.
    pub ip_address: Option<String>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    pub(crate) fn from_verified(token: VerifiedToken, now: DateTime<Utc>) -> Self {
        Self {
            account_id: token.account_id,
            role: token.role,
            token_issued_at: token.issued_at,
            token_expires_at: token.expires_at,
            ip_address: None,
            user_agent: None,
            request_time: now,
        }
    }

    /// Attaches client metadata taken from the transport.
    pub fn with_client(mut self, ip_address: Option<String>, user_agent: Option<String>) -> Self {
        self.ip_address = ip_address;
        self.user_agent = user_agent;
        self
    }

    /// Returns whether the current account is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
