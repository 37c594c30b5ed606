//! Request DTOs with validation.
//!
//! Field-level rules (email shape, password minimum) live in the services;
//! these bounds only cap what reaches the password hasher.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Register request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address.
    #[validate(length(max = 254, message = "Email is too long"))]
    pub email: String,
    /// Password.
    #[validate(length(max = 1024, message = "Password is too long"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(max = 254, message = "Email is too long"))]
    pub email: String,
    /// Password.
    #[validate(length(max = 1024, message = "Password is too long"))]
    pub password: String,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// Current password.
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    /// New password.
    #[validate(length(max = 1024, message = "Password is too long"))]
    pub new_password: String,
}

/// Admin role change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRoleRequest {
    /// Grant (`true`) or revoke (`false`) admin.
    pub is_admin: bool,
}
