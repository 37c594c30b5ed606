//! # chatgate-auth
//!
//! Authentication building blocks for Chatgate.
//!
//! ## Modules
//!
//! - `jwt`: session token issuance and verification
//! - `password`: Argon2id password hashing and length policy
//! - `guard`: turns an `Authorization` header into a [`RequestContext`]
//!   and gates it by role

pub mod guard;
pub mod jwt;
pub mod password;

pub use guard::{RequestContext, SessionGuard, UnauthenticatedReason};
pub use jwt::{Claims, InvalidToken, IssuedToken, TokenService, VerifiedToken};
pub use password::{PasswordHasher, PasswordValidator};
