//! # chatgate-service
//!
//! Business logic services. Each service receives an authenticated
//! [`RequestContext`](chatgate_auth::RequestContext) where the operation
//! is protected, and talks to the credential store through
//! [`AccountStore`](chatgate_database::AccountStore).

pub mod account;
pub mod admin;
pub mod settings;

#[cfg(test)]
pub(crate) mod test_support;

pub use account::{AccountService, AuthSession};
pub use admin::AdminService;
pub use settings::{SettingsService, SettingsView};
