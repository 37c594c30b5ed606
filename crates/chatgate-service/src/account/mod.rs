//! Registration, login and the current-account lookup.

pub mod service;

pub use service::{AccountService, AuthSession};
