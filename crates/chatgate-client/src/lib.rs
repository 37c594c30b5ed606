//! # chatgate-client
//!
//! Client side of the Chatgate session: a typed HTTP client for the auth
//! endpoints, pluggable token persistence, and [`AuthController`], the
//! state machine that decides whether to show the login screen or the app.
//!
//! Every request is built by [`ApiClient::request`] with the token passed
//! in explicitly. The client never holds default auth headers.

pub mod api;
pub mod controller;
pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use api::AuthApi;
pub use controller::{AuthController, AuthState, Landing};
pub use error::ClientError;
pub use http::ApiClient;
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use types::{AccountInfo, Session};
