//! # chatgate-api
//!
//! HTTP API layer for Chatgate built on Axum.
//!
//! Provides the REST endpoints under `/api`, the `AuthUser` / `AdminUser`
//! extractors wrapping the session guard, request logging and CORS
//! middleware, DTOs, and the mapping from `AppError` to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
