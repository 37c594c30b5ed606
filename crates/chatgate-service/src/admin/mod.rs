//! Admin-only account management.

pub mod service;

pub use service::AdminService;
