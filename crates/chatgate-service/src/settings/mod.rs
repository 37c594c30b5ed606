//! Per-account AI provider settings.

pub mod service;
pub mod view;

pub use service::SettingsService;
pub use view::SettingsView;
