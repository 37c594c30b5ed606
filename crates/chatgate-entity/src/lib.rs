//! # chatgate-entity
//!
//! Domain entity models for Chatgate. Database entities derive
//! `sqlx::FromRow`; value objects are plain serde types.

pub mod account;
