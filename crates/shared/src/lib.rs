//! Shared types, errors, and configuration for Taxdesk.
//!
//! This crate provides common types used across all other crates:
//! - CAD money type with decimal precision and en-CA formatting
//! - Supported languages and localized text
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AdminConfig, AppConfig, BusinessConfig};
pub use error::{AppError, AppResult};
pub use types::{Cad, Language, LocalizedText};
