//! Common types used across the application.

pub mod id;
pub mod language;
pub mod money;

pub use id::*;
pub use language::{Language, LocalizedText};
pub use money::{Cad, format_cad};
