//! Service pricing catalog.
//!
//! # Modules
//!
//! - `types` - Preset, category and filing-type types
//! - `catalog` - The static preset table and lookups

pub mod catalog;
pub mod types;

pub use catalog::{
    all_presets, get_pricing_description, get_pricing_name, get_pricing_preset,
    presets_by_category, presets_for_filing_type,
};
pub use taxdesk_shared::types::format_cad;
pub use types::{FilingType, PricingCategory, PricingPreset};
