//! Pricing domain types.

use serde::{Deserialize, Serialize};
use std::fmt;
use taxdesk_shared::{Cad, LocalizedText};

/// Category a service preset is sold under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingCategory {
    /// Personal income tax filing.
    Personal,
    /// Business services (bookkeeping, corporate returns, sales tax returns).
    Business,
    /// Optional extras added on top of another service.
    Addon,
}

impl PricingCategory {
    /// Returns the string representation of the category.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Business => "business",
            Self::Addon => "addon",
        }
    }

    /// Parses a category from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "personal" => Some(Self::Personal),
            "business" => Some(Self::Business),
            "addon" => Some(Self::Addon),
            _ => None,
        }
    }
}

impl fmt::Display for PricingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Household shape a personal preset applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilingType {
    /// A single filer.
    Individual,
    /// Two spouses or common-law partners filing together.
    Couple,
}

/// A named, pre-priced service offering.
///
/// Presets are compiled into the binary and never change at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPreset {
    /// Unique key, e.g. `individual-simple`.
    pub id: &'static str,
    /// Display name.
    pub name: LocalizedText,
    /// Short marketing description.
    pub description: LocalizedText,
    /// Fixed price.
    pub amount: Cad,
    /// Category the preset is listed under.
    pub category: PricingCategory,
    /// Household shape this preset is restricted to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filing_type: Option<FilingType>,
}

impl PricingPreset {
    /// Returns true if the preset can be sold for the given household shape.
    ///
    /// Presets without a filing type apply to everyone.
    #[must_use]
    pub fn applies_to(&self, filing_type: FilingType) -> bool {
        self.filing_type.is_none_or(|ft| ft == filing_type)
    }

    /// Returns true if the service is a personal tax filing.
    #[must_use]
    pub fn is_personal(&self) -> bool {
        self.category == PricingCategory::Personal
    }
}
