//! Sales tax domain types.

use rust_decimal::Decimal;
use rust_decimal::serde::float;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::pricing::{PricingCategory, PricingPreset};
use crate::tax::error::TaxError;
use crate::tax::province::Province;

/// Whether a service attracts sales tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    /// Personal income tax preparation, always exempt.
    PersonalTaxFiling,
    /// Business services, taxable in every province.
    BusinessService,
}

impl ServiceType {
    /// Returns the string representation of the service type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PersonalTaxFiling => "personal-tax-filing",
            Self::BusinessService => "business-service",
        }
    }

    /// Classifies a catalog preset.
    ///
    /// Personal presets are exempt; business presets and add-ons are taxable.
    #[must_use]
    pub fn for_preset(preset: &PricingPreset) -> Self {
        match preset.category {
            PricingCategory::Personal => Self::PersonalTaxFiling,
            PricingCategory::Business | PricingCategory::Addon => Self::BusinessService,
        }
    }

    /// Returns true if services of this type never carry tax.
    #[must_use]
    pub fn is_tax_exempt(&self) -> bool {
        matches!(self, Self::PersonalTaxFiling)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = TaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "personal-tax-filing" => Ok(Self::PersonalTaxFiling),
            "business-service" => Ok(Self::BusinessService),
            _ => Err(TaxError::UnknownServiceType(s.to_string())),
        }
    }
}

/// Sales tax figures attached to a payment.
///
/// Exemption is derived from `service_type`. It is written out as
/// `taxExempt` for readers of the stored record, and a stored flag is
/// ignored on load so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxInfo {
    /// Service classification.
    pub service_type: ServiceType,
    /// Jurisdiction the tax lines were computed for.
    pub province: Province,
    /// Amount the tax applies to.
    pub subtotal: Decimal,
    /// Goods and services tax.
    #[serde(default)]
    pub gst: Decimal,
    /// Provincial sales tax.
    #[serde(default)]
    pub pst: Decimal,
    /// Quebec sales tax.
    #[serde(default)]
    pub qst: Decimal,
    /// Harmonized sales tax.
    #[serde(default)]
    pub hst: Decimal,
    /// Sum of the tax lines.
    #[serde(default)]
    pub total_tax: Decimal,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredTaxInfo {
    service_type: ServiceType,
    province: Province,
    tax_exempt: bool,
    #[serde(serialize_with = "float::serialize")]
    subtotal: Decimal,
    #[serde(serialize_with = "float::serialize")]
    gst: Decimal,
    #[serde(serialize_with = "float::serialize")]
    pst: Decimal,
    #[serde(serialize_with = "float::serialize")]
    qst: Decimal,
    #[serde(serialize_with = "float::serialize")]
    hst: Decimal,
    #[serde(serialize_with = "float::serialize")]
    total_tax: Decimal,
}

impl Serialize for TaxInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        StoredTaxInfo {
            service_type: self.service_type,
            province: self.province,
            tax_exempt: self.tax_exempt(),
            subtotal: self.subtotal,
            gst: self.gst,
            pst: self.pst,
            qst: self.qst,
            hst: self.hst,
            total_tax: self.total_tax,
        }
        .serialize(serializer)
    }
}

impl TaxInfo {
    /// Returns true if no tax applies.
    #[must_use]
    pub fn tax_exempt(&self) -> bool {
        self.service_type.is_tax_exempt()
    }

    /// Builds an exempt record with every tax line zero.
    #[must_use]
    pub fn exempt(province: Province, subtotal: Decimal) -> Self {
        Self {
            service_type: ServiceType::PersonalTaxFiling,
            province,
            subtotal,
            gst: Decimal::ZERO,
            pst: Decimal::ZERO,
            qst: Decimal::ZERO,
            hst: Decimal::ZERO,
            total_tax: Decimal::ZERO,
        }
    }

    /// Subtotal plus tax, or just the subtotal when exempt.
    #[must_use]
    pub fn total(&self) -> Decimal {
        if self.tax_exempt() {
            self.subtotal
        } else {
            self.subtotal + self.total_tax
        }
    }
}
