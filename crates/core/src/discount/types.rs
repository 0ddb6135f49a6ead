//! Discount domain types.

use rust_decimal::Decimal;
use rust_decimal::serde::float;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::discount::error::DiscountError;

/// Discount programme applied to a filing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscountType {
    /// No discount.
    #[default]
    None,
    /// Client who filed with the business in a previous year.
    ReturningCustomer,
    /// New client referred by an existing one.
    Referral,
}

impl DiscountType {
    /// Returns the fixed percentage for this discount type.
    #[must_use]
    pub fn percentage(&self) -> Decimal {
        match self {
            Self::None => Decimal::ZERO,
            Self::ReturningCustomer => Decimal::from(15),
            Self::Referral => Decimal::TEN,
        }
    }

    /// Returns the string representation of the discount type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ReturningCustomer => "returning-customer",
            Self::Referral => "referral",
        }
    }

    /// Parses a discount type from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(Self::None),
            "returning-customer" => Some(Self::ReturningCustomer),
            "referral" => Some(Self::Referral),
            _ => None,
        }
    }
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DiscountType {
    type Err = DiscountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.trim()).ok_or_else(|| DiscountError::UnknownDiscountType(s.to_string()))
    }
}

/// A discount computed for one transaction.
///
/// Stored alongside the filing payment it was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountInfo {
    /// The discount programme.
    #[serde(rename = "type")]
    pub discount_type: DiscountType,
    /// Percentage taken off the base amount.
    #[serde(serialize_with = "float::serialize")]
    pub percentage: Decimal,
    /// Amount taken off, rounded to cents.
    #[serde(serialize_with = "float::serialize")]
    pub amount: Decimal,
    /// Who referred the client; only kept for referrals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referred_by: Option<String>,
}

impl DiscountInfo {
    /// A zero discount.
    #[must_use]
    pub fn none() -> Self {
        Self {
            discount_type: DiscountType::None,
            percentage: Decimal::ZERO,
            amount: Decimal::ZERO,
            referred_by: None,
        }
    }

    /// Returns true if the discount takes anything off.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.discount_type != DiscountType::None && !self.amount.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages() {
        assert_eq!(DiscountType::None.percentage(), Decimal::ZERO);
        assert_eq!(DiscountType::ReturningCustomer.percentage(), Decimal::from(15));
        assert_eq!(DiscountType::Referral.percentage(), Decimal::from(10));
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            DiscountType::parse("returning-customer"),
            Some(DiscountType::ReturningCustomer)
        );
        assert_eq!(DiscountType::parse("REFERRAL"), Some(DiscountType::Referral));
        assert_eq!(DiscountType::parse("none"), Some(DiscountType::None));
        assert_eq!(DiscountType::parse("loyalty"), None);
        assert!(matches!(
            "loyalty".parse::<DiscountType>(),
            Err(DiscountError::UnknownDiscountType(_))
        ));
    }

    #[test]
    fn test_discount_info_json_shape() {
        let info = DiscountInfo {
            discount_type: DiscountType::Referral,
            percentage: Decimal::TEN,
            amount: Decimal::from(35),
            referred_by: Some("Jane Doe".to_string()),
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["type"], "referral");
        assert_eq!(value["referredBy"], "Jane Doe");
    }

    #[test]
    fn test_discount_info_accepts_numeric_amounts() {
        let json = r#"{"type":"returning-customer","percentage":15,"amount":75}"#;
        let info: DiscountInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.discount_type, DiscountType::ReturningCustomer);
        assert_eq!(info.amount, Decimal::from(75));
        assert!(info.referred_by.is_none());
    }
}
