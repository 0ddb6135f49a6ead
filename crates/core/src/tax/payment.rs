//! Payment attached to a tax filing.

use rust_decimal::Decimal;
use rust_decimal::serde::{float, float_option};
use serde::{Deserialize, Serialize};

use crate::discount::{DiscountInfo, DiscountType, calculate_discount, calculate_final_amount};
use crate::tax::calculator::calculate_tax;
use crate::tax::province::Province;
use crate::tax::types::{ServiceType, TaxInfo};

/// What the client is asked to pay for a filing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxFilingPayment {
    /// Amount after discount, before tax.
    #[serde(serialize_with = "float::serialize")]
    pub amount: Decimal,
    /// Price before discount, set when a discount applies.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "float_option::serialize"
    )]
    pub original_amount: Option<Decimal>,
    /// Discount taken off the original price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<DiscountInfo>,
    /// Sales tax figures, absent for legacy records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_info: Option<TaxInfo>,
}

impl TaxFilingPayment {
    /// Builds a payment from a base price.
    ///
    /// Applies the discount, then computes tax on the discounted amount.
    #[must_use]
    pub fn quote(
        base_amount: Decimal,
        discount_type: DiscountType,
        referred_by: Option<&str>,
        service_type: ServiceType,
        province: Province,
    ) -> Self {
        let discount = calculate_discount(base_amount, discount_type, referred_by);
        let amount = calculate_final_amount(base_amount, &discount);
        let tax_info = calculate_tax(amount, service_type, province);

        let (original_amount, discount) = if discount.is_applied() {
            (Some(base_amount), Some(discount))
        } else {
            (None, None)
        };

        Self {
            amount,
            original_amount,
            discount,
            tax_info: Some(tax_info),
        }
    }

    /// Returns true if the payment carries no tax.
    #[must_use]
    pub fn is_tax_exempt(&self) -> bool {
        self.tax_info.as_ref().is_none_or(TaxInfo::tax_exempt)
    }

    /// Tax charged on top of the amount.
    #[must_use]
    pub fn total_tax(&self) -> Decimal {
        match &self.tax_info {
            Some(info) if !info.tax_exempt() => info.total_tax,
            _ => Decimal::ZERO,
        }
    }

    /// Amount due including tax.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.amount + self.total_tax()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_personal_with_discount() {
        let payment = TaxFilingPayment::quote(
            dec!(500),
            DiscountType::ReturningCustomer,
            None,
            ServiceType::PersonalTaxFiling,
            Province::On,
        );
        assert_eq!(payment.amount, dec!(425));
        assert_eq!(payment.original_amount, Some(dec!(500)));
        assert_eq!(payment.discount.as_ref().unwrap().amount, dec!(75));
        assert!(payment.is_tax_exempt());
        assert_eq!(payment.total(), dec!(425));
    }

    #[test]
    fn test_quote_business_taxes_discounted_amount() {
        let payment = TaxFilingPayment::quote(
            dec!(600),
            DiscountType::Referral,
            Some("Jane Doe"),
            ServiceType::BusinessService,
            Province::On,
        );
        assert_eq!(payment.amount, dec!(540));
        // 13% of 540
        assert_eq!(payment.total_tax(), dec!(70.20));
        assert_eq!(payment.total(), dec!(610.20));
    }

    #[test]
    fn test_quote_without_discount_omits_discount_fields() {
        let payment = TaxFilingPayment::quote(
            dec!(80),
            DiscountType::None,
            None,
            ServiceType::PersonalTaxFiling,
            Province::Qc,
        );
        assert!(payment.original_amount.is_none());
        assert!(payment.discount.is_none());
        let value = serde_json::to_value(&payment).unwrap();
        assert!(value.get("discount").is_none());
        assert!(value.get("taxInfo").is_some());
    }

    #[test]
    fn test_amounts_are_written_as_numbers() {
        let payment = TaxFilingPayment::quote(
            dec!(600),
            DiscountType::Referral,
            Some("Jane Doe"),
            ServiceType::BusinessService,
            Province::On,
        );
        let value = serde_json::to_value(&payment).unwrap();
        assert!(value["amount"].is_number());
        assert_eq!(value["amount"].to_string(), "540.0");
        assert_eq!(value["originalAmount"].to_string(), "600.0");
        assert_eq!(value["discount"]["amount"].to_string(), "60.0");
        assert_eq!(value["taxInfo"]["hst"].to_string(), "70.2");
        assert_eq!(value["taxInfo"]["taxExempt"], false);

        let back: TaxFilingPayment = serde_json::from_value(value).unwrap();
        assert_eq!(back, payment);
    }

    #[test]
    fn test_string_amounts_still_read() {
        let json = r#"{"amount": "72.00", "originalAmount": "80.00"}"#;
        let payment: TaxFilingPayment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.amount, dec!(72));
        assert_eq!(payment.original_amount, Some(dec!(80)));
    }

    #[test]
    fn test_legacy_payment_without_tax_info() {
        let payment: TaxFilingPayment = serde_json::from_str(r#"{"amount": 150}"#).unwrap();
        assert!(payment.is_tax_exempt());
        assert_eq!(payment.total(), dec!(150));
    }
}
