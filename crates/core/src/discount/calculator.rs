//! Discount calculation.
//!
//! Rounding: discount amounts and final prices are rounded half-up
//! (away from zero) to cents, matching how prices are quoted to clients.

use rust_decimal::Decimal;
use taxdesk_shared::types::money::round_cents;

use crate::discount::error::DiscountError;
use crate::discount::types::{DiscountInfo, DiscountType};

/// Computes the discount for a base amount.
///
/// `amount = round(base * percentage / 100, 2)`. The referrer is kept only
/// for referral discounts and only when it is not blank.
///
/// Negative base amounts are not rejected here; run
/// [`validate_base_amount`] first when the input comes from a user.
#[must_use]
pub fn calculate_discount(
    base_amount: Decimal,
    discount_type: DiscountType,
    referred_by: Option<&str>,
) -> DiscountInfo {
    let percentage = discount_type.percentage();
    let amount = round_cents(base_amount * (percentage / Decimal::ONE_HUNDRED));

    let referred_by = match discount_type {
        DiscountType::Referral => referred_by
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToString::to_string),
        DiscountType::None | DiscountType::ReturningCustomer => None,
    };

    DiscountInfo {
        discount_type,
        percentage,
        amount,
        referred_by,
    }
}

/// Returns the price after the discount, rounded to cents.
#[must_use]
pub fn calculate_final_amount(base_amount: Decimal, discount: &DiscountInfo) -> Decimal {
    round_cents(base_amount - discount.amount)
}

/// Rejects base amounts below zero.
pub fn validate_base_amount(base_amount: Decimal) -> Result<(), DiscountError> {
    if base_amount.is_sign_negative() && !base_amount.is_zero() {
        return Err(DiscountError::NegativeBaseAmount(base_amount));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_returning_customer() {
        let discount = calculate_discount(dec!(500), DiscountType::ReturningCustomer, None);
        assert_eq!(discount.discount_type, DiscountType::ReturningCustomer);
        assert_eq!(discount.percentage, dec!(15));
        assert_eq!(discount.amount, dec!(75));
        assert_eq!(calculate_final_amount(dec!(500), &discount), dec!(425));
    }

    #[test]
    fn test_referral_keeps_referrer() {
        let discount = calculate_discount(dec!(350), DiscountType::Referral, Some("Jane Doe"));
        assert_eq!(discount.percentage, dec!(10));
        assert_eq!(discount.amount, dec!(35));
        assert_eq!(discount.referred_by.as_deref(), Some("Jane Doe"));
        assert_eq!(calculate_final_amount(dec!(350), &discount), dec!(315));
    }

    #[test]
    fn test_referrer_dropped_for_other_types() {
        let discount =
            calculate_discount(dec!(350), DiscountType::ReturningCustomer, Some("Jane Doe"));
        assert!(discount.referred_by.is_none());

        let blank = calculate_discount(dec!(350), DiscountType::Referral, Some("   "));
        assert!(blank.referred_by.is_none());
    }

    #[test]
    fn test_no_discount_is_identity() {
        let discount = calculate_discount(dec!(149.99), DiscountType::None, None);
        assert_eq!(discount.amount, Decimal::ZERO);
        assert!(!discount.is_applied());
        assert_eq!(calculate_final_amount(dec!(149.99), &discount), dec!(149.99));
    }

    #[rstest]
    // 15% of 0.10 = 0.015 -> rounds half-up to 0.02
    #[case(dec!(0.10), DiscountType::ReturningCustomer, dec!(0.02), dec!(0.08))]
    // 10% of 0.25 = 0.025 -> 0.03
    #[case(dec!(0.25), DiscountType::Referral, dec!(0.03), dec!(0.22))]
    // 15% of 149.99 = 22.4985 -> 22.50
    #[case(dec!(149.99), DiscountType::ReturningCustomer, dec!(22.50), dec!(127.49))]
    #[case(dec!(0), DiscountType::Referral, dec!(0), dec!(0))]
    fn test_rounding_half_up(
        #[case] base: Decimal,
        #[case] discount_type: DiscountType,
        #[case] expected_discount: Decimal,
        #[case] expected_final: Decimal,
    ) {
        let discount = calculate_discount(base, discount_type, None);
        assert_eq!(discount.amount, expected_discount);
        assert_eq!(calculate_final_amount(base, &discount), expected_final);
    }

    #[test]
    fn test_largest_amount_does_not_overflow() {
        for discount_type in [DiscountType::ReturningCustomer, DiscountType::Referral] {
            let discount = calculate_discount(Decimal::MAX, discount_type, None);
            assert!(discount.amount <= Decimal::MAX);
            assert!(calculate_final_amount(Decimal::MAX, &discount) <= Decimal::MAX);
        }
    }

    #[test]
    fn test_negative_base_propagates_unvalidated() {
        let discount = calculate_discount(dec!(-100), DiscountType::Referral, None);
        assert_eq!(discount.amount, dec!(-10));
        assert_eq!(calculate_final_amount(dec!(-100), &discount), dec!(-90));
    }

    #[test]
    fn test_validate_base_amount() {
        assert!(validate_base_amount(dec!(0)).is_ok());
        assert!(validate_base_amount(dec!(80)).is_ok());
        assert!(matches!(
            validate_base_amount(dec!(-0.01)),
            Err(DiscountError::NegativeBaseAmount(_))
        ));
    }
}
