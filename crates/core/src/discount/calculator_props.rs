//! Property-based tests for the discount calculator.

use proptest::prelude::*;
use rust_decimal::Decimal;
use taxdesk_shared::types::money::round_cents;

use crate::discount::calculator::{calculate_discount, calculate_final_amount};
use crate::discount::types::DiscountType;

/// Strategy for generating non-negative amounts with up to 4 decimal places.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000, 0u32..=4).prop_map(|(n, scale)| Decimal::new(n, scale))
}

fn arb_discount_type() -> impl Strategy<Value = DiscountType> {
    prop_oneof![
        Just(DiscountType::None),
        Just(DiscountType::ReturningCustomer),
        Just(DiscountType::Referral),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Discount amount is the rounded percentage of the base.
    #[test]
    fn prop_discount_amount_matches_percentage(
        base in arb_amount(),
        discount_type in arb_discount_type(),
    ) {
        let discount = calculate_discount(base, discount_type, None);
        let expected = round_cents(base * (discount_type.percentage() / Decimal::ONE_HUNDRED));
        prop_assert_eq!(discount.amount, expected);
        prop_assert_eq!(discount.percentage, discount_type.percentage());
    }

    /// Final amount never exceeds the base and equals the rounded difference.
    #[test]
    fn prop_final_amount_bounded_by_base(
        base in arb_amount(),
        discount_type in arb_discount_type(),
    ) {
        let discount = calculate_discount(base, discount_type, None);
        let final_amount = calculate_final_amount(base, &discount);
        prop_assert_eq!(final_amount, round_cents(base - discount.amount));
        prop_assert!(final_amount <= round_cents(base));
        prop_assert!(final_amount >= Decimal::ZERO);
    }

    /// No discount leaves a cent-precise base untouched.
    #[test]
    fn prop_no_discount_identity(cents in 0i64..10_000_000_000) {
        let base = Decimal::new(cents, 2);
        let discount = calculate_discount(base, DiscountType::None, None);
        prop_assert!(discount.amount.is_zero());
        prop_assert_eq!(calculate_final_amount(base, &discount), base);
    }
}
