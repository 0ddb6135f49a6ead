//! Property-based tests for the invoice breakdown.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::discount::DiscountType;
use crate::tax::breakdown::{InvoiceBreakdown, TaxSection};
use crate::tax::payment::TaxFilingPayment;
use crate::tax::province::Province;
use crate::tax::types::{ServiceType, TaxInfo};

fn arb_cents() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|n| Decimal::new(n, 2))
}

fn arb_province() -> impl Strategy<Value = Province> {
    prop::sample::select(Province::ALL.to_vec())
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

    /// Personal filings never render a tax line, whatever figures are stored.
    #[test]
    fn prop_personal_filing_never_itemizes(
        amount in arb_cents(),
        province in arb_province(),
        gst in arb_cents(),
        pst in arb_cents(),
        qst in arb_cents(),
        hst in arb_cents(),
    ) {
        let payment = TaxFilingPayment {
            amount,
            original_amount: None,
            discount: None,
            tax_info: Some(TaxInfo {
                service_type: ServiceType::PersonalTaxFiling,
                province,
                subtotal: amount,
                gst,
                pst,
                qst,
                hst,
                total_tax: gst + pst + qst + hst,
            }),
        };

        let breakdown = InvoiceBreakdown::from_payment(&payment, "service");
        prop_assert_eq!(breakdown.tax, TaxSection::Exempt);
        prop_assert_eq!(breakdown.total.amount(), amount);
    }

    /// Itemized lines are all positive and sum to the difference between total and subtotal.
    #[test]
    fn prop_business_total_is_subtotal_plus_lines(
        base in arb_cents(),
        province in arb_province(),
        discount_type in arb_discount_type(),
    ) {
        let payment = TaxFilingPayment::quote(
            base,
            discount_type,
            None,
            ServiceType::BusinessService,
            province,
        );
        let breakdown = InvoiceBreakdown::from_payment(&payment, "service");

        if let TaxSection::Itemized(lines) = &breakdown.tax {
            prop_assert!(lines.iter().all(|l| l.amount.amount() > Decimal::ZERO));
        }
        prop_assert_eq!(breakdown.total, breakdown.subtotal + breakdown.total_tax());
        prop_assert_eq!(breakdown.total.amount(), payment.total());
    }
}
