//! Province sales tax computation for business services.

use rust_decimal::Decimal;
use taxdesk_shared::types::money::round_cents;

use crate::tax::province::Province;
use crate::tax::types::{ServiceType, TaxInfo};

/// Computes the tax lines for a service sold in a province.
///
/// Personal tax filings are exempt in every province. For business
/// services each line is `round(subtotal * rate / 100, 2)` and
/// `total_tax` is the sum of the rounded lines.
#[must_use]
pub fn calculate_tax(subtotal: Decimal, service_type: ServiceType, province: Province) -> TaxInfo {
    if service_type.is_tax_exempt() {
        return TaxInfo::exempt(province, subtotal);
    }

    let rates = province.tax_rates();
    let line = |rate: Decimal| round_cents(subtotal * (rate / Decimal::ONE_HUNDRED));

    let gst = line(rates.gst);
    let pst = line(rates.pst);
    let qst = line(rates.qst);
    let hst = line(rates.hst);

    TaxInfo {
        service_type,
        province,
        subtotal,
        gst,
        pst,
        qst,
        hst,
        total_tax: gst + pst + qst + hst,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_personal_filing_exempt_everywhere() {
        for province in Province::ALL {
            let info = calculate_tax(dec!(150), ServiceType::PersonalTaxFiling, province);
            assert!(info.tax_exempt());
            assert_eq!(info.total_tax, Decimal::ZERO);
            assert_eq!(info.total(), dec!(150));
        }
    }

    #[test]
    fn test_largest_subtotal_does_not_overflow() {
        for province in Province::ALL {
            let info = calculate_tax(Decimal::MAX, ServiceType::BusinessService, province);
            assert!(info.total_tax < Decimal::MAX);
        }
    }

    #[test]
    fn test_ontario_hst() {
        let info = calculate_tax(dec!(600), ServiceType::BusinessService, Province::On);
        assert_eq!(info.hst, dec!(78.00));
        assert_eq!(info.gst, Decimal::ZERO);
        assert_eq!(info.total_tax, dec!(78.00));
        assert_eq!(info.total(), dec!(678.00));
    }

    #[test]
    fn test_quebec_gst_and_qst() {
        let info = calculate_tax(dec!(250), ServiceType::BusinessService, Province::Qc);
        assert_eq!(info.gst, dec!(12.50));
        // 250 * 9.975% = 24.9375
        assert_eq!(info.qst, dec!(24.94));
        assert_eq!(info.total_tax, dec!(37.44));
    }

    #[test]
    fn test_british_columbia_gst_and_pst() {
        let info = calculate_tax(dec!(1200), ServiceType::BusinessService, Province::Bc);
        assert_eq!(info.gst, dec!(60.00));
        assert_eq!(info.pst, dec!(84.00));
        assert_eq!(info.hst, Decimal::ZERO);
        assert_eq!(info.total_tax, dec!(144.00));
    }

    #[test]
    fn test_alberta_gst_only() {
        let info = calculate_tax(dec!(99.99), ServiceType::BusinessService, Province::Ab);
        // 99.99 * 5% = 4.9995
        assert_eq!(info.gst, dec!(5.00));
        assert_eq!(info.total_tax, dec!(5.00));
    }
}
