//! Provinces, territories and their sales tax rates.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::tax::error::TaxError;

/// A Canadian province or territory, identified by its postal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Province {
    /// Alberta.
    Ab,
    /// British Columbia.
    Bc,
    /// Manitoba.
    Mb,
    /// New Brunswick.
    Nb,
    /// Newfoundland and Labrador.
    Nl,
    /// Nova Scotia.
    Ns,
    /// Northwest Territories.
    Nt,
    /// Nunavut.
    Nu,
    /// Ontario.
    On,
    /// Prince Edward Island.
    Pe,
    /// Quebec.
    Qc,
    /// Saskatchewan.
    Sk,
    /// Yukon.
    Yt,
}

impl Province {
    /// Every province and territory.
    pub const ALL: [Self; 13] = [
        Self::Ab,
        Self::Bc,
        Self::Mb,
        Self::Nb,
        Self::Nl,
        Self::Ns,
        Self::Nt,
        Self::Nu,
        Self::On,
        Self::Pe,
        Self::Qc,
        Self::Sk,
        Self::Yt,
    ];

    /// Returns the two-letter code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Ab => "AB",
            Self::Bc => "BC",
            Self::Mb => "MB",
            Self::Nb => "NB",
            Self::Nl => "NL",
            Self::Ns => "NS",
            Self::Nt => "NT",
            Self::Nu => "NU",
            Self::On => "ON",
            Self::Pe => "PE",
            Self::Qc => "QC",
            Self::Sk => "SK",
            Self::Yt => "YT",
        }
    }

    /// Returns the sales tax rates charged on business services.
    #[must_use]
    pub fn tax_rates(&self) -> ProvinceTaxRates {
        ProvinceTaxRates::for_province(*self)
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Province {
    type Err = TaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|p| p.code() == code)
            .ok_or_else(|| TaxError::UnknownProvince(s.to_string()))
    }
}

/// Sales tax percentages for one jurisdiction.
///
/// Exactly one of `pst`, `qst`, `hst` is non-zero where a provincial
/// component exists; `gst` is zero wherever `hst` applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProvinceTaxRates {
    /// Federal goods and services tax.
    pub gst: Decimal,
    /// Provincial sales tax (BC, MB, SK).
    pub pst: Decimal,
    /// Quebec sales tax.
    pub qst: Decimal,
    /// Harmonized sales tax.
    pub hst: Decimal,
}

impl ProvinceTaxRates {
    const GST: Decimal = dec!(5);

    const fn gst_only() -> Self {
        Self {
            gst: Self::GST,
            pst: Decimal::ZERO,
            qst: Decimal::ZERO,
            hst: Decimal::ZERO,
        }
    }

    const fn gst_and_pst(pst: Decimal) -> Self {
        Self {
            pst,
            ..Self::gst_only()
        }
    }

    const fn harmonized(hst: Decimal) -> Self {
        Self {
            gst: Decimal::ZERO,
            pst: Decimal::ZERO,
            qst: Decimal::ZERO,
            hst,
        }
    }

    /// Returns the rates in force for a province.
    #[must_use]
    pub const fn for_province(province: Province) -> Self {
        match province {
            Province::Ab | Province::Nt | Province::Nu | Province::Yt => Self::gst_only(),
            Province::Bc | Province::Mb => Self::gst_and_pst(dec!(7)),
            Province::Sk => Self::gst_and_pst(dec!(6)),
            Province::Qc => Self {
                qst: dec!(9.975),
                ..Self::gst_only()
            },
            Province::On => Self::harmonized(dec!(13)),
            Province::Ns => Self::harmonized(dec!(14)),
            Province::Nb | Province::Nl | Province::Pe => Self::harmonized(dec!(15)),
        }
    }

    /// Combined percentage.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.gst + self.pst + self.qst + self.hst
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Province::On, dec!(13))]
    #[case(Province::Qc, dec!(14.975))]
    #[case(Province::Bc, dec!(12))]
    #[case(Province::Sk, dec!(11))]
    #[case(Province::Ab, dec!(5))]
    #[case(Province::Ns, dec!(14))]
    #[case(Province::Pe, dec!(15))]
    fn test_combined_rates(#[case] province: Province, #[case] expected: Decimal) {
        assert_eq!(province.tax_rates().total(), expected);
    }

    #[test]
    fn test_exactly_one_provincial_component() {
        for province in Province::ALL {
            let rates = province.tax_rates();
            let provincial = [rates.pst, rates.qst, rates.hst]
                .iter()
                .filter(|r| !r.is_zero())
                .count();
            assert!(provincial <= 1, "{province}");
            if rates.hst.is_zero() {
                assert_eq!(rates.gst, dec!(5), "{province}");
            } else {
                assert!(rates.gst.is_zero(), "{province}");
            }
        }
    }

    #[test]
    fn test_province_from_str() {
        assert_eq!(Province::from_str("on").unwrap(), Province::On);
        assert_eq!(Province::from_str(" QC ").unwrap(), Province::Qc);
        assert!(matches!(
            Province::from_str("ZZ"),
            Err(TaxError::UnknownProvince(_))
        ));
    }

    #[test]
    fn test_province_serde() {
        assert_eq!(serde_json::to_string(&Province::Bc).unwrap(), "\"BC\"");
        let province: Province = serde_json::from_str("\"NL\"").unwrap();
        assert_eq!(province, Province::Nl);
    }
}
