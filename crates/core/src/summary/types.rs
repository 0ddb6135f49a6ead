//! Tax return summary types.
//!
//! A summary previews the CRA assessment: refund or balance owing per
//! jurisdiction plus the annual credits and benefits the client can
//! expect.

use rust_decimal::Decimal;
use rust_decimal::serde::float_option;
use serde::{Deserialize, Serialize};
use taxdesk_shared::{Cad, Language, LocalizedText};

use crate::summary::error::SummaryError;

const REFUND: LocalizedText =
    LocalizedText::new("Estimated refund", "Remboursement estimé", "Restituição estimada");
const OWING: LocalizedText = LocalizedText::new("Balance owing", "Solde dû", "Saldo devedor");
const BALANCED: LocalizedText = LocalizedText::new(
    "No refund and nothing owing",
    "Aucun remboursement ni solde dû",
    "Sem restituição e nada a pagar",
);

/// Earliest tax year the business prepares returns for.
pub const MIN_TAX_YEAR: i32 = 2000;

/// Whether the client gets money back, owes money, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "lowercase")]
pub enum ReturnOutcome {
    /// Net refund of the given amount.
    Refund(Decimal),
    /// Net balance owing of the given amount.
    Owing(Decimal),
    /// Refunds and amounts owing cancel out.
    Balanced,
}

/// Summary of a prepared return.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxReturnSummary {
    /// Tax year the return covers.
    pub tax_year: i32,
    /// Federal refund.
    #[serde(serialize_with = "float_option::serialize")]
    pub federal_refund: Option<Decimal>,
    /// Federal balance owing.
    #[serde(serialize_with = "float_option::serialize")]
    pub federal_owing: Option<Decimal>,
    /// Provincial refund.
    #[serde(serialize_with = "float_option::serialize")]
    pub provincial_refund: Option<Decimal>,
    /// Provincial balance owing.
    #[serde(serialize_with = "float_option::serialize")]
    pub provincial_owing: Option<Decimal>,
    /// Annual GST/HST credit.
    #[serde(serialize_with = "float_option::serialize")]
    pub gst_credit: Option<Decimal>,
    /// Annual Canada Child Benefit.
    #[serde(serialize_with = "float_option::serialize")]
    pub child_benefit: Option<Decimal>,
    /// Annual Canada Carbon Rebate.
    #[serde(serialize_with = "float_option::serialize")]
    pub carbon_rebate: Option<Decimal>,
    /// Preparer notes shown to the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn sum(values: &[Option<Decimal>]) -> Decimal {
    values.iter().flatten().copied().sum()
}

impl TaxReturnSummary {
    /// Federal plus provincial refund.
    #[must_use]
    pub fn total_refund(&self) -> Decimal {
        sum(&[self.federal_refund, self.provincial_refund])
    }

    /// Federal plus provincial balance owing.
    #[must_use]
    pub fn total_owing(&self) -> Decimal {
        sum(&[self.federal_owing, self.provincial_owing])
    }

    /// Refund minus owing; positive means money back.
    #[must_use]
    pub fn net_amount(&self) -> Decimal {
        self.total_refund() - self.total_owing()
    }

    /// Annual credits and benefits combined.
    #[must_use]
    pub fn total_benefits(&self) -> Decimal {
        sum(&[self.gst_credit, self.child_benefit, self.carbon_rebate])
    }

    /// Classifies the net amount by sign.
    #[must_use]
    pub fn outcome(&self) -> ReturnOutcome {
        let net = self.net_amount();
        if net.is_zero() {
            ReturnOutcome::Balanced
        } else if net.is_sign_positive() {
            ReturnOutcome::Refund(net)
        } else {
            ReturnOutcome::Owing(-net)
        }
    }

    /// One-line headline for the client, e.g. `Estimated refund: $1,234.50`.
    #[must_use]
    pub fn headline(&self, language: Language) -> String {
        match self.outcome() {
            ReturnOutcome::Refund(amount) => {
                format!("{}: {}", REFUND.get(language), Cad::new(amount))
            }
            ReturnOutcome::Owing(amount) => {
                format!("{}: {}", OWING.get(language), Cad::new(amount))
            }
            ReturnOutcome::Balanced => BALANCED.get(language).to_string(),
        }
    }

    /// Checks that every figure is a non-negative magnitude.
    ///
    /// Fields are checked one at a time; refunds and amounts owing may
    /// both be present.
    pub fn validate(&self) -> Result<(), SummaryError> {
        if self.tax_year < MIN_TAX_YEAR {
            return Err(SummaryError::UnsupportedTaxYear(self.tax_year));
        }

        let fields = [
            ("federalRefund", self.federal_refund),
            ("federalOwing", self.federal_owing),
            ("provincialRefund", self.provincial_refund),
            ("provincialOwing", self.provincial_owing),
            ("gstCredit", self.gst_credit),
            ("childBenefit", self.child_benefit),
            ("carbonRebate", self.carbon_rebate),
        ];
        for (field, value) in fields {
            if let Some(value) = value
                && value.is_sign_negative()
                && !value.is_zero()
            {
                return Err(SummaryError::NegativeFigure { field, value });
            }
        }
        Ok(())
    }
}
