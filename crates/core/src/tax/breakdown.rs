//! Invoice breakdown of a filing payment.
//!
//! Turns a stored payment into the lines shown to the client: original
//! price, discount, subtotal, then either an exemption notice or the
//! non-zero tax lines, and the total. Tax figures are taken as stored;
//! only the discount subtraction and the total are computed here.

use std::fmt::Write as _;

use rust_decimal::Decimal;
use serde::Serialize;
use taxdesk_shared::{Cad, Language, LocalizedText};

use crate::discount::{DiscountInfo, DiscountType};
use crate::tax::payment::TaxFilingPayment;
use crate::tax::types::TaxInfo;

const ORIGINAL_PRICE: LocalizedText =
    LocalizedText::new("Original price", "Prix original", "Preço original");
const RETURNING_DISCOUNT: LocalizedText = LocalizedText::new(
    "Returning customer discount",
    "Rabais client fidèle",
    "Desconto de cliente recorrente",
);
const REFERRAL_DISCOUNT: LocalizedText = LocalizedText::new(
    "Referral discount",
    "Rabais de parrainage",
    "Desconto por indicação",
);
const REFERRED_BY: LocalizedText = LocalizedText::new("Referred by", "Recommandé par", "Indicado por");
const SUBTOTAL: LocalizedText = LocalizedText::new("Subtotal", "Sous-total", "Subtotal");
const TAX_EXEMPT: LocalizedText = LocalizedText::new(
    "Tax exempt (personal tax filing)",
    "Exonéré de taxes (déclaration de revenus personnelle)",
    "Isento de impostos (declaração de imposto pessoal)",
);
const TOTAL: LocalizedText = LocalizedText::new("Total", "Total", "Total");

/// A sales tax category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaxKind {
    /// Goods and services tax.
    Gst,
    /// Provincial sales tax.
    Pst,
    /// Quebec sales tax.
    Qst,
    /// Harmonized sales tax.
    Hst,
}

impl TaxKind {
    /// Localized abbreviation.
    #[must_use]
    pub const fn label(&self) -> LocalizedText {
        match self {
            Self::Gst => LocalizedText::new("GST", "TPS", "GST"),
            Self::Pst => LocalizedText::new("PST", "TVP", "PST"),
            Self::Qst => LocalizedText::new("QST", "TVQ", "QST"),
            Self::Hst => LocalizedText::new("HST", "TVH", "HST"),
        }
    }
}

/// One itemized tax line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxLine {
    /// Tax category.
    pub kind: TaxKind,
    /// Percentage in force in the payment's province.
    pub rate: Decimal,
    /// Tax amount.
    pub amount: Cad,
}

/// The tax part of a breakdown; the two variants are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "lines", rename_all = "lowercase")]
pub enum TaxSection {
    /// No tax applies.
    Exempt,
    /// Non-zero tax lines.
    Itemized(Vec<TaxLine>),
}

/// The discount line of a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountLine {
    /// The discount programme.
    pub discount_type: DiscountType,
    /// Percentage taken off.
    pub percentage: Decimal,
    /// Amount taken off.
    pub amount: Cad,
    /// Who referred the client.
    pub referred_by: Option<String>,
}

impl From<&DiscountInfo> for DiscountLine {
    fn from(info: &DiscountInfo) -> Self {
        Self {
            discount_type: info.discount_type,
            percentage: info.percentage,
            amount: Cad::new(info.amount),
            referred_by: info.referred_by.clone(),
        }
    }
}

/// Display-ready invoice for one filing payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceBreakdown {
    /// Name of the service being paid for.
    pub service_name: String,
    /// Price before discount, only when a discount applies.
    pub original_amount: Option<Cad>,
    /// Discount line, only when a discount applies.
    pub discount: Option<DiscountLine>,
    /// Amount after discount.
    pub subtotal: Cad,
    /// Exemption notice or tax lines.
    pub tax: TaxSection,
    /// Amount due.
    pub total: Cad,
}

impl InvoiceBreakdown {
    /// Builds the breakdown for a payment.
    ///
    /// The exemption check runs first: a payment without tax figures, or
    /// whose figures belong to an exempt service, renders as exempt even
    /// if stray tax amounts were stored on it.
    #[must_use]
    pub fn from_payment(payment: &TaxFilingPayment, service_name: impl Into<String>) -> Self {
        let discount = payment.discount.as_ref().filter(|d| d.is_applied());
        let original_amount = discount.map(|d| {
            Cad::new(
                payment
                    .original_amount
                    .unwrap_or(payment.amount + d.amount),
            )
        });

        let subtotal = Cad::new(payment.amount);
        let tax = match &payment.tax_info {
            Some(info) if !info.tax_exempt() => TaxSection::Itemized(tax_lines(info)),
            _ => TaxSection::Exempt,
        };

        let mut breakdown = Self {
            service_name: service_name.into(),
            original_amount,
            discount: discount.map(DiscountLine::from),
            subtotal,
            tax,
            total: subtotal,
        };
        breakdown.total = subtotal + breakdown.total_tax();
        breakdown
    }

    /// Returns true if the exemption notice is shown.
    #[must_use]
    pub fn is_tax_exempt(&self) -> bool {
        matches!(self.tax, TaxSection::Exempt)
    }

    /// Sum of the itemized tax lines.
    #[must_use]
    pub fn total_tax(&self) -> Cad {
        match &self.tax {
            TaxSection::Exempt => Cad::zero(),
            TaxSection::Itemized(lines) => lines
                .iter()
                .fold(Cad::zero(), |acc, line| acc + line.amount),
        }
    }

    /// Renders the breakdown as plain text, one line per entry.
    #[must_use]
    pub fn render(&self, language: Language) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.service_name);

        if let Some(original) = self.original_amount {
            let _ = writeln!(out, "{}: {original}", ORIGINAL_PRICE.get(language));
        }
        if let Some(discount) = &self.discount {
            let label = match discount.discount_type {
                DiscountType::Referral => REFERRAL_DISCOUNT,
                DiscountType::ReturningCustomer | DiscountType::None => RETURNING_DISCOUNT,
            };
            let _ = writeln!(
                out,
                "{} ({}%): -{}",
                label.get(language),
                discount.percentage.normalize(),
                discount.amount
            );
            if let Some(referrer) = &discount.referred_by {
                let _ = writeln!(out, "{}: {referrer}", REFERRED_BY.get(language));
            }
        }

        let _ = writeln!(out, "{}: {}", SUBTOTAL.get(language), self.subtotal);

        match &self.tax {
            TaxSection::Exempt => {
                let _ = writeln!(out, "{}", TAX_EXEMPT.get(language));
            }
            TaxSection::Itemized(lines) => {
                for line in lines {
                    let _ = writeln!(
                        out,
                        "{} ({}%): {}",
                        line.kind.label().get(language),
                        line.rate.normalize(),
                        line.amount
                    );
                }
            }
        }

        let _ = write!(out, "{}: {}", TOTAL.get(language), self.total);
        out
    }
}

fn tax_lines(info: &TaxInfo) -> Vec<TaxLine> {
    let rates = info.province.tax_rates();
    [
        (TaxKind::Gst, rates.gst, info.gst),
        (TaxKind::Pst, rates.pst, info.pst),
        (TaxKind::Qst, rates.qst, info.qst),
        (TaxKind::Hst, rates.hst, info.hst),
    ]
    .into_iter()
    .filter(|(_, _, amount)| *amount > Decimal::ZERO)
    .map(|(kind, rate, amount)| TaxLine {
        kind,
        rate,
        amount: Cad::new(amount),
    })
    .collect()
}
