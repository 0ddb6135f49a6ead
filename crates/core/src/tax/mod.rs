//! Sales tax classification, computation and invoice breakdown.
//!
//! # Modules
//!
//! - `province` - Provinces and their GST/PST/QST/HST rates
//! - `types` - Service type and stored tax figures
//! - `calculator` - Tax lines for a subtotal in a province
//! - `payment` - The payment stored on a filing
//! - `breakdown` - Display-ready invoice lines

pub mod breakdown;
pub mod calculator;
pub mod error;
pub mod payment;
pub mod province;
pub mod types;

#[cfg(test)]
mod breakdown_props;

pub use breakdown::{DiscountLine, InvoiceBreakdown, TaxKind, TaxLine, TaxSection};
pub use calculator::calculate_tax;
pub use error::TaxError;
pub use payment::TaxFilingPayment;
pub use province::{Province, ProvinceTaxRates};
pub use types::{ServiceType, TaxInfo};
