//! Discount error types.

use rust_decimal::Decimal;
use taxdesk_shared::AppError;
use thiserror::Error;

/// Errors raised when validating discount inputs.
///
/// The calculator itself is total; these come from the explicit
/// validation step callers run before building a payment.
#[derive(Debug, Error)]
pub enum DiscountError {
    /// The base amount is below zero.
    #[error("Base amount {0} must not be negative")]
    NegativeBaseAmount(Decimal),

    /// The discount type string is not recognised.
    #[error("Unknown discount type: {0}")]
    UnknownDiscountType(String),
}

impl DiscountError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeBaseAmount(_) => "NEGATIVE_BASE_AMOUNT",
            Self::UnknownDiscountType(_) => "UNKNOWN_DISCOUNT_TYPE",
        }
    }
}

impl From<DiscountError> for AppError {
    fn from(err: DiscountError) -> Self {
        Self::Validation(err.to_string())
    }
}
