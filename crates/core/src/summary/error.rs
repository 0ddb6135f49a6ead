//! Return summary error types.

use rust_decimal::Decimal;
use taxdesk_shared::AppError;
use thiserror::Error;

/// Errors raised when validating a return summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// A figure that must be a magnitude was negative.
    #[error("{field} must not be negative (got {value})")]
    NegativeFigure {
        /// Field name.
        field: &'static str,
        /// The offending value.
        value: Decimal,
    },

    /// The tax year is outside the supported range.
    #[error("Tax year {0} is not supported")]
    UnsupportedTaxYear(i32),
}

impl SummaryError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeFigure { .. } => "NEGATIVE_FIGURE",
            Self::UnsupportedTaxYear(_) => "UNSUPPORTED_TAX_YEAR",
        }
    }
}

impl From<SummaryError> for AppError {
    fn from(err: SummaryError) -> Self {
        Self::Validation(err.to_string())
    }
}
