//! Sales tax error types.

use taxdesk_shared::AppError;
use thiserror::Error;

/// Errors raised when parsing tax inputs.
#[derive(Debug, Error)]
pub enum TaxError {
    /// The province code is not a Canadian province or territory.
    #[error("Unknown province code: {0}")]
    UnknownProvince(String),

    /// The service type string is not recognised.
    #[error("Unknown service type: {0}")]
    UnknownServiceType(String),
}

impl TaxError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownProvince(_) => "UNKNOWN_PROVINCE",
            Self::UnknownServiceType(_) => "UNKNOWN_SERVICE_TYPE",
        }
    }
}

impl From<TaxError> for AppError {
    fn from(err: TaxError) -> Self {
        Self::Validation(err.to_string())
    }
}
