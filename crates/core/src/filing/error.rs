//! Filing error types.
//!
//! This module defines all error types that can occur during
//! filing operations such as status transitions and payment setup.

use taxdesk_shared::AppError;
use thiserror::Error;

use crate::discount::DiscountError;
use crate::filing::status::TaxFilingStatus;
use crate::filing::types::FilingEvent;
use crate::summary::SummaryError;

/// Errors that can occur during filing operations.
#[derive(Debug, Error)]
pub enum FilingError {
    /// The event is not legal in the filing's current status.
    #[error("Cannot apply {event} to a filing in status {from}")]
    InvalidTransition {
        /// The current status.
        from: TaxFilingStatus,
        /// The attempted event.
        event: FilingEvent,
    },

    /// The actor may not perform this operation.
    #[error("{actor} is not authorized to {action}")]
    NotAuthorized {
        /// Who attempted it.
        actor: String,
        /// What was attempted.
        action: String,
    },

    /// A change request must say what to change.
    #[error("A reason is required when requesting changes")]
    ChangeReasonRequired,

    /// No filing stored under the key.
    #[error("Filing {0} not found")]
    FilingNotFound(String),

    /// A filing already exists under the key.
    #[error("Filing {0} already exists")]
    FilingAlreadyExists(String),

    /// The service id is not in the pricing catalog.
    #[error("Unknown service: {0}")]
    UnknownService(String),

    /// The filing changed between being read and written.
    #[error("Filing {0} was changed concurrently")]
    ConcurrentUpdate(String),

    /// The filing is past the point where its price may change.
    #[error("Cannot change the payment of a filing in status {0}")]
    PaymentLocked(TaxFilingStatus),

    /// The filing has no payment yet.
    #[error("Filing {0} has no payment attached")]
    PaymentNotSet(String),

    /// Payment input was invalid.
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// Return summary was invalid.
    #[error(transparent)]
    Summary(#[from] SummaryError),

    /// Key-value storage failed or held malformed data.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FilingError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ChangeReasonRequired
            | Self::UnknownService(_)
            | Self::Discount(_)
            | Self::Summary(_) => 400,
            Self::NotAuthorized { .. } => 403,
            Self::FilingNotFound(_) => 404,
            Self::FilingAlreadyExists(_) | Self::ConcurrentUpdate(_) => 409,
            Self::InvalidTransition { .. } | Self::PaymentLocked(_) | Self::PaymentNotSet(_) => {
                422
            }
            Self::Storage(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::NotAuthorized { .. } => "NOT_AUTHORIZED",
            Self::ChangeReasonRequired => "CHANGE_REASON_REQUIRED",
            Self::FilingNotFound(_) => "FILING_NOT_FOUND",
            Self::FilingAlreadyExists(_) => "FILING_ALREADY_EXISTS",
            Self::UnknownService(_) => "UNKNOWN_SERVICE",
            Self::ConcurrentUpdate(_) => "CONCURRENT_UPDATE",
            Self::PaymentLocked(_) => "PAYMENT_LOCKED",
            Self::PaymentNotSet(_) => "PAYMENT_NOT_SET",
            Self::Discount(err) => err.error_code(),
            Self::Summary(err) => err.error_code(),
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }
}

impl From<serde_json::Error> for FilingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<FilingError> for AppError {
    fn from(err: FilingError) -> Self {
        let message = err.to_string();
        match err {
            FilingError::InvalidTransition { .. }
            | FilingError::PaymentLocked(_)
            | FilingError::PaymentNotSet(_) => Self::BusinessRule(message),
            FilingError::NotAuthorized { .. } => Self::Forbidden(message),
            FilingError::FilingNotFound(_) => Self::NotFound(message),
            FilingError::FilingAlreadyExists(_) | FilingError::ConcurrentUpdate(_) => {
                Self::Conflict(message)
            }
            FilingError::ChangeReasonRequired
            | FilingError::UnknownService(_)
            | FilingError::Discount(_)
            | FilingError::Summary(_) => Self::Validation(message),
            FilingError::Storage(_) => Self::Storage(message),
        }
    }
}
