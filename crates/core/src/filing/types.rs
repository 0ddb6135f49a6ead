//! Filing workflow domain types.
//!
//! Events name what happened to a filing; each one is legal from exactly
//! one status and leads to exactly one status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use taxdesk_shared::types::UserId;

use crate::filing::status::TaxFilingStatus;

/// Something that moves a filing to its next status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilingEvent {
    /// Staff acknowledge the uploaded documents.
    DocumentsReceived,
    /// Staff start preparing the return.
    StartProcessing,
    /// Staff send the prepared return to the client.
    MarkReadyForReview,
    /// Client approves the prepared return.
    ClientApprove,
    /// Client asks for changes to the prepared return.
    ClientRequestChanges,
    /// Staff send the revised return back for review.
    Resubmit,
    /// Staff confirm the payment arrived.
    ConfirmPayment,
    /// Staff file the return with the CRA.
    SubmitFiling,
    /// Staff close the filing.
    Complete,
}

impl FilingEvent {
    /// Every event, in lifecycle order.
    pub const ALL: [Self; 9] = [
        Self::DocumentsReceived,
        Self::StartProcessing,
        Self::MarkReadyForReview,
        Self::ClientApprove,
        Self::ClientRequestChanges,
        Self::Resubmit,
        Self::ConfirmPayment,
        Self::SubmitFiling,
        Self::Complete,
    ];

    /// The only status this event may be applied in.
    #[must_use]
    pub const fn source(&self) -> TaxFilingStatus {
        match self {
            Self::DocumentsReceived => TaxFilingStatus::DocumentsPending,
            Self::StartProcessing => TaxFilingStatus::DocumentsReceived,
            Self::MarkReadyForReview => TaxFilingStatus::InProcessing,
            Self::ClientApprove | Self::ClientRequestChanges => TaxFilingStatus::ReadyForReview,
            Self::Resubmit => TaxFilingStatus::Rejected,
            Self::ConfirmPayment => TaxFilingStatus::AwaitingPayment,
            Self::SubmitFiling => TaxFilingStatus::PaymentReceived,
            Self::Complete => TaxFilingStatus::FilingSubmitted,
        }
    }

    /// The status the filing ends up in.
    #[must_use]
    pub const fn target(&self) -> TaxFilingStatus {
        match self {
            Self::DocumentsReceived => TaxFilingStatus::DocumentsReceived,
            Self::StartProcessing => TaxFilingStatus::InProcessing,
            Self::MarkReadyForReview | Self::Resubmit => TaxFilingStatus::ReadyForReview,
            Self::ClientApprove => TaxFilingStatus::AwaitingPayment,
            Self::ClientRequestChanges => TaxFilingStatus::Rejected,
            Self::ConfirmPayment => TaxFilingStatus::PaymentReceived,
            Self::SubmitFiling => TaxFilingStatus::FilingSubmitted,
            Self::Complete => TaxFilingStatus::Completed,
        }
    }

    /// Returns true if the filing's owner performs this event.
    #[must_use]
    pub const fn is_client_action(&self) -> bool {
        matches!(self, Self::ClientApprove | Self::ClientRequestChanges)
    }

    /// Returns the string representation of the event.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DocumentsReceived => "documents-received",
            Self::StartProcessing => "start-processing",
            Self::MarkReadyForReview => "mark-ready-for-review",
            Self::ClientApprove => "client-approve",
            Self::ClientRequestChanges => "client-request-changes",
            Self::Resubmit => "resubmit",
            Self::ConfirmPayment => "confirm-payment",
            Self::SubmitFiling => "submit-filing",
            Self::Complete => "complete",
        }
    }

    /// Parses an event from a string.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|event| event.as_str() == s)
    }
}

impl fmt::Display for FilingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Who is acting on a filing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    /// A portal client, identified by user id.
    Client(UserId),
    /// A staff member, identified by email.
    Staff {
        /// Email checked against the admin list.
        email: String,
    },
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client(id) => write!(f, "client:{id}"),
            Self::Staff { email } => write!(f, "staff:{email}"),
        }
    }
}

/// Audit entry recorded for every applied transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    /// Status before the event.
    pub from: TaxFilingStatus,
    /// Status after the event.
    pub to: TaxFilingStatus,
    /// The event applied.
    pub event: FilingEvent,
    /// Who applied it.
    pub actor: String,
    /// Optional note, required when changes are requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// When it was applied.
    pub at: DateTime<Utc>,
}
