//! Filing lifecycle statuses and their display metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use taxdesk_shared::{Language, LocalizedText};

/// Status of a client's tax filing.
///
/// Filings move forward through eight steps:
/// documents-pending → documents-received → in-processing →
/// ready-for-review → awaiting-payment → payment-received →
/// filing-submitted → completed.
///
/// A client may send a ready-for-review filing back as `rejected`; it sits
/// at step 4 until staff resubmit it for review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxFilingStatus {
    /// Waiting for the client to upload documents.
    DocumentsPending,
    /// Documents uploaded and acknowledged.
    DocumentsReceived,
    /// Return is being prepared.
    InProcessing,
    /// Return prepared, waiting for the client to review it.
    ReadyForReview,
    /// Client changes requested on the prepared return.
    Rejected,
    /// Client approved the return; payment is due.
    AwaitingPayment,
    /// Payment confirmed.
    PaymentReceived,
    /// Return filed with the CRA.
    FilingSubmitted,
    /// Filing complete (terminal).
    Completed,
}

impl TaxFilingStatus {
    /// Every status, main path first then the side branch.
    pub const ALL: [Self; 9] = [
        Self::DocumentsPending,
        Self::DocumentsReceived,
        Self::InProcessing,
        Self::ReadyForReview,
        Self::AwaitingPayment,
        Self::PaymentReceived,
        Self::FilingSubmitted,
        Self::Completed,
        Self::Rejected,
    ];

    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DocumentsPending => "documents-pending",
            Self::DocumentsReceived => "documents-received",
            Self::InProcessing => "in-processing",
            Self::ReadyForReview => "ready-for-review",
            Self::Rejected => "rejected",
            Self::AwaitingPayment => "awaiting-payment",
            Self::PaymentReceived => "payment-received",
            Self::FilingSubmitted => "filing-submitted",
            Self::Completed => "completed",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Progress-bar step, 1 through 8.
    #[must_use]
    pub fn step(&self) -> u8 {
        status_config(*self).step
    }

    /// Returns true if no further transition is possible.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns true once payment has been received; the price is locked from
    /// here on.
    #[must_use]
    pub fn is_paid(&self) -> bool {
        matches!(
            self,
            Self::PaymentReceived | Self::FilingSubmitted | Self::Completed
        )
    }

    /// Returns true if the client is expected to act next.
    #[must_use]
    pub fn awaits_client(&self) -> bool {
        matches!(
            self,
            Self::DocumentsPending | Self::ReadyForReview | Self::AwaitingPayment
        )
    }
}

impl fmt::Display for TaxFilingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Badge colour token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
    /// Purple.
    Purple,
    /// Orange.
    Orange,
    /// Red.
    Red,
    /// Amber.
    Amber,
    /// Teal.
    Teal,
    /// Indigo.
    Indigo,
    /// Green.
    Green,
}

/// Badge icon token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusIcon {
    /// Upload arrow.
    Upload,
    /// Document with a check mark.
    FileCheck,
    /// Spinner.
    Loader,
    /// Eye.
    Eye,
    /// Crossed circle.
    XCircle,
    /// Credit card.
    CreditCard,
    /// Circled check mark.
    CheckCircle,
    /// Paper plane.
    Send,
    /// Badge with a check mark.
    BadgeCheck,
}

/// Display metadata for one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusConfig {
    /// Short label.
    pub label: LocalizedText,
    /// One-sentence explanation for the client.
    pub description: LocalizedText,
    /// Badge colour.
    pub color: StatusColor,
    /// Badge icon.
    pub icon: StatusIcon,
    /// Progress-bar step.
    pub step: u8,
}

impl StatusConfig {
    /// Label in the given language.
    #[must_use]
    pub fn label(&self, language: Language) -> &'static str {
        self.label.get(language)
    }

    /// Description in the given language.
    #[must_use]
    pub fn description(&self, language: Language) -> &'static str {
        self.description.get(language)
    }
}

/// Display metadata for every status, in [`TaxFilingStatus::ALL`] order.
pub static STATUS_CONFIGS: [(TaxFilingStatus, StatusConfig); 9] = [
    (
        TaxFilingStatus::DocumentsPending,
        StatusConfig {
            label: LocalizedText::new(
                "Documents Pending",
                "Documents en attente",
                "Documentos pendentes",
            ),
            description: LocalizedText::new(
                "Please upload your tax documents to get started.",
                "Veuillez téléverser vos documents fiscaux pour commencer.",
                "Envie seus documentos fiscais para começar.",
            ),
            color: StatusColor::Yellow,
            icon: StatusIcon::Upload,
            step: 1,
        },
    ),
    (
        TaxFilingStatus::DocumentsReceived,
        StatusConfig {
            label: LocalizedText::new(
                "Documents Received",
                "Documents reçus",
                "Documentos recebidos",
            ),
            description: LocalizedText::new(
                "We have received your documents and will start shortly.",
                "Nous avons reçu vos documents et commencerons sous peu.",
                "Recebemos seus documentos e começaremos em breve.",
            ),
            color: StatusColor::Blue,
            icon: StatusIcon::FileCheck,
            step: 2,
        },
    ),
    (
        TaxFilingStatus::InProcessing,
        StatusConfig {
            label: LocalizedText::new("In Processing", "En traitement", "Em processamento"),
            description: LocalizedText::new(
                "Your return is being prepared.",
                "Votre déclaration est en cours de préparation.",
                "Sua declaração está sendo preparada.",
            ),
            color: StatusColor::Purple,
            icon: StatusIcon::Loader,
            step: 3,
        },
    ),
    (
        TaxFilingStatus::ReadyForReview,
        StatusConfig {
            label: LocalizedText::new(
                "Ready for Review",
                "Prête pour révision",
                "Pronta para revisão",
            ),
            description: LocalizedText::new(
                "Your return is ready. Please review and approve it.",
                "Votre déclaration est prête. Veuillez la vérifier et l'approuver.",
                "Sua declaração está pronta. Revise e aprove.",
            ),
            color: StatusColor::Orange,
            icon: StatusIcon::Eye,
            step: 4,
        },
    ),
    (
        TaxFilingStatus::AwaitingPayment,
        StatusConfig {
            label: LocalizedText::new(
                "Awaiting Payment",
                "En attente de paiement",
                "Aguardando pagamento",
            ),
            description: LocalizedText::new(
                "Return approved. Payment is required before filing.",
                "Déclaration approuvée. Le paiement est requis avant la production.",
                "Declaração aprovada. O pagamento é necessário antes do envio.",
            ),
            color: StatusColor::Amber,
            icon: StatusIcon::CreditCard,
            step: 5,
        },
    ),
    (
        TaxFilingStatus::PaymentReceived,
        StatusConfig {
            label: LocalizedText::new(
                "Payment Received",
                "Paiement reçu",
                "Pagamento recebido",
            ),
            description: LocalizedText::new(
                "Thank you. Your return will be filed shortly.",
                "Merci. Votre déclaration sera produite sous peu.",
                "Obrigado. Sua declaração será enviada em breve.",
            ),
            color: StatusColor::Teal,
            icon: StatusIcon::CheckCircle,
            step: 6,
        },
    ),
    (
        TaxFilingStatus::FilingSubmitted,
        StatusConfig {
            label: LocalizedText::new(
                "Filing Submitted",
                "Déclaration transmise",
                "Declaração enviada",
            ),
            description: LocalizedText::new(
                "Your return has been submitted to the CRA.",
                "Votre déclaration a été transmise à l'ARC.",
                "Sua declaração foi enviada à CRA.",
            ),
            color: StatusColor::Indigo,
            icon: StatusIcon::Send,
            step: 7,
        },
    ),
    (
        TaxFilingStatus::Completed,
        StatusConfig {
            label: LocalizedText::new("Completed", "Terminée", "Concluída"),
            description: LocalizedText::new(
                "Your filing is complete.",
                "Votre déclaration est terminée.",
                "Sua declaração foi concluída.",
            ),
            color: StatusColor::Green,
            icon: StatusIcon::BadgeCheck,
            step: 8,
        },
    ),
    (
        TaxFilingStatus::Rejected,
        StatusConfig {
            label: LocalizedText::new(
                "Changes Requested",
                "Modifications demandées",
                "Alterações solicitadas",
            ),
            description: LocalizedText::new(
                "You requested changes. We are revising your return.",
                "Vous avez demandé des modifications. Nous révisons votre déclaration.",
                "Você solicitou alterações. Estamos revisando sua declaração.",
            ),
            color: StatusColor::Red,
            icon: StatusIcon::XCircle,
            step: 4,
        },
    ),
];

/// Returns the display metadata for a status.
#[must_use]
pub fn status_config(status: TaxFilingStatus) -> &'static StatusConfig {
    let index = match status {
        TaxFilingStatus::DocumentsPending => 0,
        TaxFilingStatus::DocumentsReceived => 1,
        TaxFilingStatus::InProcessing => 2,
        TaxFilingStatus::ReadyForReview => 3,
        TaxFilingStatus::AwaitingPayment => 4,
        TaxFilingStatus::PaymentReceived => 5,
        TaxFilingStatus::FilingSubmitted => 6,
        TaxFilingStatus::Completed => 7,
        TaxFilingStatus::Rejected => 8,
    };
    &STATUS_CONFIGS[index].1
}
