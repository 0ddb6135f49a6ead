//! Guarded filing status transitions.
//!
//! Every status change goes through [`FilingWorkflow::transition`], which
//! rejects events that do not start from the filing's current status.

use crate::filing::error::FilingError;
use crate::filing::status::TaxFilingStatus;
use crate::filing::types::FilingEvent;

/// Stateless transition logic for the filing lifecycle.
pub struct FilingWorkflow;

impl FilingWorkflow {
    /// Applies an event to a status.
    ///
    /// # Returns
    /// * `Ok(next)` if the event is legal in `current`
    /// * `Err(FilingError::InvalidTransition)` otherwise
    pub fn transition(
        current: TaxFilingStatus,
        event: FilingEvent,
    ) -> Result<TaxFilingStatus, FilingError> {
        if event.source() == current {
            Ok(event.target())
        } else {
            Err(FilingError::InvalidTransition {
                from: current,
                event,
            })
        }
    }

    /// Check if a status transition is valid.
    ///
    /// Valid transitions:
    /// - documents-pending → documents-received
    /// - documents-received → in-processing
    /// - in-processing → ready-for-review
    /// - ready-for-review → awaiting-payment | rejected
    /// - rejected → ready-for-review
    /// - awaiting-payment → payment-received
    /// - payment-received → filing-submitted
    /// - filing-submitted → completed
    #[must_use]
    pub fn is_valid_transition(from: TaxFilingStatus, to: TaxFilingStatus) -> bool {
        FilingEvent::ALL
            .iter()
            .any(|event| event.source() == from && event.target() == to)
    }

    /// Events that may be applied in a status.
    #[must_use]
    pub fn available_events(current: TaxFilingStatus) -> Vec<FilingEvent> {
        FilingEvent::ALL
            .into_iter()
            .filter(|event| event.source() == current)
            .collect()
    }

    /// Statuses reachable in one step.
    #[must_use]
    pub fn next_statuses(current: TaxFilingStatus) -> Vec<TaxFilingStatus> {
        Self::available_events(current)
            .into_iter()
            .map(|event| event.target())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let events = [
            FilingEvent::DocumentsReceived,
            FilingEvent::StartProcessing,
            FilingEvent::MarkReadyForReview,
            FilingEvent::ClientApprove,
            FilingEvent::ConfirmPayment,
            FilingEvent::SubmitFiling,
            FilingEvent::Complete,
        ];
        let mut status = TaxFilingStatus::DocumentsPending;
        for event in events {
            status = FilingWorkflow::transition(status, event).unwrap();
        }
        assert_eq!(status, TaxFilingStatus::Completed);
    }

    #[test]
    fn test_rejection_loop() {
        let status = FilingWorkflow::transition(
            TaxFilingStatus::ReadyForReview,
            FilingEvent::ClientRequestChanges,
        )
        .unwrap();
        assert_eq!(status, TaxFilingStatus::Rejected);

        let status = FilingWorkflow::transition(status, FilingEvent::Resubmit).unwrap();
        assert_eq!(status, TaxFilingStatus::ReadyForReview);
    }

    #[test]
    fn test_skip_to_completed_fails() {
        let result =
            FilingWorkflow::transition(TaxFilingStatus::DocumentsPending, FilingEvent::Complete);
        assert!(matches!(
            result,
            Err(FilingError::InvalidTransition {
                from: TaxFilingStatus::DocumentsPending,
                event: FilingEvent::Complete,
            })
        ));
    }

    #[test]
    fn test_completed_is_terminal() {
        assert!(FilingWorkflow::available_events(TaxFilingStatus::Completed).is_empty());
        for event in FilingEvent::ALL {
            assert!(FilingWorkflow::transition(TaxFilingStatus::Completed, event).is_err());
        }
    }

    #[test]
    fn test_is_valid_transition() {
        assert!(FilingWorkflow::is_valid_transition(
            TaxFilingStatus::ReadyForReview,
            TaxFilingStatus::AwaitingPayment
        ));
        assert!(FilingWorkflow::is_valid_transition(
            TaxFilingStatus::Rejected,
            TaxFilingStatus::ReadyForReview
        ));
        assert!(!FilingWorkflow::is_valid_transition(
            TaxFilingStatus::DocumentsPending,
            TaxFilingStatus::Completed
        ));
        assert!(!FilingWorkflow::is_valid_transition(
            TaxFilingStatus::AwaitingPayment,
            TaxFilingStatus::ReadyForReview
        ));
    }

    #[test]
    fn test_next_statuses_from_review() {
        assert_eq!(
            FilingWorkflow::next_statuses(TaxFilingStatus::ReadyForReview),
            vec![TaxFilingStatus::AwaitingPayment, TaxFilingStatus::Rejected]
        );
    }
}
