//! Property-based tests for FilingWorkflow.

use proptest::prelude::*;

use crate::filing::error::FilingError;
use crate::filing::status::TaxFilingStatus;
use crate::filing::types::FilingEvent;
use crate::filing::workflow::FilingWorkflow;

fn arb_status() -> impl Strategy<Value = TaxFilingStatus> {
    prop::sample::select(TaxFilingStatus::ALL.to_vec())
}

fn arb_event() -> impl Strategy<Value = FilingEvent> {
    prop::sample::select(FilingEvent::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A transition succeeds exactly when the resulting edge is valid.
    #[test]
    fn prop_transition_agrees_with_edge_table(status in arb_status(), event in arb_event()) {
        match FilingWorkflow::transition(status, event) {
            Ok(next) => {
                prop_assert_eq!(event.source(), status);
                prop_assert!(FilingWorkflow::is_valid_transition(status, next));
            }
            Err(FilingError::InvalidTransition { from, event: rejected }) => {
                prop_assert_eq!(from, status);
                prop_assert_eq!(rejected, event);
                prop_assert_ne!(event.source(), status);
            }
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }

    /// Only rejection moves backwards, and never below step 4.
    #[test]
    fn prop_progress_never_regresses(status in arb_status(), event in arb_event()) {
        if let Ok(next) = FilingWorkflow::transition(status, event) {
            if status == TaxFilingStatus::Rejected || next == TaxFilingStatus::Rejected {
                prop_assert_eq!(next.step(), 4);
            } else {
                prop_assert_eq!(next.step(), status.step() + 1);
            }
        }
    }

    /// Random event sequences never leave the status table.
    #[test]
    fn prop_random_walk_stays_consistent(events in prop::collection::vec(arb_event(), 0..30)) {
        let mut status = TaxFilingStatus::DocumentsPending;
        for event in events {
            if let Ok(next) = FilingWorkflow::transition(status, event) {
                prop_assert!(!status.is_terminal());
                status = next;
            }
        }
        prop_assert!((1..=8).contains(&status.step()));
    }
}
