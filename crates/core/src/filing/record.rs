//! The persisted filing record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taxdesk_shared::types::{FilingId, UserId};

use crate::filing::error::FilingError;
use crate::filing::status::{StatusConfig, TaxFilingStatus, status_config};
use crate::filing::store::storage_key;
use crate::filing::types::{Actor, FilingEvent, StatusChange};
use crate::filing::workflow::FilingWorkflow;
use crate::summary::TaxReturnSummary;
use crate::tax::TaxFilingPayment;

/// One client's filing for one tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilingRecord {
    /// Record id.
    pub id: FilingId,
    /// Owner.
    pub user_id: UserId,
    /// Tax year being filed.
    pub tax_year: i32,
    /// Pricing preset id of the purchased service.
    pub service_id: String,
    /// Current lifecycle status.
    pub status: TaxFilingStatus,
    /// Amount due, once staff have priced the filing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<TaxFilingPayment>,
    /// Return summary, once the return is prepared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<TaxReturnSummary>,
    /// Applied transitions, oldest first.
    #[serde(default)]
    pub history: Vec<StatusChange>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record last changed.
    pub updated_at: DateTime<Utc>,
}

impl FilingRecord {
    /// Creates a filing waiting for documents.
    #[must_use]
    pub fn new(
        user_id: UserId,
        tax_year: i32,
        service_id: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: FilingId::new(),
            user_id,
            tax_year,
            service_id: service_id.into(),
            status: TaxFilingStatus::DocumentsPending,
            payment: None,
            summary: None,
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Key the record is stored under.
    #[must_use]
    pub fn storage_key(&self) -> String {
        storage_key(self.user_id, self.tax_year)
    }

    /// Display metadata for the current status.
    #[must_use]
    pub fn status_config(&self) -> &'static StatusConfig {
        status_config(self.status)
    }

    /// Applies an event, recording it in the history.
    ///
    /// The record is left untouched when the event is not legal.
    pub fn apply(
        &mut self,
        event: FilingEvent,
        actor: &Actor,
        note: Option<String>,
        at: DateTime<Utc>,
    ) -> Result<StatusChange, FilingError> {
        let next = FilingWorkflow::transition(self.status, event)?;

        let change = StatusChange {
            from: self.status,
            to: next,
            event,
            actor: actor.to_string(),
            note,
            at,
        };
        self.history.push(change.clone());
        self.status = next;
        self.updated_at = at;

        Ok(change)
    }
}
