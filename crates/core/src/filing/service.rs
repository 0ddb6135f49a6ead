//! Filing service: guarded status changes and payment setup over a
//! key-value store.

use chrono::Utc;
use serde_json::Value;
use taxdesk_shared::types::UserId;
use taxdesk_shared::{AdminConfig, Language};
use tracing::{info, warn};

use crate::discount::{DiscountType, validate_base_amount};
use crate::filing::error::FilingError;
use crate::filing::record::FilingRecord;
use crate::filing::store::{KeyValueStore, storage_key, user_prefix};
use crate::filing::types::{Actor, FilingEvent};
use crate::filing::workflow::FilingWorkflow;
use crate::pricing::{get_pricing_name, get_pricing_preset};
use crate::summary::TaxReturnSummary;
use crate::tax::{InvoiceBreakdown, Province, ServiceType, TaxFilingPayment};

/// Manages filing records for clients and staff.
///
/// Staff are recognised through the [`AdminConfig`] passed in; clients may
/// only approve or request changes on their own filings.
///
/// Updates are compare-and-set against the value that was read, so two
/// writers racing on the same filing cannot silently overwrite each other;
/// the loser gets [`FilingError::ConcurrentUpdate`] and may retry.
pub struct FilingService<S> {
    store: S,
    admin: AdminConfig,
}

impl<S: KeyValueStore> FilingService<S> {
    /// Creates a service over a store.
    pub fn new(store: S, admin: AdminConfig) -> Self {
        Self { store, admin }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Opens a filing for a client and tax year.
    ///
    /// # Returns
    /// * `Err(FilingError::UnknownService)` if the service is not in the catalog
    /// * `Err(FilingError::FilingAlreadyExists)` if the year is already open
    pub fn open_filing(
        &self,
        user_id: UserId,
        tax_year: i32,
        service_id: &str,
    ) -> Result<FilingRecord, FilingError> {
        if get_pricing_preset(service_id).is_none() {
            return Err(FilingError::UnknownService(service_id.to_string()));
        }

        let record = FilingRecord::new(user_id, tax_year, service_id, Utc::now());
        let key = record.storage_key();
        if !self
            .store
            .set_if_absent(&key, serde_json::to_value(&record)?)?
        {
            return Err(FilingError::FilingAlreadyExists(key));
        }

        info!(%user_id, tax_year, service_id, "Filing opened");
        Ok(record)
    }

    /// Loads a filing.
    pub fn get_filing(&self, user_id: UserId, tax_year: i32) -> Result<FilingRecord, FilingError> {
        self.load(user_id, tax_year).map(|(record, _)| record)
    }

    /// Loads every filing a client has, oldest tax year first.
    pub fn list_filings(&self, user_id: UserId) -> Result<Vec<FilingRecord>, FilingError> {
        let mut records = self
            .store
            .get_by_prefix(&user_prefix(user_id))?
            .into_iter()
            .map(|(_, value)| serde_json::from_value::<FilingRecord>(value))
            .collect::<Result<Vec<_>, _>>()?;
        records.sort_by_key(|record| record.tax_year);
        Ok(records)
    }

    /// Applies a lifecycle event.
    ///
    /// Out-of-order events are rejected before anything else is checked,
    /// and the stored record is not modified. Requesting changes needs a
    /// non-blank note.
    pub fn apply_event(
        &self,
        user_id: UserId,
        tax_year: i32,
        event: FilingEvent,
        actor: &Actor,
        note: Option<String>,
    ) -> Result<FilingRecord, FilingError> {
        let (mut record, stored) = self.load(user_id, tax_year)?;
        self.authorize_event(&record, event, actor)?;

        FilingWorkflow::transition(record.status, event).inspect_err(|err| {
            warn!(%user_id, tax_year, %event, error = %err, "Rejected filing transition");
        })?;

        let note = note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        if event == FilingEvent::ClientRequestChanges && note.is_none() {
            return Err(FilingError::ChangeReasonRequired);
        }

        let change = record.apply(event, actor, note, Utc::now())?;
        self.update(&record, &stored)?;

        info!(
            %user_id,
            tax_year,
            %event,
            from = %change.from,
            to = %change.to,
            actor = %change.actor,
            "Filing status changed"
        );
        Ok(record)
    }

    /// Prices a filing from its catalog preset.
    ///
    /// The discount applies to the preset price; tax is computed on the
    /// discounted amount for business services only. Once payment has been
    /// received the price is locked.
    pub fn attach_payment(
        &self,
        user_id: UserId,
        tax_year: i32,
        discount_type: DiscountType,
        referred_by: Option<&str>,
        province: Province,
        actor: &Actor,
    ) -> Result<FilingRecord, FilingError> {
        self.require_staff(actor, "attach a payment")?;
        let (mut record, stored) = self.load(user_id, tax_year)?;
        if record.status.is_paid() {
            return Err(FilingError::PaymentLocked(record.status));
        }

        let preset = get_pricing_preset(&record.service_id)
            .ok_or_else(|| FilingError::UnknownService(record.service_id.clone()))?;
        let base_amount = preset.amount.amount();
        validate_base_amount(base_amount)?;

        let payment = TaxFilingPayment::quote(
            base_amount,
            discount_type,
            referred_by,
            ServiceType::for_preset(preset),
            province,
        );
        let total = payment.total();
        record.payment = Some(payment);
        record.updated_at = Utc::now();
        self.update(&record, &stored)?;

        info!(%user_id, tax_year, %discount_type, %province, %total, "Payment attached");
        Ok(record)
    }

    /// Stores the prepared return's summary.
    pub fn attach_summary(
        &self,
        user_id: UserId,
        tax_year: i32,
        summary: TaxReturnSummary,
        actor: &Actor,
    ) -> Result<FilingRecord, FilingError> {
        self.require_staff(actor, "attach a return summary")?;
        summary.validate()?;

        let (mut record, stored) = self.load(user_id, tax_year)?;
        let net = summary.net_amount();
        record.summary = Some(summary);
        record.updated_at = Utc::now();
        self.update(&record, &stored)?;

        info!(%user_id, tax_year, %net, "Return summary attached");
        Ok(record)
    }

    /// Builds the invoice breakdown for a filing's payment.
    pub fn breakdown(
        &self,
        user_id: UserId,
        tax_year: i32,
        language: Language,
    ) -> Result<InvoiceBreakdown, FilingError> {
        let record = self.get_filing(user_id, tax_year)?;
        let payment = record
            .payment
            .as_ref()
            .ok_or_else(|| FilingError::PaymentNotSet(record.storage_key()))?;

        Ok(InvoiceBreakdown::from_payment(
            payment,
            get_pricing_name(&record.service_id, language),
        ))
    }

    fn authorize_event(
        &self,
        record: &FilingRecord,
        event: FilingEvent,
        actor: &Actor,
    ) -> Result<(), FilingError> {
        let allowed = match actor {
            Actor::Staff { email } => self.admin.is_admin(email),
            Actor::Client(id) => event.is_client_action() && *id == record.user_id,
        };
        if allowed {
            Ok(())
        } else {
            Err(FilingError::NotAuthorized {
                actor: actor.to_string(),
                action: event.to_string(),
            })
        }
    }

    fn require_staff(&self, actor: &Actor, action: &str) -> Result<(), FilingError> {
        match actor {
            Actor::Staff { email } if self.admin.is_admin(email) => Ok(()),
            _ => Err(FilingError::NotAuthorized {
                actor: actor.to_string(),
                action: action.to_string(),
            }),
        }
    }

    /// Reads a record together with the raw value it was decoded from.
    fn load(&self, user_id: UserId, tax_year: i32) -> Result<(FilingRecord, Value), FilingError> {
        let key = storage_key(user_id, tax_year);
        let stored = self
            .store
            .get(&key)?
            .ok_or(FilingError::FilingNotFound(key))?;
        let record = serde_json::from_value(stored.clone())?;
        Ok((record, stored))
    }

    fn update(&self, record: &FilingRecord, stored: &Value) -> Result<(), FilingError> {
        let key = record.storage_key();
        if self
            .store
            .compare_and_set(&key, stored, serde_json::to_value(record)?)?
        {
            Ok(())
        } else {
            warn!(%key, "Filing changed while it was being updated");
            Err(FilingError::ConcurrentUpdate(key))
        }
    }
}
