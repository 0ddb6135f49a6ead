//! Tax filing lifecycle.
//!
//! A filing moves through a fixed sequence of statuses. Every change is
//! driven by a [`FilingEvent`], and each event is only accepted from one
//! status, so clients and staff cannot skip ahead.
//!
//! ```text
//! documents-pending -> documents-received -> in-processing -> ready-for-review
//! ready-for-review -> rejected -> ready-for-review
//! ready-for-review -> awaiting-payment -> payment-received
//!     -> filing-submitted -> completed
//! ```
//!
//! # Modules
//!
//! - `status` - Statuses and their display configuration
//! - `types` - Events, actors and history entries
//! - `workflow` - Guarded transitions
//! - `record` - The persisted per-year filing
//! - `store` - Key-value storage seam
//! - `service` - Authorization and persistence around the workflow

pub mod error;
pub mod record;
pub mod service;
pub mod status;
pub mod store;
pub mod types;
pub mod workflow;

#[cfg(test)]
mod workflow_props;

pub use error::FilingError;
pub use record::FilingRecord;
pub use service::FilingService;
pub use status::{
    STATUS_CONFIGS, StatusColor, StatusConfig, StatusIcon, TaxFilingStatus, status_config,
};
pub use store::{InMemoryStore, KeyValueStore, storage_key, user_prefix};
pub use types::{Actor, FilingEvent, StatusChange};
pub use workflow::FilingWorkflow;
