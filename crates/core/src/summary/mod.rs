//! Tax return summaries (refund / balance owing preview).

pub mod error;
pub mod types;

pub use error::SummaryError;
pub use types::{MIN_TAX_YEAR, ReturnOutcome, TaxReturnSummary};
