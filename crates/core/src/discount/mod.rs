//! Percentage discounts for returning and referred clients.

pub mod calculator;
pub mod error;
pub mod types;

#[cfg(test)]
mod calculator_props;

pub use calculator::{calculate_discount, calculate_final_amount, validate_base_amount};
pub use error::DiscountError;
pub use types::{DiscountInfo, DiscountType};
