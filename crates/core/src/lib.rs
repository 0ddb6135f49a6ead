//! Core business logic for Taxdesk.
//!
//! This crate has no web or database dependencies. Pricing, discounts,
//! sales tax and the filing lifecycle are plain functions and types;
//! storage is reached through the [`filing::KeyValueStore`] trait.
//!
//! # Modules
//!
//! - `pricing` - Service catalog
//! - `discount` - Returning-customer and referral discounts
//! - `tax` - GST/PST/QST/HST computation and invoice breakdown
//! - `filing` - Filing statuses, transitions and persistence
//! - `summary` - Refund / balance owing summary of a prepared return

pub mod discount;
pub mod filing;
pub mod pricing;
pub mod summary;
pub mod tax;
