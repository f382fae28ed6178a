//! Core types for portfolio valuation.
//!
//! - [`Holding`]: a position with a sparse price table
//! - [`ReturnConfig`]: annualization settings

mod config;
mod holding;

pub use config::{ReturnConfig, DEFAULT_DAYS_PER_YEAR};
pub use holding::Holding;
