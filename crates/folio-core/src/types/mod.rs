//! Domain types for portfolio valuation.
//!
//! - [`Timestamp`]: point in time used as a price table key

mod timestamp;

pub use timestamp::Timestamp;
