//! Error types for portfolio valuation.
//!
//! This module defines the error types used throughout the portfolio crate.

use folio_core::{CoreError, Timestamp};
use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone)]
pub enum PortfolioError {
    /// The start of a return window is not strictly before its end.
    #[error("Invalid range: start {start} must be strictly before end {end}")]
    InvalidRange {
        /// Start of the requested window.
        start: Timestamp,
        /// End of the requested window.
        end: Timestamp,
    },

    /// The portfolio is worth zero at the start of the window, so no
    /// relative return can be derived.
    #[error("Degenerate valuation: portfolio value is zero at {date}")]
    DegenerateValuation {
        /// Timestamp of the zero valuation.
        date: Timestamp,
    },

    /// A price is negative or not a finite number.
    #[error("Invalid price for '{symbol}' at {date}: {price}")]
    InvalidPrice {
        /// Symbol of the holding.
        symbol: String,
        /// Timestamp the price was recorded for.
        date: Timestamp,
        /// The rejected price.
        price: f64,
    },

    /// Invalid holding data.
    #[error("Invalid holding '{symbol}': {reason}")]
    InvalidHolding {
        /// Symbol of the holding.
        symbol: String,
        /// The reason the holding is invalid.
        reason: String,
    },

    /// Invalid return configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// The reason the configuration is invalid.
        reason: String,
    },

    /// Error raised by a core type.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PortfolioError {
    /// Create an invalid range error.
    #[must_use]
    pub fn invalid_range(start: Timestamp, end: Timestamp) -> Self {
        Self::InvalidRange { start, end }
    }

    /// Create a degenerate valuation error.
    #[must_use]
    pub fn degenerate_valuation(date: Timestamp) -> Self {
        Self::DegenerateValuation { date }
    }

    /// Create an invalid price error.
    #[must_use]
    pub fn invalid_price(symbol: impl Into<String>, date: Timestamp, price: f64) -> Self {
        Self::InvalidPrice {
            symbol: symbol.into(),
            date,
            price,
        }
    }

    /// Create an invalid holding error.
    #[must_use]
    pub fn invalid_holding(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHolding {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
