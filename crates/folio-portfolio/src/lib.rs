//! # Folio Portfolio
//!
//! Portfolio valuation and profit analytics over sparse price tables.
//!
//! A [`Holding`] is a quantity of one instrument plus the prices recorded
//! for it at particular [`Timestamp`]s. A [`Portfolio`] keys holdings by
//! symbol and values them together.
//!
//! ## Design Philosophy
//!
//! - **In-memory only**: no price feeds, persistence, or I/O
//! - **Missing data is zero**: a holding with no price at a timestamp
//!   contributes nothing to the valuation there, and that is not an error
//! - **Explicit failures**: an inverted window or a zero start valuation is
//!   reported through [`PortfolioError`] rather than producing `NaN`
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_portfolio::prelude::*;
//!
//! let start = Timestamp::from_ymd(2020, 1, 1).unwrap();
//! let end = Timestamp::from_ymd(2021, 1, 1).unwrap();
//!
//! let mut aaa = Holding::new("AAA", 10);
//! aaa.insert_price(start, 100.0).unwrap();
//! aaa.insert_price(end, 150.0).unwrap();
//!
//! let mut portfolio = Portfolio::new();
//! portfolio.add_holding(aaa);
//!
//! assert_eq!(portfolio.get_value(start), 1000.0);
//! assert_eq!(portfolio.profit(start, end, false).unwrap(), 500.0);
//!
//! // 50% over 366 days, compounded to a 365-day year
//! let annual = portfolio.profit(start, end, true).unwrap();
//! assert!((annual - 0.4986).abs() < 1e-4);
//! ```
//!
//! ## Module Overview
//!
//! - [`portfolio`] - Portfolio and builder types
//! - [`returns`] - Annualization arithmetic
//! - [`types`] - Holding and configuration types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

// Module declarations
pub mod error;
pub mod portfolio;
pub mod returns;
pub mod types;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use portfolio::{Portfolio, PortfolioBuilder};
pub use returns::annualize;
pub use types::{Holding, ReturnConfig, DEFAULT_DAYS_PER_YEAR};

/// Prelude module for convenient imports.
///
/// ```rust
/// use folio_portfolio::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{PortfolioError, PortfolioResult};

    // Holding and config types
    pub use crate::types::{Holding, ReturnConfig};

    // Portfolio
    pub use crate::portfolio::{Portfolio, PortfolioBuilder};

    // Return math
    pub use crate::returns::annualize;

    // Re-export commonly used types from dependencies
    pub use folio_core::types::Timestamp;
}
