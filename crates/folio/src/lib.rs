//! # Folio
//!
//! Portfolio valuation and profit between two points in time.
//!
//! This crate re-exports the public API of the Folio workspace:
//!
//! - [`folio_core`]: the [`Timestamp`] type and core errors
//! - [`folio_portfolio`]: holdings, portfolios, and return computation
//!
//! ```rust
//! use folio::prelude::*;
//!
//! let day = Timestamp::from_ymd(2024, 3, 1).unwrap();
//! let portfolio: Portfolio = [Holding::new("AAA", 4).with_price(day, 25.0).unwrap()]
//!     .into_iter()
//!     .collect();
//! assert_eq!(portfolio.get_value(day), 100.0);
//! ```

#![warn(missing_docs)]

pub use folio_core;
pub use folio_portfolio;

pub use folio_core::{CoreError, CoreResult, Timestamp};
pub use folio_portfolio::{
    annualize, Holding, Portfolio, PortfolioBuilder, PortfolioError, PortfolioResult,
    ReturnConfig,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use folio_core::prelude::*;
    pub use folio_portfolio::prelude::*;
}
