//! # Folio Core
//!
//! Core types and errors shared by the Folio portfolio valuation crates.
//!
//! - **Types**: [`Timestamp`], the point in time used to key price tables
//! - **Errors**: [`CoreError`] and the [`CoreResult`] alias
//!
//! ## Example
//!
//! ```rust
//! use folio_core::prelude::*;
//!
//! let start = Timestamp::from_ymd(2020, 1, 1).unwrap();
//! let end = Timestamp::from_ymd(2021, 1, 1).unwrap();
//! assert_eq!(start.whole_days_between(&end), 366);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::Timestamp;
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::Timestamp;
