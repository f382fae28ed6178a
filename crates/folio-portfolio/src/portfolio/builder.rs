//! Portfolio builder for fluent construction.

use crate::types::{Holding, ReturnConfig};
use crate::{Portfolio, PortfolioResult};
use std::collections::BTreeMap;

/// Builder for constructing a [`Portfolio`].
///
/// Holdings added later replace earlier ones with the same symbol, matching
/// [`Portfolio::add_holding`].
///
/// # Example
///
/// ```rust
/// use folio_portfolio::prelude::*;
///
/// let start = Timestamp::from_ymd(2020, 1, 1).unwrap();
/// let aaa = Holding::new("AAA", 10).with_price(start, 100.0).unwrap();
///
/// let portfolio = PortfolioBuilder::new()
///     .name("Growth")
///     .add_holding(aaa)
///     .build()
///     .unwrap();
///
/// assert_eq!(portfolio.get_value(start), 1000.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortfolioBuilder {
    name: Option<String>,
    return_config: ReturnConfig,
    holdings: Vec<Holding>,
}

impl PortfolioBuilder {
    /// Creates a new portfolio builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the portfolio name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the return configuration.
    #[must_use]
    pub fn return_config(mut self, config: ReturnConfig) -> Self {
        self.return_config = config;
        self
    }

    /// Adds a holding to the portfolio.
    #[must_use]
    pub fn add_holding(mut self, holding: Holding) -> Self {
        self.holdings.push(holding);
        self
    }

    /// Adds multiple holdings to the portfolio.
    #[must_use]
    pub fn add_holdings(mut self, holdings: impl IntoIterator<Item = Holding>) -> Self {
        self.holdings.extend(holdings);
        self
    }

    /// Builds the portfolio.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidConfig` if the return configuration
    /// fails validation.
    pub fn build(self) -> PortfolioResult<Portfolio> {
        self.return_config.validate()?;

        let mut holdings = BTreeMap::new();
        for holding in self.holdings {
            holdings.insert(holding.symbol().to_string(), holding);
        }

        Ok(Portfolio::from_parts(
            self.name,
            self.return_config,
            holdings,
        ))
    }
}
