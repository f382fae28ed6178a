//! Portfolio struct and valuation methods.

use crate::returns::annualize;
use crate::types::{Holding, ReturnConfig};
use crate::{PortfolioError, PortfolioResult};
use folio_core::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

/// A collection of holdings valued together.
///
/// Holdings are keyed by symbol; there is at most one holding per symbol.
/// The map is ordered so valuations sum in the same order on every call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PortfolioRepr")]
pub struct Portfolio {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    return_config: ReturnConfig,
    holdings: BTreeMap<String, Holding>,
}

/// Unchecked wire form of a [`Portfolio`].
#[derive(Deserialize)]
struct PortfolioRepr {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    return_config: ReturnConfig,
    #[serde(default)]
    holdings: BTreeMap<String, Holding>,
}

impl TryFrom<PortfolioRepr> for Portfolio {
    type Error = PortfolioError;

    fn try_from(repr: PortfolioRepr) -> PortfolioResult<Self> {
        let misfiled = repr
            .holdings
            .iter()
            .find(|(key, holding)| key.as_str() != holding.symbol());
        if let Some((key, holding)) = misfiled {
            return Err(PortfolioError::invalid_holding(
                holding.symbol(),
                format!("stored under key '{key}'"),
            ));
        }
        Ok(Self::from_parts(repr.name, repr.return_config, repr.holdings))
    }
}

impl Portfolio {
    /// Creates an empty, unnamed portfolio.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty portfolio with a display name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Creates a new portfolio builder.
    #[must_use]
    pub fn builder() -> super::PortfolioBuilder {
        super::PortfolioBuilder::new()
    }

    pub(crate) fn from_parts(
        name: Option<String>,
        return_config: ReturnConfig,
        holdings: BTreeMap<String, Holding>,
    ) -> Self {
        Self {
            name,
            return_config,
            holdings,
        }
    }

    /// Returns the display name, if set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the return configuration.
    #[must_use]
    pub fn return_config(&self) -> &ReturnConfig {
        &self.return_config
    }

    /// Replaces the return configuration.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidConfig` if the config fails validation.
    pub fn set_return_config(&mut self, config: ReturnConfig) -> PortfolioResult<()> {
        config.validate()?;
        self.return_config = config;
        Ok(())
    }

    /// Adds a holding, replacing any holding with the same symbol.
    ///
    /// Returns the replaced holding, if there was one.
    pub fn add_holding(&mut self, holding: Holding) -> Option<Holding> {
        let replaced = self.holdings.insert(holding.symbol().to_string(), holding);
        if let Some(old) = &replaced {
            debug!(symbol = old.symbol(), "Replaced existing holding");
        }
        replaced
    }

    /// Removes and returns the holding for `symbol`.
    pub fn remove_holding(&mut self, symbol: &str) -> Option<Holding> {
        self.holdings.remove(symbol)
    }

    /// Returns the holding for `symbol`.
    #[must_use]
    pub fn holding(&self, symbol: &str) -> Option<&Holding> {
        self.holdings.get(symbol)
    }

    /// Returns the holding for `symbol` mutably, for price ingestion.
    pub fn holding_mut(&mut self, symbol: &str) -> Option<&mut Holding> {
        self.holdings.get_mut(symbol)
    }

    /// Returns true if a holding exists for `symbol`.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.holdings.contains_key(symbol)
    }

    /// Iterates holdings in symbol order.
    pub fn holdings(&self) -> impl Iterator<Item = &Holding> {
        self.holdings.values()
    }

    /// Iterates symbols in order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.holdings.keys().map(String::as_str)
    }

    /// Returns the number of holdings.
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    /// Returns true if the portfolio has no holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Value of the portfolio at `date`.
    ///
    /// Sum over holdings of price × quantity. Holdings without a price at
    /// `date` contribute nothing; an empty portfolio is worth `0.0`.
    #[must_use]
    pub fn get_value(&self, date: Timestamp) -> f64 {
        let value: f64 = self.holdings.values().map(|h| h.market_value(date)).sum();
        trace!(%date, value, holdings = self.holdings.len(), "Valued portfolio");
        value
    }

    /// Per-holding contributions to [`Portfolio::get_value`], in symbol order.
    #[must_use]
    pub fn value_breakdown(&self, date: Timestamp) -> Vec<(&str, f64)> {
        self.holdings
            .iter()
            .map(|(symbol, h)| (symbol.as_str(), h.market_value(date)))
            .collect()
    }

    /// Profit between two timestamps.
    ///
    /// With `annualized == false` this is the raw profit
    /// `get_value(end) - get_value(start)`. Otherwise it is the realized
    /// return compounded to a yearly rate (see [`crate::annualize`]);
    /// windows shorter than one whole day annualize to `0.0`.
    ///
    /// # Errors
    ///
    /// - `PortfolioError::InvalidRange` if `start >= end`
    /// - `PortfolioError::DegenerateValuation` if `annualized` is set and the
    ///   portfolio is worth zero at `start`
    pub fn profit(&self, start: Timestamp, end: Timestamp, annualized: bool) -> PortfolioResult<f64> {
        Self::check_range(start, end)?;

        let start_value = self.get_value(start);
        let end_value = self.get_value(end);
        let raw = end_value - start_value;

        if !annualized {
            debug!(%start, %end, start_value, end_value, profit = raw, "Computed raw profit");
            return Ok(raw);
        }

        let total_return = Self::relative(raw, start_value, start)?;
        let days = start.whole_days_between(&end);
        if days == 0 {
            warn!(%start, %end, "Window shorter than one whole day, annualized return is zero");
        }
        let result = annualize(total_return, days, self.return_config.days_per_year);
        debug!(
            %start,
            %end,
            start_value,
            end_value,
            total_return,
            days,
            annualized_return = result,
            "Computed annualized return"
        );
        Ok(result)
    }

    /// Realized return between two timestamps: raw profit over the start value.
    ///
    /// # Errors
    ///
    /// - `PortfolioError::InvalidRange` if `start >= end`
    /// - `PortfolioError::DegenerateValuation` if the start value is zero
    pub fn total_return(&self, start: Timestamp, end: Timestamp) -> PortfolioResult<f64> {
        Self::check_range(start, end)?;
        let start_value = self.get_value(start);
        Self::relative(self.get_value(end) - start_value, start_value, start)
    }

    /// Shorthand for `profit(start, end, true)`.
    ///
    /// # Errors
    ///
    /// Same as [`Portfolio::profit`].
    pub fn annualized_return(&self, start: Timestamp, end: Timestamp) -> PortfolioResult<f64> {
        self.profit(start, end, true)
    }

    fn check_range(start: Timestamp, end: Timestamp) -> PortfolioResult<()> {
        if start >= end {
            return Err(PortfolioError::invalid_range(start, end));
        }
        Ok(())
    }

    fn relative(raw: f64, start_value: f64, start: Timestamp) -> PortfolioResult<f64> {
        if start_value == 0.0 {
            warn!(%start, "Portfolio is worth zero at start of window");
            return Err(PortfolioError::degenerate_valuation(start));
        }
        Ok(raw / start_value)
    }
}

impl Extend<Holding> for Portfolio {
    fn extend<I: IntoIterator<Item = Holding>>(&mut self, iter: I) {
        for holding in iter {
            self.add_holding(holding);
        }
    }
}

impl FromIterator<Holding> for Portfolio {
    fn from_iter<I: IntoIterator<Item = Holding>>(iter: I) -> Self {
        let mut portfolio = Self::new();
        portfolio.extend(iter);
        portfolio
    }
}
