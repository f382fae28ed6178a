//! Holding representation with a sparse price table.

use crate::{PortfolioError, PortfolioResult};
use folio_core::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A position in a single tradable instrument.
///
/// The quantity is fixed when the holding is created. Prices are recorded
/// per [`Timestamp`] by whatever feeds the holding; a timestamp with no
/// recorded price is simply unknown and values at zero.
///
/// Deserialized prices pass the same checks as [`Holding::extend_prices`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HoldingRepr")]
pub struct Holding {
    symbol: String,
    quantity: u64,
    prices: BTreeMap<Timestamp, f64>,
}

/// Unchecked wire form of a [`Holding`].
#[derive(Deserialize)]
struct HoldingRepr {
    symbol: String,
    quantity: u64,
    #[serde(default)]
    prices: BTreeMap<Timestamp, f64>,
}

impl TryFrom<HoldingRepr> for Holding {
    type Error = PortfolioError;

    fn try_from(repr: HoldingRepr) -> PortfolioResult<Self> {
        let mut holding = Holding::new(repr.symbol, repr.quantity);
        holding.extend_prices(repr.prices)?;
        Ok(holding)
    }
}

impl Holding {
    /// Creates a holding with an empty price table.
    #[must_use]
    pub fn new(symbol: impl Into<String>, quantity: u64) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            prices: BTreeMap::new(),
        }
    }

    /// Returns the instrument symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the quantity held.
    #[must_use]
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Returns the price recorded for exactly `date`, or `0.0` if none is.
    ///
    /// There is no interpolation and no fallback to the nearest recorded
    /// timestamp.
    #[must_use]
    pub fn price(&self, date: Timestamp) -> f64 {
        self.prices.get(&date).copied().unwrap_or(0.0)
    }

    /// Returns true if a price is recorded for exactly `date`.
    #[must_use]
    pub fn has_price(&self, date: Timestamp) -> bool {
        self.prices.contains_key(&date)
    }

    /// Value of the position at `date`: price × quantity.
    #[must_use]
    pub fn market_value(&self, date: Timestamp) -> f64 {
        self.price(date) * self.quantity as f64
    }

    /// Records the price at `date`, returning the price it replaced.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidPrice` if the price is negative or
    /// not finite. The table is left unchanged in that case.
    pub fn insert_price(&mut self, date: Timestamp, price: f64) -> PortfolioResult<Option<f64>> {
        self.check_price(date, price)?;
        Ok(self.prices.insert(date, price))
    }

    /// Builder-style variant of [`Holding::insert_price`].
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidPrice` for a negative or non-finite price.
    pub fn with_price(mut self, date: Timestamp, price: f64) -> PortfolioResult<Self> {
        self.insert_price(date, price)?;
        Ok(self)
    }

    /// Records a batch of prices.
    ///
    /// Every entry is validated before any is inserted, so a rejected batch
    /// leaves the table untouched.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidPrice` for the first bad entry.
    pub fn extend_prices(
        &mut self,
        prices: impl IntoIterator<Item = (Timestamp, f64)>,
    ) -> PortfolioResult<()> {
        let batch: Vec<(Timestamp, f64)> = prices.into_iter().collect();
        for &(date, price) in &batch {
            self.check_price(date, price)?;
        }
        self.prices.extend(batch);
        Ok(())
    }

    /// Returns the number of recorded prices.
    #[must_use]
    pub fn price_count(&self) -> usize {
        self.prices.len()
    }

    /// Iterates recorded prices in timestamp order.
    pub fn prices(&self) -> impl Iterator<Item = (Timestamp, f64)> + '_ {
        self.prices.iter().map(|(date, price)| (*date, *price))
    }

    /// Earliest timestamp with a recorded price.
    #[must_use]
    pub fn first_priced(&self) -> Option<Timestamp> {
        self.prices.keys().next().copied()
    }

    /// Latest timestamp with a recorded price.
    #[must_use]
    pub fn last_priced(&self) -> Option<Timestamp> {
        self.prices.keys().next_back().copied()
    }

    fn check_price(&self, date: Timestamp, price: f64) -> PortfolioResult<()> {
        if price.is_finite() && price >= 0.0 {
            Ok(())
        } else {
            Err(PortfolioError::invalid_price(&self.symbol, date, price))
        }
    }
}
