//! Configuration for return computation.

use crate::{PortfolioError, PortfolioResult};
use serde::{Deserialize, Serialize};

/// Days in the year used to annualize returns unless configured otherwise.
pub const DEFAULT_DAYS_PER_YEAR: u32 = 365;

/// Configuration for return computation.
///
/// Controls how realized returns are normalized to a yearly rate.
/// Deserialized configs are validated; missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReturnConfigRepr")]
pub struct ReturnConfig {
    /// Length of the year, in days, that annualized returns compound over.
    pub days_per_year: u32,
}

/// Unchecked wire form of a [`ReturnConfig`].
#[derive(Deserialize)]
struct ReturnConfigRepr {
    #[serde(default = "default_days_per_year")]
    days_per_year: u32,
}

fn default_days_per_year() -> u32 {
    DEFAULT_DAYS_PER_YEAR
}

impl TryFrom<ReturnConfigRepr> for ReturnConfig {
    type Error = PortfolioError;

    fn try_from(repr: ReturnConfigRepr) -> PortfolioResult<Self> {
        let config = Self {
            days_per_year: repr.days_per_year,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for ReturnConfig {
    fn default() -> Self {
        Self {
            days_per_year: DEFAULT_DAYS_PER_YEAR,
        }
    }
}

impl ReturnConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the annualization basis.
    #[must_use]
    pub fn with_days_per_year(mut self, days: u32) -> Self {
        self.days_per_year = days;
        self
    }

    /// Checks the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidConfig` if `days_per_year` is zero.
    pub fn validate(&self) -> PortfolioResult<()> {
        if self.days_per_year == 0 {
            return Err(PortfolioError::invalid_config(
                "days_per_year must be positive",
            ));
        }
        Ok(())
    }
}
