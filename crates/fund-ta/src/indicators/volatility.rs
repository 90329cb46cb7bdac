//! Annualized volatility of simple returns.
//!
//! ```text
//! r[i]       = (price[i+1] - price[i]) / price[i]
//! volatility = std(r) × sqrt(periods_per_year)
//! ```
//!
//! `std` is the population standard deviation over every return in the
//! series. Daily fund prices use 252 trading days per year.
//!
//! A series shorter than the period reports `0`.
//!
//! # Example
//!
//! ```
//! use fund_ta::indicators::volatility::annualized_volatility;
//!
//! // Returns +10% and -10%: population std 0.1
//! let vol = annualized_volatility(&[100.0_f64, 110.0, 99.0], 3, 252).unwrap();
//! assert!((vol - 0.1 * 252.0_f64.sqrt()).abs() < 1e-10);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::kernels::dispersion::{mean, population_std_dev};
use crate::traits::{ensure_finite, validate_period, SeriesElement};

const INDICATOR: &str = "volatility";

/// Trading days in a year, the usual annualization factor for daily prices.
pub const TRADING_DAYS_PER_YEAR: usize = 252;

/// Computes the annualized volatility of a price series.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period` or `periods_per_year` is zero
/// - `Error::NonFiniteResult` if a return is not finite (for example after a
///   zero price)
#[must_use = "this returns a Result with the volatility, which should be used"]
pub fn annualized_volatility<T: SeriesElement>(
    data: &[T],
    period: usize,
    periods_per_year: usize,
) -> Result<T> {
    validate_period(period)?;
    if periods_per_year == 0 {
        return Err(Error::InvalidPeriod {
            period: periods_per_year,
            reason: "periods per year must be at least 1",
        });
    }

    if data.len() < period {
        tracing::debug!(
            len = data.len(),
            period,
            "volatility input shorter than period, reporting 0"
        );
        return Ok(T::zero());
    }

    let mut returns = Vec::with_capacity(data.len().saturating_sub(1));
    for (i, pair) in data.windows(2).enumerate() {
        returns.push(ensure_finite((pair[1] - pair[0]) / pair[0], INDICATOR, i + 1)?);
    }

    let Some(centre) = mean(&returns)? else {
        return Ok(T::zero());
    };
    let annualization = T::from_usize(periods_per_year)?.sqrt();
    ensure_finite(
        population_std_dev(&returns, centre)? * annualization,
        INDICATOR,
        data.len() - 1,
    )
}

/// Volatility configuration.
///
/// Defaults to a 20-price minimum history and 252 periods per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Volatility {
    period: usize,
    periods_per_year: usize,
}

impl Default for Volatility {
    fn default() -> Self {
        Self {
            period: 20,
            periods_per_year: TRADING_DAYS_PER_YEAR,
        }
    }
}

impl Volatility {
    /// Creates a configuration with the defaults (20, 252).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum number of prices required.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Sets the annualization factor.
    #[must_use]
    pub const fn periods_per_year(mut self, periods_per_year: usize) -> Self {
        self.periods_per_year = periods_per_year;
        self
    }

    /// Computes the volatility with the configured parameters.
    ///
    /// # Errors
    ///
    /// See [`annualized_volatility`].
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<T> {
        annualized_volatility(data, self.period, self.periods_per_year)
    }

    /// Returns the period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the annualization factor.
    #[must_use]
    pub const fn get_periods_per_year(&self) -> usize {
        self.periods_per_year
    }
}
