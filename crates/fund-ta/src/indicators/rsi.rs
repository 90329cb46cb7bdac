//! Whole-series Relative Strength Index.
//!
//! The fund list shows one RSI figure per fund. It is computed over every
//! price change in the history rather than with Wilder's smoothing:
//!
//! ```text
//! gains  = { d : d > 0 }        d = price[i+1] - price[i]
//! losses = { -d : d < 0 }
//! RS     = mean(gains) / mean(losses)
//! RSI    = 100 - 100 / (1 + RS)
//! ```
//!
//! Unchanged prices count as neither a gain nor a loss.
//!
//! # Degenerate Series
//!
//! - fewer prices than the period: `0`
//! - no gains: `0`
//! - gains but no losses: `100`
//!
//! # Example
//!
//! ```
//! use fund_ta::indicators::rsi::relative_strength;
//!
//! // gains {2, 2}, losses {1}: RS = 2, RSI = 100 - 100/3
//! let rsi = relative_strength(&[10.0_f64, 12.0, 11.0, 13.0], 3).unwrap();
//! assert!((rsi - (100.0 - 100.0 / 3.0)).abs() < 1e-10);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::kernels::dispersion::mean;
use crate::traits::{ensure_finite, validate_period, SeriesElement};

const INDICATOR: &str = "rsi";

/// Computes the whole-series RSI of a price series.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period` is zero
/// - `Error::NonFiniteResult` if a price change is NaN or infinite
#[must_use = "this returns a Result with the RSI value, which should be used"]
pub fn relative_strength<T: SeriesElement>(data: &[T], period: usize) -> Result<T> {
    validate_period(period)?;

    if data.len() < period {
        tracing::debug!(len = data.len(), period, "rsi input shorter than period, reporting 0");
        return Ok(T::zero());
    }

    let mut gains = Vec::new();
    let mut losses = Vec::new();
    for (i, pair) in data.windows(2).enumerate() {
        let delta = ensure_finite(pair[1] - pair[0], INDICATOR, i + 1)?;
        if delta > T::zero() {
            gains.push(delta);
        } else if delta < T::zero() {
            losses.push(-delta);
        }
    }

    let hundred = T::from_usize(100)?;
    let Some(avg_gain) = mean(&gains)? else {
        return Ok(T::zero());
    };
    let Some(avg_loss) = mean(&losses)? else {
        return Ok(hundred);
    };

    let rs = avg_gain / avg_loss;
    ensure_finite(hundred - hundred / (T::one() + rs), INDICATOR, data.len() - 1)
}

/// RSI configuration.
///
/// Defaults to a 14-price minimum history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    /// Creates a configuration with the default period (14).
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

    /// Computes the RSI with the configured period.
    ///
    /// # Errors
    ///
    /// See [`relative_strength`].
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<T> {
        relative_strength(data, self.period)
    }

    /// Returns the period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }
}
