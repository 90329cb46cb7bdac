//! Trailing moving average.
//!
//! The moving average smooths a price series by replacing each observation
//! with the arithmetic mean of the `period` observations ending at it.
//!
//! # Algorithm
//!
//! Each window is summed afresh, O(n·k): a value never carries rounding error
//! from prices that have already left its window.
//!
//! # Formula
//!
//! ```text
//! MA[i] = (P[i-k+1] + ... + P[i]) / k      for i >= k-1
//! MA[i] = undefined                         for i <  k-1
//! ```
//!
//! # Short Series
//!
//! A series shorter than the period is not an error: every entry is
//! undefined. An empty series yields an empty output.
//!
//! # Example
//!
//! ```
//! use fund_ta::indicators::moving_average::moving_average;
//!
//! let result = moving_average(&[1.0_f64, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
//! assert_eq!(result, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::traits::{ensure_finite, validate_period, SeriesElement};

const INDICATOR: &str = "moving_average";

/// Returns the number of undefined entries at the start of the output.
///
/// ```
/// use fund_ta::indicators::moving_average::moving_average_lookback;
///
/// assert_eq!(moving_average_lookback(20), 19);
/// assert_eq!(moving_average_lookback(0), 0);
/// ```
#[inline]
#[must_use]
pub const fn moving_average_lookback(period: usize) -> usize {
    if period == 0 {
        0
    } else {
        period - 1
    }
}

/// Returns the minimum input length that yields at least one defined value.
#[inline]
#[must_use]
pub const fn moving_average_min_len(period: usize) -> usize {
    period
}

/// Computes the trailing moving average of a price series.
///
/// The output has the same length as `data`. The first `period - 1` entries
/// are `None`; every later entry holds the mean of the trailing window.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period` is zero
/// - `Error::NonFiniteResult` if the input contains NaN or infinite values
///
/// # Example
///
/// ```
/// use fund_ta::indicators::moving_average::moving_average;
///
/// // Period longer than the data: all undefined, not an error
/// let short = moving_average(&[10.0_f64, 11.0], 5).unwrap();
/// assert_eq!(short, vec![None, None]);
///
/// // Empty input: empty output
/// let empty: Vec<f64> = vec![];
/// assert!(moving_average(&empty, 5).unwrap().is_empty());
/// ```
#[must_use = "this returns a Result with the moving average, which should be used"]
pub fn moving_average<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<Option<T>>> {
    validate_period(period)?;

    let mut result = vec![None; data.len()];
    if data.len() < period {
        if !data.is_empty() {
            tracing::debug!(
                len = data.len(),
                period,
                "moving average warm-up covers the whole series"
            );
        }
        return Ok(result);
    }

    let period_t = T::from_usize(period)?;

    for i in moving_average_lookback(period)..data.len() {
        let sum = data[i + 1 - period..=i]
            .iter()
            .fold(T::zero(), |acc, &x| acc + x);
        result[i] = Some(ensure_finite(sum / period_t, INDICATOR, i)?);
    }

    Ok(result)
}

/// Moving average configuration.
///
/// Defaults to the 20-period average used by the support/resistance estimate.
///
/// ```
/// use fund_ta::indicators::moving_average::MovingAverage;
///
/// let prices: Vec<f64> = (1..=30).map(f64::from).collect();
/// let ma5 = MovingAverage::new().period(5).compute(&prices).unwrap();
/// assert_eq!(ma5[4], Some(3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovingAverage {
    period: usize,
}

impl Default for MovingAverage {
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl MovingAverage {
    /// Creates a configuration with the default period (20).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window length.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Computes the moving average with the configured period.
    ///
    /// # Errors
    ///
    /// See [`moving_average`].
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Vec<Option<T>>> {
        moving_average(data, self.period)
    }

    /// Returns the period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        moving_average_lookback(self.period)
    }
}
