//! Support and resistance estimate.
//!
//! A composite heuristic that blends three independent estimates of the
//! price floor and ceiling and reports their average:
//!
//! 1. **Recent range**: the 23.6% retracement inside the high/low range of the
//!    last 30 prices
//! 2. **Moving average**: the latest 20-period moving average, 2% below
//!    (support) or above (resistance)
//! 3. **Percentage offset**: the latest price, 5% below or above
//!
//! # Formula
//!
//! ```text
//! range      = max(W) - min(W)            W = last min(30, n) prices
//! support    = (min(W) + 0.236*range + 0.98*MA20 + 0.95*last) / 3
//! resistance = (max(W) - 0.236*range + 1.02*MA20 + 1.05*last) / 3
//! ```
//!
//! Both levels are rounded to 4 decimal places.
//!
//! # Short Series
//!
//! - Fewer than 10 prices: `support = 0.9*last`, `resistance = 1.1*last`
//!   (unrounded), with `last = 0` for an empty series.
//! - 10 to 19 prices: the 20-period moving average is still undefined and
//!   enters the average as zero, which pulls both levels down by roughly a
//!   third. This matches the numbers the dashboard has always shown.
//!
//! # Example
//!
//! ```
//! use fund_ta::indicators::support_resistance::support_resistance;
//!
//! let levels = support_resistance(&[100.0_f64]).unwrap();
//! assert!((levels.support - 90.0).abs() < 1e-9);
//! assert!((levels.resistance - 110.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indicators::moving_average::moving_average;
use crate::traits::{ensure_finite, SeriesElement};
use crate::utils::round_to;

const INDICATOR: &str = "support_resistance";

/// Below this many prices the percentage fallback is used.
pub const SUPPORT_RESISTANCE_MIN_LEN: usize = 10;

/// Number of trailing prices that define the recent high/low range.
pub const RECENT_WINDOW: usize = 30;

/// Period of the moving average blended into the estimate.
pub const MA_PERIOD: usize = 20;

const RETRACEMENT: f64 = 0.236;
const REPORT_DECIMALS: i32 = 4;

/// Estimated price floor and ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportResistance<T> {
    /// Estimated price floor.
    pub support: T,
    /// Estimated price ceiling.
    pub resistance: T,
}

/// Estimates support and resistance levels for a price series.
///
/// # Errors
///
/// Returns `Error::NonFiniteResult` if the input contains NaN or infinite
/// values that reach the estimate.
#[must_use = "this returns a Result with the support/resistance levels, which should be used"]
pub fn support_resistance<T: SeriesElement>(data: &[T]) -> Result<SupportResistance<T>> {
    let n = data.len();
    let last_index = n.saturating_sub(1);
    let last = data.last().copied().unwrap_or_else(T::zero);

    if n < SUPPORT_RESISTANCE_MIN_LEN {
        tracing::debug!(len = n, "support/resistance falling back to percentage bands");
        return Ok(SupportResistance {
            support: ensure_finite(last * T::from_f64(0.9)?, INDICATOR, last_index)?,
            resistance: ensure_finite(last * T::from_f64(1.1)?, INDICATOR, last_index)?,
        });
    }

    let start = n.saturating_sub(RECENT_WINDOW);
    let mut highest = T::neg_infinity();
    let mut lowest = T::infinity();
    for (offset, &price) in data[start..].iter().enumerate() {
        let price = ensure_finite(price, INDICATOR, start + offset)?;
        highest = highest.max(price);
        lowest = lowest.min(price);
    }
    let range = highest - lowest;

    let ma20 = match moving_average(data, MA_PERIOD)?.last().copied().flatten() {
        Some(value) => value,
        None => {
            tracing::warn!(
                len = n,
                period = MA_PERIOD,
                "20-period moving average undefined, blending it in as zero"
            );
            T::zero()
        }
    };

    let retracement = T::from_f64(RETRACEMENT)?;
    let three = T::from_usize(3)?;

    let support = (lowest + range * retracement
        + ma20 * T::from_f64(0.98)?
        + last * T::from_f64(0.95)?)
        / three;
    let resistance = (highest - range * retracement
        + ma20 * T::from_f64(1.02)?
        + last * T::from_f64(1.05)?)
        / three;

    Ok(SupportResistance {
        support: ensure_finite(round_to(support, REPORT_DECIMALS)?, INDICATOR, last_index)?,
        resistance: ensure_finite(round_to(resistance, REPORT_DECIMALS)?, INDICATOR, last_index)?,
    })
}
