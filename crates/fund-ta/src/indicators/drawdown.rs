//! Distance of the latest price from the series high.

use crate::error::{Error, Result};
use crate::traits::{ensure_finite, SeriesElement};
use crate::utils::round_to;

const INDICATOR: &str = "distance_from_high";
const REPORT_DECIMALS: i32 = 2;

/// Percentage by which the latest price sits below the highest price,
/// rounded to 2 decimals.
///
/// ```text
/// distance = (last - max) / max × 100
/// ```
///
/// The result is `0` when the latest price is the high and negative otherwise
/// (for positive prices).
///
/// # Errors
///
/// - `Error::EmptyInput` if `data` is empty
/// - `Error::NonFiniteResult` if the high is zero or the input holds NaN/infinity
///
/// # Example
///
/// ```
/// use fund_ta::indicators::drawdown::distance_from_high;
///
/// let distance = distance_from_high(&[1.0_f64, 1.25, 1.0]).unwrap();
/// assert!((distance + 20.0).abs() < 1e-10);
/// ```
pub fn distance_from_high<T: SeriesElement>(data: &[T]) -> Result<T> {
    let Some(&last) = data.last() else {
        return Err(Error::EmptyInput);
    };

    let mut high = T::neg_infinity();
    for (i, &price) in data.iter().enumerate() {
        high = high.max(ensure_finite(price, INDICATOR, i)?);
    }

    let distance = (last - high) / high * T::from_usize(100)?;
    ensure_finite(round_to(distance, REPORT_DECIMALS)?, INDICATOR, data.len() - 1)
}
