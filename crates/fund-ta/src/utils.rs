//! Utility functions for fund-ta.
//!
//! Decimal rounding as the dashboard reports it.
//!
//! # Example
//!
//! ```
//! use fund_ta::utils::round_to;
//!
//! let rounded = round_to(21.123_456_f64, 4).unwrap();
//! assert!((rounded - 21.1235).abs() < 1e-10);
//! ```

use crate::error::Result;
use crate::traits::SeriesElement;

/// Rounds `value` to `decimals` places after the point, halves away from zero.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if the scale factor cannot be
/// represented in `T`.
///
/// # Example
///
/// ```
/// use fund_ta::utils::round_to;
///
/// assert_eq!(round_to(0.123_456_7_f64, 6).unwrap(), 0.123_457);
/// assert_eq!(round_to(-1.5_f64, 0).unwrap(), -2.0);
/// ```
#[inline]
pub fn round_to<T: SeriesElement>(value: T, decimals: i32) -> Result<T> {
    let factor = T::from_usize(10)?.powi(decimals);
    Ok((value * factor).round() / factor)
}

/// Counts the undefined entries at the start of a derived series.
#[cfg(test)]
pub(crate) fn count_undefined_prefix<T>(series: &[Option<T>]) -> usize {
    series.iter().take_while(|x| x.is_none()).count()
}
