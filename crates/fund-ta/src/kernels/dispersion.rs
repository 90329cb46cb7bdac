//! Mean and population standard deviation over a slice.
//!
//! Both functions use the population convention (divide by `n`, not `n-1`)
//! and the two-pass form: deviations are taken around a mean that is
//! computed first, never the sum-of-squares shortcut.
//!
//! # Example
//!
//! ```
//! use fund_ta::kernels::dispersion::{mean, population_std_dev};
//!
//! let window = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! let centre = mean(&window).unwrap().unwrap();
//! assert!((centre - 5.0).abs() < 1e-12);
//! assert!((population_std_dev(&window, centre).unwrap() - 2.0).abs() < 1e-12);
//! ```

use crate::error::Result;
use crate::traits::SeriesElement;

/// Arithmetic mean of `values`, or `None` for an empty slice.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if the length cannot be represented in `T`.
#[inline]
pub fn mean<T: SeriesElement>(values: &[T]) -> Result<Option<T>> {
    if values.is_empty() {
        return Ok(None);
    }
    let sum = values.iter().fold(T::zero(), |acc, &x| acc + x);
    Ok(Some(sum / T::from_usize(values.len())?))
}

/// Population standard deviation of `values` around `centre`.
///
/// `centre` is normally the mean of `values`; callers that already hold the
/// mean (a moving average, for instance) pass it in instead of recomputing.
/// An empty slice has zero dispersion.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if the length cannot be represented in `T`.
#[inline]
pub fn population_std_dev<T: SeriesElement>(values: &[T], centre: T) -> Result<T> {
    if values.is_empty() {
        return Ok(T::zero());
    }
    let sum_sq = values.iter().fold(T::zero(), |acc, &x| {
        let diff = x - centre;
        acc + diff * diff
    });
    Ok((sum_sq / T::from_usize(values.len())?).sqrt())
}
