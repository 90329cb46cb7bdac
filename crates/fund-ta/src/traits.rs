//! Core traits and parameter validation for fund-ta.
//!
//! The primary trait is [`SeriesElement`], which abstracts over `f32` and
//! `f64` price data. The free functions in this module validate the
//! parameters every indicator shares (period, multiplier) and check that
//! computed values are reportable.
//!
//! # Example
//!
//! ```
//! use fund_ta::traits::{validate_period, SeriesElement};
//!
//! fn window_mean<T: SeriesElement>(data: &[T], period: usize) -> fund_ta::Result<T> {
//!     validate_period(period)?;
//!     let period_t = T::from_usize(period)?;
//!     let sum = data.iter().take(period).fold(T::zero(), |acc, &x| acc + x);
//!     Ok(sum / period_t)
//! }
//!
//! let result = window_mean(&[1.0_f64, 2.0, 3.0, 4.0], 3).unwrap();
//! assert!((result - 2.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a price series.
///
/// The trait requires:
/// - `Float`: Standard floating-point operations (NaN handling, infinity, arithmetic)
/// - `NumCast`: Safe conversion between numeric types
/// - `Copy` and `Default`
/// - `Send + Sync`: indicators may be called from any thread
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// Used for the literal coefficients of the indicator formulas.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Widens the value to `f64` for error reporting.
    ///
    /// Returns NaN when the value has no `f64` representation.
    #[inline]
    #[must_use]
    fn to_f64_lossy(self) -> f64 {
        num_traits::ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Validates that a period is valid for indicator computation.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[inline]
pub const fn validate_period(period: usize) -> Result<()> {
    if period == 0 {
        Err(Error::InvalidPeriod {
            period,
            reason: "period must be at least 1",
        })
    } else {
        Ok(())
    }
}

/// Validates a standard-deviation multiplier.
///
/// # Errors
///
/// Returns `Error::InvalidMultiplier` if the multiplier is NaN, infinite,
/// zero, or negative.
#[inline]
pub fn validate_multiplier<T: SeriesElement>(multiplier: T) -> Result<()> {
    if !multiplier.is_finite() {
        return Err(Error::InvalidMultiplier {
            multiplier: multiplier.to_f64_lossy(),
            reason: "multiplier must be finite",
        });
    }
    if multiplier <= T::zero() {
        return Err(Error::InvalidMultiplier {
            multiplier: multiplier.to_f64_lossy(),
            reason: "multiplier must be positive",
        });
    }
    Ok(())
}

/// Passes `value` through if it is finite.
///
/// # Errors
///
/// Returns `Error::NonFiniteResult` tagged with `indicator` and `index` when
/// the value is NaN or infinite.
#[inline]
pub fn ensure_finite<T: SeriesElement>(value: T, indicator: &'static str, index: usize) -> Result<T> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteResult { indicator, index })
    }
}
