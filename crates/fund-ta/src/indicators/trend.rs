//! Least-squares trend line.
//!
//! Fits `price = slope * i + intercept` by ordinary least squares, where `i`
//! is the 0-based position in the series. Dates never enter the fit; they are
//! only attached to the fitted points for display.
//!
//! # Formula
//!
//! ```text
//! slope     = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
//! intercept = (Σy − slope·Σx) / n
//! point[i]  = slope·i + intercept
//! ```
//!
//! The reported slope is rounded to 6 decimals and the intercept to 4; the
//! fitted points are computed from the unrounded coefficients and keep full
//! precision. For `n >= 2` the denominator is `n²(n²−1)/12 > 0`.
//!
//! # Example
//!
//! ```
//! use fund_ta::indicators::trend::trend_line;
//!
//! let line = trend_line(&[1.0_f64, 3.0, 5.0, 7.0]).unwrap();
//! assert_eq!(line.slope, 2.0);
//! assert_eq!(line.intercept, 1.0);
//! assert_eq!(line.points, vec![1.0, 3.0, 5.0, 7.0]);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::traits::{ensure_finite, SeriesElement};
use crate::utils::round_to;

const INDICATOR: &str = "trend_line";
const SLOPE_DECIMALS: i32 = 6;
const INTERCEPT_DECIMALS: i32 = 4;

/// A fitted trend line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendLine<T> {
    /// Change in price per step, rounded to 6 decimals.
    pub slope: T,
    /// Fitted price at index 0, rounded to 4 decimals.
    pub intercept: T,
    /// Fitted price at every index of the input, full precision.
    pub points: Vec<T>,
}

impl<T: SeriesElement> TrendLine<T> {
    /// The line reported for series too short to fit.
    #[must_use]
    pub fn flat() -> Self {
        Self {
            slope: T::zero(),
            intercept: T::zero(),
            points: Vec::new(),
        }
    }
}

/// One fitted point together with its date label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledPoint<D, T> {
    /// Label of the observation, usually a date.
    pub label: D,
    /// Fitted price at that observation.
    pub value: T,
}

/// A trend line whose points carry date labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledTrendLine<D, T> {
    /// Change in price per step, rounded to 6 decimals.
    pub slope: T,
    /// Fitted price at index 0, rounded to 4 decimals.
    pub intercept: T,
    /// Fitted points paired with the date labels.
    pub points: Vec<LabeledPoint<D, T>>,
}

/// Fits a least-squares trend line to a price series.
///
/// Series with fewer than two prices yield [`TrendLine::flat`].
///
/// # Errors
///
/// Returns `Error::NonFiniteResult` if the input contains NaN or infinite
/// values.
#[must_use = "this returns a Result with the trend line, which should be used"]
pub fn trend_line<T: SeriesElement>(data: &[T]) -> Result<TrendLine<T>> {
    let n = data.len();
    if n < 2 {
        tracing::debug!(len = n, "trend line needs two prices, reporting a flat line");
        return Ok(TrendLine::flat());
    }

    let mut sum_x = T::zero();
    let mut sum_y = T::zero();
    let mut sum_xy = T::zero();
    let mut sum_x2 = T::zero();
    for (i, &y) in data.iter().enumerate() {
        let x = T::from_usize(i)?;
        sum_x = sum_x + x;
        sum_y = sum_y + y;
        sum_xy = sum_xy + x * y;
        sum_x2 = sum_x2 + x * x;
    }

    let n_t = T::from_usize(n)?;
    #[allow(clippy::suspicious_operation_groupings)]
    let slope = (n_t * sum_xy - sum_x * sum_y) / (n_t * sum_x2 - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n_t;
    let slope = ensure_finite(slope, INDICATOR, n - 1)?;
    let intercept = ensure_finite(intercept, INDICATOR, 0)?;

    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        points.push(slope * T::from_usize(i)? + intercept);
    }

    Ok(TrendLine {
        slope: round_to(slope, SLOPE_DECIMALS)?,
        intercept: round_to(intercept, INTERCEPT_DECIMALS)?,
        points,
    })
}

/// Fits a trend line and attaches a date label to every fitted point.
///
/// # Errors
///
/// - `Error::LengthMismatch` if `dates` and `data` differ in length
/// - `Error::NonFiniteResult` as for [`trend_line`]
///
/// # Example
///
/// ```
/// use fund_ta::indicators::trend::trend_line_with_dates;
///
/// let line = trend_line_with_dates(&[1.0_f64, 2.0], &["2024-01-02", "2024-01-03"]).unwrap();
/// assert_eq!(line.points[1].label, "2024-01-03");
/// assert_eq!(line.points[1].value, 2.0);
/// ```
pub fn trend_line_with_dates<T: SeriesElement, D: Clone>(
    data: &[T],
    dates: &[D],
) -> Result<LabeledTrendLine<D, T>> {
    if dates.len() != data.len() {
        return Err(Error::LengthMismatch {
            indicator: INDICATOR,
            prices: data.len(),
            labels: dates.len(),
        });
    }

    let line = trend_line(data)?;
    let points = dates
        .iter()
        .cloned()
        .zip(line.points)
        .map(|(label, value)| LabeledPoint { label, value })
        .collect();

    Ok(LabeledTrendLine {
        slope: line.slope,
        intercept: line.intercept,
        points,
    })
}

/// Fits a trend line and labels every fitted point with its index.
///
/// # Errors
///
/// See [`trend_line`].
pub fn trend_line_indexed<T: SeriesElement>(data: &[T]) -> Result<LabeledTrendLine<usize, T>> {
    let indices: Vec<usize> = (0..data.len()).collect();
    trend_line_with_dates(data, &indices)
}
