//! Bollinger Bands indicator.
//!
//! Bollinger Bands are a volatility envelope made of three series:
//! - **Middle Band**: moving average of the price
//! - **Upper Band**: middle + (multiplier × standard deviation)
//! - **Lower Band**: middle - (multiplier × standard deviation)
//!
//! # Conventions
//!
//! - **Population Standard Deviation**: divides by the period, not period-1.
//! - **Two-pass deviation**: each window's deviations are taken around that
//!   window's moving-average value.
//! - **Rounding**: upper and lower bands are rounded to 4 decimals; the
//!   middle band is reported at full precision.
//! - **Short series**: fewer prices than the period yields three *empty*
//!   series. This differs from [`moving_average`], which returns an
//!   all-undefined series of the input's length in the same situation.
//!
//! # Formula
//!
//! ```text
//! Middle[i] = MA(price, k)[i]
//! Std[i]    = sqrt(sum_{j<k} (price[i-j] - Middle[i])^2 / k)
//! Upper[i]  = round4(Middle[i] + m × Std[i])
//! Lower[i]  = round4(Middle[i] - m × Std[i])
//! ```
//!
//! # Example
//!
//! ```
//! use fund_ta::indicators::bollinger::bollinger_bands;
//!
//! let data = vec![20.0_f64, 21.0, 22.0, 21.5, 22.5, 23.0, 22.0, 21.0, 20.5, 21.5];
//! let bands = bollinger_bands(&data, 5, 2.0).unwrap();
//!
//! // First 4 values (period - 1) are undefined
//! assert!(bands.middle[3].is_none());
//! assert!(bands.upper[3].is_none());
//!
//! // Upper > Middle > Lower for any non-zero volatility
//! let (upper, middle, lower) = (bands.upper[4].unwrap(), bands.middle[4].unwrap(), bands.lower[4].unwrap());
//! assert!(upper > middle && middle > lower);
//! ```
//!
//! [`moving_average`]: crate::indicators::moving_average::moving_average

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indicators::moving_average::{moving_average, moving_average_lookback};
use crate::kernels::dispersion::population_std_dev;
use crate::traits::{ensure_finite, validate_multiplier, validate_period, SeriesElement};
use crate::utils::round_to;

const INDICATOR: &str = "bollinger";
const BAND_DECIMALS: i32 = 4;

/// Returns the number of undefined entries at the start of each band.
///
/// ```
/// use fund_ta::indicators::bollinger::bollinger_lookback;
///
/// assert_eq!(bollinger_lookback(20), 19);
/// ```
#[inline]
#[must_use]
pub const fn bollinger_lookback(period: usize) -> usize {
    moving_average_lookback(period)
}

/// Returns the minimum input length for non-empty bands.
#[inline]
#[must_use]
pub const fn bollinger_min_len(period: usize) -> usize {
    period
}

/// Output structure containing all three Bollinger Bands.
///
/// Either all three vectors are empty (input shorter than the period), or all
/// three have the input's length with the first `period - 1` entries `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BollingerOutput<T> {
    /// The middle band (moving average).
    pub middle: Vec<Option<T>>,
    /// The upper band (middle + m × stddev), rounded to 4 decimals.
    pub upper: Vec<Option<T>>,
    /// The lower band (middle - m × stddev), rounded to 4 decimals.
    pub lower: Vec<Option<T>>,
}

impl<T> BollingerOutput<T> {
    /// Returns true when the input was too short to produce bands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }

    /// Number of entries in each band.
    #[must_use]
    pub fn len(&self) -> usize {
        self.middle.len()
    }
}

/// Computes Bollinger Bands for a price series.
///
/// # Arguments
///
/// * `data` - The input price series
/// * `period` - Window length for the moving average and deviation (commonly 20)
/// * `multiplier` - Number of standard deviations for the bands (commonly 2.0)
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period` is zero
/// - `Error::InvalidMultiplier` if `multiplier` is not finite and positive
/// - `Error::NonFiniteResult` if the input contains NaN or infinite values
///
/// # Example
///
/// ```
/// use fund_ta::indicators::bollinger::bollinger_bands;
///
/// // Too short for a 20-period band: empty output, not an error
/// let bands = bollinger_bands(&[10.0_f64, 10.0, 10.0], 20, 2.0).unwrap();
/// assert!(bands.middle.is_empty() && bands.upper.is_empty() && bands.lower.is_empty());
/// ```
#[must_use = "this returns a Result with Bollinger Bands values, which should be used"]
pub fn bollinger_bands<T: SeriesElement>(
    data: &[T],
    period: usize,
    multiplier: T,
) -> Result<BollingerOutput<T>> {
    validate_period(period)?;
    validate_multiplier(multiplier)?;

    if data.len() < period {
        tracing::debug!(len = data.len(), period, "bollinger input shorter than period, no bands");
        return Ok(BollingerOutput::default());
    }

    let middle = moving_average(data, period)?;
    let mut upper = vec![None; data.len()];
    let mut lower = vec![None; data.len()];

    for i in bollinger_lookback(period)..data.len() {
        let Some(centre) = middle[i] else {
            continue;
        };
        let window = &data[i + 1 - period..=i];
        let spread = multiplier * population_std_dev(window, centre)?;

        upper[i] = Some(ensure_finite(round_to(centre + spread, BAND_DECIMALS)?, INDICATOR, i)?);
        lower[i] = Some(ensure_finite(round_to(centre - spread, BAND_DECIMALS)?, INDICATOR, i)?);
    }

    Ok(BollingerOutput {
        middle,
        upper,
        lower,
    })
}

// ==================== Configuration Type ====================

/// Bollinger Bands configuration with fluent builder API.
///
/// Defaults to period 20 and 2 standard deviations.
///
/// # Example
///
/// ```
/// use fund_ta::indicators::bollinger::BollingerBands;
///
/// let prices: Vec<f64> = (0..30).map(|i| 100.0 + f64::from(i % 5)).collect();
///
/// let standard = BollingerBands::default().compute(&prices).unwrap();
/// let tight = BollingerBands::new().period(10).multiplier(1.5).compute(&prices).unwrap();
/// assert_eq!(standard.len(), tight.len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BollingerBands {
    period: usize,
    multiplier: f64,
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self {
            period: 20,
            multiplier: 2.0,
        }
    }
}

impl BollingerBands {
    /// Creates a configuration with standard parameters (20, 2.0).
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

    /// Sets the standard deviation multiplier.
    #[must_use]
    pub const fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Computes the bands with the configured parameters.
    ///
    /// # Errors
    ///
    /// See [`bollinger_bands`].
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<BollingerOutput<T>> {
        bollinger_bands(data, self.period, T::from_f64(self.multiplier)?)
    }

    /// Returns the period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the standard deviation multiplier.
    #[must_use]
    pub const fn get_multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        bollinger_lookback(self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::count_undefined_prefix;

    const EPSILON: f64 = 1e-9;
    // Rounding each band to 4 decimals moves it by at most 5e-5.
    const ROUNDING: f64 = 1e-4 + 1e-12;

    fn sample() -> Vec<f64> {
        vec![
            44.0, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0, 45.5, 44.5, 43.5, 44.0,
            45.0, 46.0, 46.5, 45.5, 44.5, 45.0, 45.25, 46.1,
        ]
    }

    #[test]
    fn test_bollinger_basic() {
        let data = vec![20.0_f64, 21.0, 22.0, 21.5, 22.5, 23.0, 22.0, 21.0, 20.5, 21.5];
        let bands = bollinger_bands(&data, 5, 2.0).unwrap();

        assert_eq!(bands.len(), 10);
        assert_eq!(bands.upper.len(), 10);
        assert_eq!(bands.lower.len(), 10);
        for series in [&bands.middle, &bands.upper, &bands.lower] {
            assert_eq!(count_undefined_prefix(series), 4);
            assert!(series[4..].iter().all(Option::is_some));
        }
        for i in 4..10 {
            assert!(bands.upper[i].unwrap() > bands.middle[i].unwrap());
            assert!(bands.middle[i].unwrap() > bands.lower[i].unwrap());
        }
    }

    #[test]
    fn test_known_window() {
        // Window [20, 21, 22, 21.5, 22.5]: mean 21.4,
        // deviations² = 1.96 + 0.16 + 0.36 + 0.01 + 1.21 = 3.7 -> std = sqrt(0.74)
        let data = [20.0_f64, 21.0, 22.0, 21.5, 22.5];
        let bands = bollinger_bands(&data, 5, 2.0).unwrap();
        let std = 0.74_f64.sqrt();

        assert!((bands.middle[4].unwrap() - 21.4).abs() < EPSILON);
        assert!((bands.upper[4].unwrap() - 23.1205).abs() < EPSILON);
        assert!((bands.lower[4].unwrap() - 19.6795).abs() < EPSILON);
        assert!((bands.upper[4].unwrap() - (21.4 + 2.0 * std)).abs() < ROUNDING);
    }

    #[test]
    fn test_short_series_gives_empty_bands() {
        let bands = bollinger_bands(&[10.0_f64, 10.0, 10.0], 20, 2.0).unwrap();
        assert!(bands.is_empty());
        assert!(bands.upper.is_empty());
        assert!(bands.lower.is_empty());
    }

    #[test]
    fn test_empty_input_gives_empty_bands() {
        let empty: Vec<f64> = vec![];
        assert!(bollinger_bands(&empty, 20, 2.0).unwrap().is_empty());
    }

    #[test]
    fn test_period_equals_length() {
        let bands = bollinger_bands(&[1.0_f64, 2.0, 3.0], 3, 2.0).unwrap();
        assert_eq!(bands.len(), 3);
        assert_eq!(count_undefined_prefix(&bands.upper), 2);
        assert!(bands.upper[2].is_some());
    }

    #[test]
    fn test_constant_series_collapses_bands() {
        let bands = bollinger_bands(&[50.0_f64; 25], 20, 2.0).unwrap();
        for i in 19..25 {
            assert_eq!(bands.upper[i], Some(50.0));
            assert_eq!(bands.lower[i], Some(50.0));
            assert_eq!(bands.middle[i], Some(50.0));
        }
    }

    #[test]
    fn test_period_one_collapses_bands() {
        let data = [1.0_f64, 2.0, 3.0];
        let bands = bollinger_bands(&data, 1, 2.0).unwrap();
        for (i, &price) in data.iter().enumerate() {
            assert_eq!(bands.upper[i], Some(price));
            assert_eq!(bands.lower[i], Some(price));
        }
    }

    #[test]
    fn test_band_symmetry() {
        let bands = bollinger_bands(&sample(), 20, 2.0).unwrap();
        for i in 19..bands.len() {
            let middle = bands.middle[i].unwrap();
            let above = bands.upper[i].unwrap() - middle;
            let below = middle - bands.lower[i].unwrap();
            assert!((above - below).abs() <= ROUNDING, "index {i}");
        }
    }

    #[test]
    fn test_population_std_dev_used() {
        // Window [1, 3]: population std = 1, sample std = sqrt(2)
        let bands = bollinger_bands(&[1.0_f64, 3.0], 2, 1.0).unwrap();
        assert!((bands.upper[1].unwrap() - 3.0).abs() < EPSILON);
        assert!((bands.lower[1].unwrap() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_middle_not_rounded() {
        let data = [1.0_f64, 1.0, 2.0];
        let bands = bollinger_bands(&data, 3, 2.0).unwrap();
        assert!((bands.middle[2].unwrap() - 4.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_wider_multiplier_widens_bands() {
        let narrow = bollinger_bands(&sample(), 10, 1.0).unwrap();
        let wide = bollinger_bands(&sample(), 10, 3.0).unwrap();
        for i in 9..narrow.len() {
            assert!(wide.upper[i].unwrap() >= narrow.upper[i].unwrap());
            assert!(wide.lower[i].unwrap() <= narrow.lower[i].unwrap());
        }
    }

    #[test]
    fn test_f32() {
        let bands = bollinger_bands(&[20.0_f32, 21.0, 22.0, 21.5, 22.5], 3, 2.0).unwrap();
        assert_eq!(bands.len(), 5);
        assert!(bands.middle[1].is_none());
        assert!(bands.middle[2].is_some());
    }

    #[test]
    fn test_zero_period() {
        let result = bollinger_bands(&[1.0_f64, 2.0], 0, 2.0);
        assert!(matches!(result, Err(Error::InvalidPeriod { .. })));
    }

    #[test]
    fn test_invalid_multiplier() {
        for bad in [0.0_f64, -2.0, f64::NAN, f64::INFINITY] {
            let result = bollinger_bands(&sample(), 5, bad);
            assert!(matches!(result, Err(Error::InvalidMultiplier { .. })), "{bad}");
        }
    }

    #[test]
    fn test_invalid_parameters_rejected_even_for_short_series() {
        assert!(bollinger_bands(&[1.0_f64], 0, 2.0).is_err());
        assert!(bollinger_bands(&[1.0_f64], 20, -1.0).is_err());
    }

    #[test]
    fn test_nan_input_is_computation_error() {
        let mut data = sample();
        data[3] = f64::NAN;
        let result = bollinger_bands(&data, 5, 2.0);
        assert!(matches!(result, Err(Error::NonFiniteResult { .. })));
    }

    #[test]
    fn test_config_defaults() {
        let config = BollingerBands::default();
        assert_eq!(config.get_period(), 20);
        assert!((config.get_multiplier() - 2.0).abs() < EPSILON);
        assert_eq!(config.lookback(), 19);
    }

    #[test]
    fn test_config_matches_function() {
        let data = sample();
        let from_config = BollingerBands::new().period(10).multiplier(2.5).compute(&data).unwrap();
        let direct = bollinger_bands(&data, 10, 2.5).unwrap();
        assert_eq!(from_config, direct);
    }

    #[test]
    fn test_is_pure() {
        let data = sample();
        assert_eq!(bollinger_bands(&data, 20, 2.0), bollinger_bands(&data, 20, 2.0));
    }
}
