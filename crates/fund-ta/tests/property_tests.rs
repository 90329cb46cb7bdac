//! Property-based tests for all indicators using proptest.
//!
//! These tests verify invariant properties that must hold for all valid inputs,
//! using randomly generated price histories to find edge cases.

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

use proptest::prelude::*;

use fund_ta::indicators::{
    annualized_volatility, bollinger_bands, distance_from_high, moving_average,
    relative_strength, support_resistance, trend_line, SUPPORT_RESISTANCE_MIN_LEN,
};

mod common;
use common::approx_eq;

// ==================== Test Data Generators ====================

/// Generate a random price series (all positive values)
fn arb_price_series(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0..1000.0_f64, min_len..=max_len)
}

/// Generate a line `intercept + slope * i` sampled at `len` points
fn arb_linear_series() -> impl Strategy<Value = (f64, f64, Vec<f64>)> {
    (-100.0..100.0_f64, -5.0..5.0_f64, 2usize..200).prop_map(|(intercept, slope, len)| {
        let data = (0..len).map(|i| intercept + slope * i as f64).collect();
        (intercept, slope, data)
    })
}

// ==================== Moving Average Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Output length always equals input length
    #[test]
    fn prop_moving_average_output_length(data in arb_price_series(0, 100), period in 1usize..=30) {
        let result = moving_average(&data, period).unwrap();
        prop_assert_eq!(result.len(), data.len());
    }

    /// Exactly the first period-1 entries are undefined (all of them for short input)
    #[test]
    fn prop_moving_average_undefined_prefix(data in arb_price_series(0, 100), period in 1usize..=30) {
        let result = moving_average(&data, period).unwrap();
        let expected = if data.len() < period { data.len() } else { period - 1 };
        for (i, value) in result.iter().enumerate() {
            prop_assert_eq!(value.is_none(), i < expected, "index {}", i);
        }
    }

    /// Every defined entry is the mean of its trailing window
    #[test]
    fn prop_moving_average_is_window_mean(data in arb_price_series(1, 100), period in 1usize..=30) {
        let result = moving_average(&data, period).unwrap();
        for (i, value) in result.iter().enumerate() {
            if let Some(ma) = value {
                let window = &data[i + 1 - period..=i];
                let mean = window.iter().sum::<f64>() / period as f64;
                prop_assert!(approx_eq(*ma, mean, 1e-9 * mean.abs().max(1.0)), "index {}: {} vs {}", i, ma, mean);
            }
        }
    }

    /// Every defined entry lies within the window's range
    #[test]
    fn prop_moving_average_bounded_by_window(data in arb_price_series(1, 100), period in 1usize..=30) {
        let result = moving_average(&data, period).unwrap();
        for (i, value) in result.iter().enumerate() {
            if let Some(ma) = value {
                let window = &data[i + 1 - period..=i];
                let lo = window.iter().copied().fold(f64::INFINITY, f64::min);
                let hi = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                prop_assert!(*ma >= lo - 1e-9 && *ma <= hi + 1e-9);
            }
        }
    }

    /// Same input, same output
    #[test]
    fn prop_moving_average_is_pure(data in arb_price_series(0, 60), period in 1usize..=20) {
        prop_assert_eq!(moving_average(&data, period), moving_average(&data, period));
    }
}

// ==================== Support/Resistance Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Short histories use the exact percentage fallback
    #[test]
    fn prop_support_resistance_fallback_exact(data in arb_price_series(1, SUPPORT_RESISTANCE_MIN_LEN - 1)) {
        let levels = support_resistance(&data).unwrap();
        let last = *data.last().unwrap();
        prop_assert_eq!(levels.support, last * 0.9);
        prop_assert_eq!(levels.resistance, last * 1.1);
    }

    /// Support sits below resistance for positive prices
    #[test]
    fn prop_support_below_resistance(data in arb_price_series(1, 80)) {
        let levels = support_resistance(&data).unwrap();
        prop_assert!(levels.support < levels.resistance, "{:?}", levels);
    }

    /// Composite levels are rounded to 4 decimals
    #[test]
    fn prop_support_resistance_rounded(data in arb_price_series(SUPPORT_RESISTANCE_MIN_LEN, 80)) {
        let levels = support_resistance(&data).unwrap();
        for level in [levels.support, levels.resistance] {
            let scaled = level * 10_000.0;
            prop_assert!((scaled - scaled.round()).abs() < 1e-4, "{} not rounded", level);
        }
    }
}

// ==================== Trend Line Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// A perfectly linear series is recovered
    #[test]
    fn prop_trend_line_recovers_line((intercept, slope, data) in arb_linear_series()) {
        let line = trend_line(&data).unwrap();
        prop_assert!(approx_eq(line.slope, slope, 1e-5), "slope {} vs {}", line.slope, slope);
        prop_assert!(approx_eq(line.intercept, intercept, 1e-3), "intercept {} vs {}", line.intercept, intercept);
        prop_assert_eq!(line.points.len(), data.len());
        for (point, price) in line.points.iter().zip(&data) {
            let tolerance = 1e-9 * price.abs().max(1.0);
            prop_assert!(approx_eq(*point, *price, tolerance), "point {} vs {}", point, price);
        }
    }

    /// Residuals of the least-squares fit sum to zero
    #[test]
    fn prop_trend_line_residuals_sum_to_zero(data in arb_price_series(2, 150)) {
        let line = trend_line(&data).unwrap();
        let residual: f64 = data.iter().zip(&line.points).map(|(y, p)| y - p).sum();
        prop_assert!(residual.abs() < 1e-6 * data.len() as f64 * 1000.0);
    }
}

// ==================== Bollinger Bands Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Bands are symmetric around the middle up to rounding
    #[test]
    fn prop_bollinger_symmetry(data in arb_price_series(1, 100), period in 1usize..=30, multiplier in 0.5..3.0_f64) {
        let bands = bollinger_bands(&data, period, multiplier).unwrap();
        for i in 0..bands.len() {
            if let (Some(u), Some(m), Some(l)) = (bands.upper[i], bands.middle[i], bands.lower[i]) {
                prop_assert!(((u - m) - (m - l)).abs() <= 2e-4, "index {}", i);
                prop_assert!(u >= l);
            }
        }
    }

    /// Too-short input gives three empty series
    #[test]
    fn prop_bollinger_short_input_is_empty(data in arb_price_series(0, 19)) {
        let bands = bollinger_bands(&data, 20, 2.0).unwrap();
        prop_assert!(bands.middle.is_empty());
        prop_assert!(bands.upper.is_empty());
        prop_assert!(bands.lower.is_empty());
    }

    /// Otherwise all three series match the input length with the same prefix
    #[test]
    fn prop_bollinger_aligned(data in arb_price_series(20, 100)) {
        let bands = bollinger_bands(&data, 20, 2.0).unwrap();
        prop_assert_eq!(bands.middle.len(), data.len());
        prop_assert_eq!(bands.upper.len(), data.len());
        prop_assert_eq!(bands.lower.len(), data.len());
        for i in 0..data.len() {
            prop_assert_eq!(bands.upper[i].is_some(), i >= 19);
            prop_assert_eq!(bands.lower[i].is_some(), i >= 19);
        }
    }

    /// The middle band is the moving average
    #[test]
    fn prop_bollinger_middle_is_moving_average(data in arb_price_series(0, 80), period in 1usize..=20) {
        let bands = bollinger_bands(&data, period, 2.0).unwrap();
        if data.len() >= period {
            prop_assert_eq!(bands.middle, moving_average(&data, period).unwrap());
        }
    }
}

// ==================== Scalar Metric Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// RSI stays in [0, 100]
    #[test]
    fn prop_rsi_bounds(data in arb_price_series(0, 100), period in 1usize..=30) {
        let rsi = relative_strength(&data, period).unwrap();
        prop_assert!((0.0..=100.0).contains(&rsi), "rsi {}", rsi);
    }

    /// Volatility is never negative
    #[test]
    fn prop_volatility_non_negative(data in arb_price_series(0, 100), period in 1usize..=30) {
        let vol = annualized_volatility(&data, period, 252).unwrap();
        prop_assert!(vol >= 0.0, "volatility {}", vol);
    }

    /// The latest price is never above the series high
    #[test]
    fn prop_distance_from_high_non_positive(data in arb_price_series(1, 100)) {
        let distance = distance_from_high(&data).unwrap();
        prop_assert!(distance <= 0.0 && distance >= -100.0, "distance {}", distance);
    }
}
