//! Shared test utilities for fund-ta tests.

/// Approximate equality check for floating-point values.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

/// Approximate equality for possibly-undefined values: both undefined, or
/// both defined and within `eps`.
#[allow(dead_code)]
pub fn approx_eq_opt(a: Option<f64>, b: Option<f64>, eps: f64) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => approx_eq(x, y, eps),
        _ => false,
    }
}

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Check that the first `expected` entries are undefined and the rest defined.
#[allow(dead_code)]
pub fn verify_undefined_prefix(data: &[Option<f64>], expected: usize) -> bool {
    data.iter().enumerate().all(|(i, v)| v.is_none() == (i < expected))
}

/// A year of daily prices for a fund drifting upward with a weekly wobble.
#[allow(dead_code)]
pub fn fund_prices(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            1.2 + t * 0.002 + (t * 0.9).sin() * 0.03
        })
        .collect()
}

/// ISO dates labelling `len` consecutive prices.
#[allow(dead_code)]
pub fn fund_dates(len: usize) -> Vec<String> {
    (0..len)
        .map(|i| format!("2024-{:02}-{:02}", i / 28 + 1, i % 28 + 1))
        .collect()
}
