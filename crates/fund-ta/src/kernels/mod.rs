//! Shared numeric kernels.
//!
//! - [`dispersion`]: mean and two-pass population standard deviation, used by
//!   Bollinger Bands, RSI and volatility

pub mod dispersion;

pub use dispersion::{mean, population_std_dev};
