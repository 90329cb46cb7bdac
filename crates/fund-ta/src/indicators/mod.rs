//! Technical indicators for fund price histories.
//!
//! Every indicator takes a plain slice of prices, oldest first, and is a pure
//! function of its inputs.
//!
//! # Overview
//!
//! - **Generic**: work with both `f32` and `f64` via the
//!   [`SeriesElement`](crate::traits::SeriesElement) trait
//! - **Undefined, not NaN**: warm-up entries are `None`, so a chart layer can
//!   tell "no value yet" apart from a real number
//! - **Graceful on short input**: a history too short for an indicator takes a
//!   documented fallback instead of failing
//!
//! # Indicators
//!
//! ## Series
//!
//! - [`moving_average`] - trailing arithmetic mean over a window
//! - [`bollinger_bands`] - moving average with a population-deviation envelope
//! - [`trend_line`] - least-squares line through the whole history
//!
//! ## Scalars
//!
//! - [`support_resistance`] - composite price floor and ceiling
//! - [`relative_strength`] - whole-series RSI
//! - [`annualized_volatility`] - standard deviation of returns, annualized
//! - [`distance_from_high`] - percentage below the series high
//!
//! # Example
//!
//! ```
//! use fund_ta::indicators::{bollinger_bands, moving_average, support_resistance};
//!
//! let prices: Vec<f64> = (0..30).map(|i| 1.0 + f64::from(i) * 0.01).collect();
//!
//! let ma = moving_average(&prices, 5).unwrap();
//! assert!(ma[3].is_none() && ma[4].is_some());
//!
//! let bands = bollinger_bands(&prices, 20, 2.0).unwrap();
//! assert_eq!(bands.len(), prices.len());
//!
//! let levels = support_resistance(&prices).unwrap();
//! assert!(levels.support < levels.resistance);
//! ```

pub mod bollinger;
pub mod drawdown;
pub mod moving_average;
pub mod rsi;
pub mod support_resistance;
pub mod trend;
pub mod volatility;

pub use bollinger::{
    bollinger_bands, bollinger_lookback, bollinger_min_len, BollingerBands, BollingerOutput,
};
pub use drawdown::distance_from_high;
pub use moving_average::{
    moving_average, moving_average_lookback, moving_average_min_len, MovingAverage,
};
pub use rsi::{relative_strength, Rsi};
pub use support_resistance::{support_resistance, SupportResistance, SUPPORT_RESISTANCE_MIN_LEN};
pub use trend::{
    trend_line, trend_line_indexed, trend_line_with_dates, LabeledPoint, LabeledTrendLine,
    TrendLine,
};
pub use volatility::{annualized_volatility, Volatility, TRADING_DAYS_PER_YEAR};
