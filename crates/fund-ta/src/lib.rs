//! fund-ta: technical indicators for fund price histories
//!
//! This crate computes the indicators a fund dashboard draws next to a price
//! chart: moving averages, support and resistance levels, a least-squares
//! trend line and Bollinger Bands, plus the RSI, volatility and drawdown
//! figures shown in the fund list.
//!
//! # Features
//!
//! - **Pure functions**: every indicator is a function of its inputs only
//! - **Generics**: works with both `f32` and `f64` data types
//! - **Explicit warm-up**: undefined entries are `None`, never a magic number
//! - **Serde**: outputs and configurations serialize to JSON for the chart layer
//!
//! # Quick Start
//!
//! ```
//! use fund_ta::prelude::*;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = moving_average(&data, 3).unwrap();
//!
//! // First 2 values are undefined (warm-up)
//! assert_eq!(result[0], None);
//! assert_eq!(result[1], None);
//! assert_eq!(result[2], Some(2.0));
//! ```
//!
//! # Available Indicators
//!
//! ## Chart Series
//! - [`indicators::moving_average()`]: trailing moving average
//! - [`indicators::bollinger_bands()`]: Bollinger Bands
//! - [`indicators::trend_line()`]: least-squares trend line
//!
//! ## Fund Metrics
//! - [`indicators::support_resistance()`]: composite support/resistance estimate
//! - [`indicators::relative_strength()`]: whole-series RSI
//! - [`indicators::annualized_volatility()`]: annualized volatility
//! - [`indicators::distance_from_high()`]: distance from the series high
//!
//! ## Everything at once
//! - [`analysis::analyze()`]: every indicator for one fund
//!
//! # Error Handling
//!
//! A short history is not an error. Each indicator documents what it returns
//! when there is too little data. Errors are reserved for invalid parameters
//! and non-finite results:
//!
//! ```
//! use fund_ta::prelude::*;
//!
//! // Period longer than the data: all undefined, not an error
//! let short = moving_average(&[1.0_f64, 2.0], 10).unwrap();
//! assert_eq!(short, vec![None, None]);
//!
//! // Zero period: an error
//! let result = moving_average(&[1.0_f64, 2.0], 0);
//! assert!(result.is_err());
//! ```
//!
//! # Logging
//!
//! Fallback branches emit `tracing` events at `debug` level. The one fallback
//! that changes reported numbers (a 20-period moving average blended into
//! support/resistance as zero) is logged at `warn`. The crate installs no
//! subscriber.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod analysis;
pub mod error;
pub mod indicators;
pub mod kernels;
pub mod prelude;
pub mod traits;
pub mod utils;

pub use analysis::{analyze, analyze_unlabeled, AnalysisConfig, FundAnalysis};
pub use error::{Error, ErrorKind, Result};
pub use traits::SeriesElement;
pub use utils::round_to;
