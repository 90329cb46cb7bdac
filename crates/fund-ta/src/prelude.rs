//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use fund_ta::prelude::*;
//!
//! let prices: Vec<f64> = (1..=30).map(f64::from).collect();
//!
//! let ma = moving_average(&prices, 5).unwrap();
//! let levels = support_resistance(&prices).unwrap();
//! let line = trend_line(&prices).unwrap();
//! let bands = bollinger_bands(&prices, 20, 2.0).unwrap();
//!
//! assert_eq!(ma.len(), bands.len());
//! assert!(levels.support < levels.resistance);
//! assert_eq!(line.slope, 1.0);
//! ```
//!
//! # Contents
//!
//! ## Error Handling
//! - [`Error`], [`ErrorKind`] and the [`Result`] alias
//!
//! ## Traits
//! - [`SeriesElement`]: numeric types usable in indicators
//!
//! ## Indicator Functions, Outputs and Configurations
//! - `moving_average`, `support_resistance`, `trend_line`, `bollinger_bands`,
//!   `relative_strength`, `annualized_volatility`, `distance_from_high`
//!
//! ## Lookback Functions
//! - `*_lookback()`: number of undefined entries at the start of the output
//! - `*_min_len()`: minimum input length for at least one defined value

// Error types
pub use crate::error::{Error, ErrorKind, Result};

// Traits
pub use crate::traits::SeriesElement;

// Indicator functions
pub use crate::indicators::{
    annualized_volatility, bollinger_bands, distance_from_high, moving_average,
    relative_strength, support_resistance, trend_line, trend_line_indexed, trend_line_with_dates,
};

// Output types
pub use crate::indicators::{
    BollingerOutput, LabeledPoint, LabeledTrendLine, SupportResistance, TrendLine,
};

// Configuration types
pub use crate::indicators::{BollingerBands, MovingAverage, Rsi, Volatility};

// Lookback functions
pub use crate::indicators::{
    bollinger_lookback, bollinger_min_len, moving_average_lookback, moving_average_min_len,
};

// Whole-fund analysis
pub use crate::analysis::{analyze, analyze_unlabeled, AnalysisConfig, FundAnalysis};
