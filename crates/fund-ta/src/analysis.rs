//! One-call analysis of a fund's price history.
//!
//! [`analyze`] runs every indicator in the crate over one price series with
//! a single [`AnalysisConfig`] and returns a [`FundAnalysis`] report. Both
//! types derive `serde` traits so that settings can be loaded from JSON and
//! the report handed to a chart layer as JSON, where undefined warm-up
//! entries appear as `null`.
//!
//! # Example
//!
//! ```
//! use fund_ta::analysis::{analyze, AnalysisConfig};
//!
//! let prices: Vec<f64> = (0..40).map(|i| 1.5 + f64::from(i) * 0.01).collect();
//! let dates: Vec<String> = (1..=40).map(|d| format!("2024-02-{d:02}")).collect();
//!
//! let report = analyze(&prices, &dates, &AnalysisConfig::default()).unwrap();
//! assert_eq!(report.moving_averages.len(), 3);
//! assert_eq!(report.bollinger.len(), 40);
//! assert_eq!(report.trend.points[0].label, "2024-02-01");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indicators::bollinger::{BollingerBands, BollingerOutput};
use crate::indicators::drawdown::distance_from_high;
use crate::indicators::moving_average::moving_average;
use crate::indicators::rsi::Rsi;
use crate::indicators::support_resistance::{support_resistance, SupportResistance};
use crate::indicators::trend::{trend_line_with_dates, LabeledTrendLine};
use crate::indicators::volatility::Volatility;
use crate::traits::{validate_multiplier, validate_period, SeriesElement};

/// Every tunable used by [`analyze`].
///
/// Missing fields take their defaults when deserialized:
///
/// ```
/// use fund_ta::analysis::AnalysisConfig;
///
/// let config: AnalysisConfig =
///     serde_json::from_str(r#"{ "bollinger": { "multiplier": 2.5 } }"#).unwrap();
/// assert_eq!(config.bollinger.get_period(), 20);
/// assert_eq!(config.moving_average_periods, vec![5, 10, 20]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Periods of the moving averages drawn on the price chart.
    pub moving_average_periods: Vec<usize>,
    /// Bollinger Bands period and multiplier.
    pub bollinger: BollingerBands,
    /// RSI minimum history.
    pub rsi: Rsi,
    /// Volatility minimum history and annualization.
    pub volatility: Volatility,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            moving_average_periods: vec![5, 10, 20],
            bollinger: BollingerBands::default(),
            rsi: Rsi::default(),
            volatility: Volatility::default(),
        }
    }
}

impl AnalysisConfig {
    /// Checks every parameter without touching any price data.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidPeriod` for a zero period anywhere in the configuration
    /// - `Error::InvalidMultiplier` for a non-positive or non-finite multiplier
    pub fn validate(&self) -> Result<()> {
        for &period in &self.moving_average_periods {
            validate_period(period)?;
        }
        validate_period(self.bollinger.get_period())?;
        validate_multiplier(self.bollinger.get_multiplier())?;
        validate_period(self.rsi.get_period())?;
        validate_period(self.volatility.get_period())?;
        validate_period(self.volatility.get_periods_per_year())?;
        Ok(())
    }
}

/// A moving average tagged with its period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAverageSeries<T> {
    /// Window length.
    pub period: usize,
    /// One entry per price; `None` during warm-up.
    pub values: Vec<Option<T>>,
}

/// Every indicator for one fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundAnalysis<T, D> {
    /// Most recent price, if any.
    pub latest_price: Option<T>,
    /// One series per configured moving-average period, in configuration order.
    pub moving_averages: Vec<MovingAverageSeries<T>>,
    /// Support and resistance estimate.
    pub support_resistance: SupportResistance<T>,
    /// Least-squares trend with date-labelled points.
    pub trend: LabeledTrendLine<D, T>,
    /// Bollinger Bands, empty when the history is shorter than the period.
    pub bollinger: BollingerOutput<T>,
    /// Whole-series RSI.
    pub rsi: T,
    /// Annualized volatility of simple returns.
    pub volatility: T,
    /// Percentage below the series high; `None` for an empty history.
    pub distance_from_high: Option<T>,
}

/// Runs every indicator over one fund's price history.
///
/// `dates` labels the trend points and must be as long as `data`.
///
/// # Errors
///
/// - Any parameter error reported by [`AnalysisConfig::validate`]
/// - `Error::LengthMismatch` if `dates` and `data` differ in length
/// - `Error::NonFiniteResult` from any indicator
pub fn analyze<T: SeriesElement, D: Clone>(
    data: &[T],
    dates: &[D],
    config: &AnalysisConfig,
) -> Result<FundAnalysis<T, D>> {
    config.validate()?;

    let trend = trend_line_with_dates(data, dates)?;

    let mut moving_averages = Vec::with_capacity(config.moving_average_periods.len());
    for &period in &config.moving_average_periods {
        moving_averages.push(MovingAverageSeries {
            period,
            values: moving_average(data, period)?,
        });
    }

    let distance_from_high = if data.is_empty() {
        None
    } else {
        Some(distance_from_high(data)?)
    };

    let analysis = FundAnalysis {
        latest_price: data.last().copied(),
        moving_averages,
        support_resistance: support_resistance(data)?,
        trend,
        bollinger: config.bollinger.compute(data)?,
        rsi: config.rsi.compute(data)?,
        volatility: config.volatility.compute(data)?,
        distance_from_high,
    };

    tracing::debug!(
        len = data.len(),
        moving_averages = analysis.moving_averages.len(),
        has_bands = !analysis.bollinger.is_empty(),
        "fund analysis complete"
    );

    Ok(analysis)
}

/// Runs [`analyze`] with the trend points labelled by their index.
///
/// # Errors
///
/// See [`analyze`].
pub fn analyze_unlabeled<T: SeriesElement>(
    data: &[T],
    config: &AnalysisConfig,
) -> Result<FundAnalysis<T, usize>> {
    let indices: Vec<usize> = (0..data.len()).collect();
    analyze(data, &indices, config)
}
