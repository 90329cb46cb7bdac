//! Error types for fund-ta.
//!
//! This module defines the error types returned by the indicator functions.
//! Short or empty price series are not errors: every indicator documents a
//! degrade branch for them. Errors are reserved for invalid parameters and for
//! results that are not finite.

use thiserror::Error;

/// The main error type for fund-ta operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The period parameter is invalid.
    ///
    /// This error is returned when the period is zero.
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// The standard-deviation multiplier is invalid.
    ///
    /// The multiplier must be finite and strictly positive.
    #[error("invalid multiplier {multiplier}: {reason}")]
    InvalidMultiplier {
        /// The invalid multiplier, widened to `f64` for reporting.
        multiplier: f64,
        /// Description of why the multiplier is invalid.
        reason: &'static str,
    },

    /// A label series does not line up with the price series.
    #[error("{indicator}: {labels} labels supplied for {prices} prices")]
    LengthMismatch {
        /// Name of the indicator that rejected the input.
        indicator: &'static str,
        /// Length of the price series.
        prices: usize,
        /// Length of the label series.
        labels: usize,
    },

    /// The input data series is empty and the operation has no fallback.
    #[error("empty input: no data provided")]
    EmptyInput,

    /// A computed value was NaN or infinite.
    ///
    /// Realistic price data never triggers this. It surfaces when the input
    /// itself carries NaN/infinity or when a division degenerates (for example
    /// a zero price in a return calculation).
    #[error("{indicator}: non-finite result at index {index}")]
    NonFiniteResult {
        /// Name of the indicator that produced the value.
        indicator: &'static str,
        /// Position in the output where the value appeared.
        index: usize,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This error occurs when using `NumCast::from()` to convert values
    /// (e.g., converting a `usize` period to a generic `Float` type) and
    /// the conversion fails.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A caller-supplied parameter was rejected before any computation.
    InvalidParameter,
    /// The input had no data and the operation has no degrade branch.
    InsufficientData,
    /// The computation produced a value that cannot be reported.
    Computation,
}

impl Error {
    /// Returns the class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPeriod { .. }
            | Self::InvalidMultiplier { .. }
            | Self::LengthMismatch { .. } => ErrorKind::InvalidParameter,
            Self::EmptyInput => ErrorKind::InsufficientData,
            Self::NonFiniteResult { .. } | Self::NumericConversion { .. } => {
                ErrorKind::Computation
            }
        }
    }
}

/// Convenience type alias for Results using the fund-ta Error type.
pub type Result<T> = std::result::Result<T, Error>;
