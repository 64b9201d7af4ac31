use std::error::Error as StdError;
use std::fmt;

/// Errors produced by [`crate::MomentStatistics`] compute operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MomentError {
    /// The stored sequence has too few observations for the requested
    /// statistic. Skewness and kurtosis divide by `n - 1` inside the
    /// standard deviation, so they require `n ≥ 2`; the mean requires
    /// `n ≥ 1`.
    InvalidInput {
        /// Length of the stored sequence at the time of the call.
        len: usize,
    },
}

impl fmt::Display for MomentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MomentError::InvalidInput { len } => write!(
                f,
                "invalid input: sequence of length {len} has too few observations for the requested statistic"
            ),
        }
    }
}

impl StdError for MomentError {}
