//! Shape statistics for finite numeric sequences.
//!
//! Computes sample skewness (third standardized moment) and sample excess
//! kurtosis (fourth standardized moment minus 3) from the mean, the
//! Bessel-corrected standard deviation, and the 3rd/4th central power sums:
//!
//! ```text
//! σ  = sqrt( Σ(xᵢ - x̄)² / (n - 1) )
//! γ₁ = Σ(xᵢ - x̄)³ / (n·σ³)
//! γ₂ = Σ(xᵢ - x̄)⁴ / (n·σ⁴) - 3
//! ```
//!
//! Two layers are provided:
//! - slice-level estimators ([`Mean`], [`StandardDeviation`], [`Skewness`],
//!   [`Kurtosis`]) behind the [`Statistic`] trait, and
//! - [`MomentStatistics`], an owning component with a stored sequence and a
//!   typed error for inputs too short for the `n - 1` denominator.
//!
//! Element types are generic over anything convertible to `f64`; all internal
//! accumulation happens in `f64` regardless of the element type.

mod error;
mod moments;
mod statistics;

pub use error::MomentError;
pub use moments::MomentStatistics;
pub use statistics::{Kurtosis, Mean, Skewness, StandardDeviation, Statistic};
