//! Slice-level estimators behind the [`Statistic`] trait.

use num_traits::ToPrimitive;

/// An estimator that reduces a data set to a single descriptive value.
pub trait Statistic<D: ?Sized, Out> {
    /// Compute the statistic over `data`.
    fn compute(&self, data: &D) -> Out;
}

mod deviation;
mod kurtosis;
mod mean;
mod skewness;

pub use deviation::StandardDeviation;
pub use kurtosis::Kurtosis;
pub use mean::Mean;
pub use skewness::Skewness;

/// Widen an element to the `f64` accumulator.
///
/// Exact for every integer up to 2⁵³ and for all `f32`/`f64` values.
#[inline]
pub(crate) fn widen<T: ToPrimitive>(x: &T) -> f64 {
    x.to_f64().expect("element-to-f64 conversion failed")
}
