use num_traits::ToPrimitive;

use super::{Statistic, widen};

/// Arithmetic mean, accumulated in `f64` with **Kahan summation** to
/// minimize floating-point error accumulation. This matters when:
/// - Summing >10⁴ values
/// - Values have large dynamic range
/// - High precision is required for downstream moments
///
/// An empty slice yields IEEE NaN (0/0).
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl<T> Statistic<[T], f64> for Mean
where
    T: ToPrimitive + Copy,
{
    fn compute(&self, data: &[T]) -> f64 {
        let slice = data.as_ref();

        // Kahan summation: compensates for floating-point rounding errors
        let mut sum = 0.0_f64;
        let mut c = 0.0_f64;

        for x in slice {
            let y = widen(x) - c;
            let t = sum + y;
            c = (t - sum) - y;
            sum = t;
        }

        // Length conversion is exact for practical dataset sizes
        // (f64: exact ≤ 9 quadrillion elements)
        sum / slice.len() as f64
    }
}
