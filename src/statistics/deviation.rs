use num_traits::ToPrimitive;

use super::{Mean, Statistic, widen};

/// Sample standard deviation with **Bessel's correction**:
///
/// ```text
/// σ = sqrt( Σ(xᵢ - x̄)² / (n - 1) )
/// ```
///
/// Dividing by `n - 1` instead of `n` makes the underlying variance an
/// unbiased estimator. Undefined for `n < 2`; such inputs yield NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDeviation;

impl<T> Statistic<[T], f64> for StandardDeviation
where
    T: ToPrimitive + Copy,
{
    fn compute(&self, data: &[T]) -> f64 {
        let slice = data.as_ref();
        let n = slice.len();

        // n - 1 degrees of freedom require n ≥ 2
        if n < 2 {
            return f64::NAN;
        }

        let mean = Mean.compute(data);

        // Kahan summation for squared deviations
        let mut sum2 = 0.0_f64;
        let mut c2 = 0.0_f64;
        for x in slice {
            let dev = widen(x) - mean;
            let y = dev * dev - c2;
            let t = sum2 + y;
            c2 = (t - sum2) - y;
            sum2 = t;
        }

        (sum2 / (n - 1) as f64).sqrt()
    }
}
