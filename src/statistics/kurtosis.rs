use num_traits::ToPrimitive;

use super::{Mean, Statistic, widen};

/// Sample excess kurtosis (fourth standardized moment, centered at 0 for a
/// normal distribution).
///
/// ```text
/// γ₂ = Σ(xᵢ - x̄)⁴ / (n·σ⁴) - 3
/// ```
///
/// with `σ` the Bessel-corrected sample standard deviation. The `- 3`
/// subtracts the kurtosis of the normal distribution, so heavy-tailed data
/// yields positive values and platykurtic data negative ones.
///
/// Requires `n ≥ 2`; shorter inputs yield NaN. Zero-variance input flows
/// through IEEE arithmetic unchanged and produces NaN (0/0).
#[derive(Debug, Clone, Copy, Default)]
pub struct Kurtosis;

impl<T> Statistic<[T], f64> for Kurtosis
where
    T: ToPrimitive + Copy,
{
    fn compute(&self, data: &[T]) -> f64 {
        let slice = data.as_ref();
        let n = slice.len();
        if n < 2 {
            return f64::NAN;
        }

        let mean = Mean.compute(data);

        // Single-pass Kahan summation for the 2nd and 4th central power sums
        let mut sum2 = 0.0_f64;
        let mut sum4 = 0.0_f64;
        let mut c2 = 0.0_f64;
        let mut c4 = 0.0_f64;

        for x in slice {
            let dev = widen(x) - mean;
            let dev2 = dev * dev;
            let dev4 = dev2 * dev2;

            // Kahan for Σdev²
            let y2 = dev2 - c2;
            let t2 = sum2 + y2;
            c2 = (t2 - sum2) - y2;
            sum2 = t2;

            // Kahan for Σdev⁴
            let y4 = dev4 - c4;
            let t4 = sum4 + y4;
            c4 = (t4 - sum4) - y4;
            sum4 = t4;
        }

        let sigma = (sum2 / (n - 1) as f64).sqrt();
        let sigma2 = sigma * sigma;
        sum4 / (n as f64 * sigma2 * sigma2) - 3.0
    }
}
