use num_traits::ToPrimitive;

use super::{Mean, Statistic, widen};

/// Sample skewness (third standardized moment).
///
/// ```text
/// γ₁ = Σ(xᵢ - x̄)³ / (n·σ³)
/// ```
///
/// with `σ` the Bessel-corrected sample standard deviation. Symmetric data
/// yields 0; right-tailed data yields positive values.
///
/// Requires `n ≥ 2`; shorter inputs yield NaN. Zero-variance input flows
/// through IEEE arithmetic unchanged: Σ(xᵢ - x̄)³ and σ are then both zero,
/// so the result is NaN (0/0). That is a legitimate mathematical outcome,
/// not an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Skewness;

impl<T> Statistic<[T], f64> for Skewness
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

        // Single-pass Kahan summation for the 2nd and 3rd central power sums
        let mut sum2 = 0.0_f64;
        let mut sum3 = 0.0_f64;
        let mut c2 = 0.0_f64;
        let mut c3 = 0.0_f64;

        for x in slice {
            let dev = widen(x) - mean;
            // Products keep integer-exponent semantics for negative bases
            let dev2 = dev * dev;
            let dev3 = dev2 * dev;

            // Kahan for Σdev²
            let y2 = dev2 - c2;
            let t2 = sum2 + y2;
            c2 = (t2 - sum2) - y2;
            sum2 = t2;

            // Kahan for Σdev³
            let y3 = dev3 - c3;
            let t3 = sum3 + y3;
            c3 = (t3 - sum3) - y3;
            sum3 = t3;
        }

        let sigma = (sum2 / (n - 1) as f64).sqrt();
        sum3 / (n as f64 * sigma * sigma * sigma)
    }
}
