use num_traits::ToPrimitive;

use crate::error::MomentError;
use crate::statistics::{Kurtosis, Mean, Skewness, StandardDeviation, Statistic, widen};

/// Owns a numeric sequence and computes its shape statistics.
///
/// The stored sequence is exclusively owned: [`MomentStatistics::sequence`]
/// returns a copy, and compute operations never mutate it. Nothing is cached
/// between calls — every statistic re-derives the mean and standard deviation
/// from the stored data, so skewness and kurtosis always agree on those
/// intermediates regardless of call order.
///
/// Two moment semantics are available:
/// - [`MomentStatistics::new`] — conventional signed moments (default), and
/// - [`MomentStatistics::of_magnitudes`] — moments of `|xᵢ|`, for data sets
///   where only magnitudes carry meaning. The two differ whenever the
///   sequence contains negative values.
///
/// # Examples
///
/// ```
/// use shapestats::MomentStatistics;
///
/// let stats = MomentStatistics::new(vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
/// assert_eq!(stats.skewness()?, 0.0);
/// assert!((stats.kurtosis()? - (-1.912)).abs() < 1e-12);
/// # Ok::<(), shapestats::MomentError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MomentStatistics<T> {
    data: Vec<T>,
    absolute_values: bool,
}

impl<T> MomentStatistics<T> {
    /// Create from raw data, computing conventional signed moments.
    pub fn new(values: Vec<T>) -> Self {
        Self {
            data: values,
            absolute_values: false,
        }
    }

    /// Create from raw data, applying element-wise `|x|` before any
    /// statistic is computed.
    pub fn of_magnitudes(values: Vec<T>) -> Self {
        Self {
            data: values,
            absolute_values: true,
        }
    }

    /// Replace the stored sequence entirely. The moment semantics chosen at
    /// construction are kept.
    pub fn set_sequence(&mut self, values: Vec<T>) {
        self.data = values;
    }

    /// Number of observations in the stored sequence.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the stored sequence contains no observations.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Fails with [`MomentError::InvalidInput`] unless `n ≥ required`.
    fn require(&self, required: usize) -> Result<(), MomentError> {
        let len = self.data.len();
        if len < required {
            return Err(MomentError::InvalidInput { len });
        }
        Ok(())
    }
}

impl<T: Clone> MomentStatistics<T> {
    /// Copy of the stored sequence. Never aliases internal storage, so the
    /// caller cannot mutate this instance through the returned vector.
    pub fn sequence(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T: ToPrimitive + Copy> MomentStatistics<T> {
    /// Arithmetic mean of the (optionally magnitude-transformed) sequence.
    ///
    /// # Errors
    /// [`MomentError::InvalidInput`] if the sequence is empty.
    pub fn mean(&self) -> Result<f64, MomentError> {
        self.require(1)?;
        Ok(Mean.compute(&self.observations()))
    }

    /// Bessel-corrected sample standard deviation.
    ///
    /// # Errors
    /// [`MomentError::InvalidInput`] if `n ≤ 1` (the `n - 1` denominator
    /// would be zero or negative).
    pub fn std_dev(&self) -> Result<f64, MomentError> {
        self.require(2)?;
        Ok(StandardDeviation.compute(&self.observations()))
    }

    /// Sample skewness, `Σ(xᵢ - x̄)³ / (n·σ³)`.
    ///
    /// A zero-variance sequence yields NaN (0/0); that is a result, not an
    /// error.
    ///
    /// # Errors
    /// [`MomentError::InvalidInput`] if `n ≤ 1`.
    pub fn skewness(&self) -> Result<f64, MomentError> {
        self.require(2)?;
        Ok(Skewness.compute(&self.observations()))
    }

    /// Sample excess kurtosis, `Σ(xᵢ - x̄)⁴ / (n·σ⁴) - 3`.
    ///
    /// A zero-variance sequence yields NaN (0/0); that is a result, not an
    /// error.
    ///
    /// # Errors
    /// [`MomentError::InvalidInput`] if `n ≤ 1`.
    pub fn kurtosis(&self) -> Result<f64, MomentError> {
        self.require(2)?;
        Ok(Kurtosis.compute(&self.observations()))
    }

    /// Per-call scratch buffer: elements widened to the `f64` accumulator,
    /// with the magnitude transform applied when configured. Dropped on
    /// return, so no intermediate can alias the stored sequence.
    fn observations(&self) -> Vec<f64> {
        let widened = self.data.iter().map(widen);
        if self.absolute_values {
            widened.map(f64::abs).collect()
        } else {
            widened.collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn reference_values_f64() {
        let stats = MomentStatistics::new(vec![-2.0_f64, -1.0, 0.0, 1.0, 2.0]);
        assert_abs_diff_eq!(stats.mean().unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(stats.std_dev().unwrap(), 2.5_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(stats.skewness().unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(stats.kurtosis().unwrap(), -1.912, epsilon = 1e-12);
    }

    #[test]
    fn reference_values_i64() {
        // [1..5] is [-2..2] shifted by 3: identical central moments
        let stats = MomentStatistics::new(vec![1_i64, 2, 3, 4, 5]);
        assert_abs_diff_eq!(stats.mean().unwrap(), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(stats.std_dev().unwrap(), 2.5_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(stats.skewness().unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(stats.kurtosis().unwrap(), -1.912, epsilon = 1e-12);
    }

    #[test]
    fn empty_and_single_element_fail_with_invalid_input() {
        let empty = MomentStatistics::<f64>::new(vec![]);
        assert_eq!(empty.skewness(), Err(MomentError::InvalidInput { len: 0 }));
        assert_eq!(empty.kurtosis(), Err(MomentError::InvalidInput { len: 0 }));
        assert_eq!(empty.mean(), Err(MomentError::InvalidInput { len: 0 }));

        let single = MomentStatistics::new(vec![3.0_f64]);
        assert_eq!(single.skewness(), Err(MomentError::InvalidInput { len: 1 }));
        assert_eq!(single.kurtosis(), Err(MomentError::InvalidInput { len: 1 }));
        assert_abs_diff_eq!(single.mean().unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn constant_sequence_yields_nan_not_error() {
        let stats = MomentStatistics::new(vec![5.0_f64; 4]);
        assert_abs_diff_eq!(stats.std_dev().unwrap(), 0.0, epsilon = 0.0);
        // Both power sums and σ are exactly zero, so both statistics are 0/0
        assert!(stats.skewness().unwrap().is_nan());
        assert!(stats.kurtosis().unwrap().is_nan());
    }

    #[test]
    fn computation_does_not_mutate_stored_sequence() {
        let original = vec![4.0_f64, 8.0, 15.0, 16.0, 23.0, 42.0];
        let stats = MomentStatistics::new(original.clone());
        let _ = stats.skewness().unwrap();
        let _ = stats.kurtosis().unwrap();
        assert_eq!(stats.sequence(), original);
        assert_eq!(stats.len(), 6);
    }

    #[test]
    fn returned_sequence_does_not_alias_storage() {
        let stats = MomentStatistics::new(vec![1.0_f64, 2.0, 3.0]);
        let mut copy = stats.sequence();
        copy.clear();
        assert_eq!(stats.sequence(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn set_sequence_fully_replaces_state() {
        let mut stats = MomentStatistics::new(vec![-2.0_f64, -1.0, 0.0, 1.0, 2.0]);
        let before = stats.kurtosis().unwrap();
        assert_abs_diff_eq!(before, -1.912, epsilon = 1e-12);

        stats.set_sequence(vec![5.0, 5.0, 5.0, 5.0]);
        assert_eq!(stats.sequence(), vec![5.0, 5.0, 5.0, 5.0]);
        assert!(stats.kurtosis().unwrap().is_nan());
    }

    #[test]
    fn call_order_shares_mean_and_deviation() {
        let data = vec![2.5_f64, 3.7, 1.1, 9.6, 4.4, 0.2];
        let forward = MomentStatistics::new(data.clone());
        let skew_first = (forward.skewness().unwrap(), forward.kurtosis().unwrap());

        let reverse = MomentStatistics::new(data.clone());
        let kurt_first = {
            let k = reverse.kurtosis().unwrap();
            let s = reverse.skewness().unwrap();
            (s, k)
        };
        assert_abs_diff_eq!(skew_first.0, kurt_first.0, epsilon = 1e-15);
        assert_abs_diff_eq!(skew_first.1, kurt_first.1, epsilon = 1e-15);

        // Cross-check both formulas against the exposed intermediates
        let mean = forward.mean().unwrap();
        let sigma = forward.std_dev().unwrap();
        let n = data.len() as f64;
        let sum3: f64 = data.iter().map(|x| (x - mean).powi(3)).sum();
        let sum4: f64 = data.iter().map(|x| (x - mean).powi(4)).sum();
        assert_abs_diff_eq!(skew_first.0, sum3 / (n * sigma.powi(3)), epsilon = 1e-12);
        assert_abs_diff_eq!(skew_first.1, sum4 / (n * sigma.powi(4)) - 3.0, epsilon = 1e-12);
    }

    #[test]
    fn magnitude_moments_differ_only_for_negative_input() {
        let signed = MomentStatistics::new(vec![-2.0_f64, -1.0, 0.0, 1.0, 2.0]);
        let magnitudes = MomentStatistics::of_magnitudes(vec![-2.0_f64, -1.0, 0.0, 1.0, 2.0]);

        // |x| folds the sequence to [2, 1, 0, 1, 2]: x̄ = 1.2, Σd² = 2.8,
        // Σd³ = -0.72, Σd⁴ = 2.896
        let sigma = (2.8_f64 / 4.0).sqrt();
        assert_abs_diff_eq!(magnitudes.mean().unwrap(), 1.2, epsilon = 1e-12);
        assert_abs_diff_eq!(magnitudes.std_dev().unwrap(), sigma, epsilon = 1e-12);
        assert_abs_diff_eq!(
            magnitudes.skewness().unwrap(),
            -0.72 / (5.0 * sigma.powi(3)),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            magnitudes.kurtosis().unwrap(),
            2.896 / (5.0 * sigma.powi(4)) - 3.0,
            epsilon = 1e-12
        );

        // The signed variant sees the raw symmetric data
        assert_abs_diff_eq!(signed.skewness().unwrap(), 0.0, epsilon = 1e-12);

        // Non-negative input: both semantics coincide
        let raw = MomentStatistics::new(vec![1.0_f64, 2.0, 3.0, 10.0]);
        let abs = MomentStatistics::of_magnitudes(vec![1.0_f64, 2.0, 3.0, 10.0]);
        assert_abs_diff_eq!(raw.skewness().unwrap(), abs.skewness().unwrap(), epsilon = 0.0);
        assert_abs_diff_eq!(raw.kurtosis().unwrap(), abs.kurtosis().unwrap(), epsilon = 0.0);
    }

    #[test]
    fn magnitude_semantics_survive_set_sequence() {
        let mut stats = MomentStatistics::of_magnitudes(vec![1.0_f64, 1.0]);
        stats.set_sequence(vec![-3.0, -3.0, 3.0, 3.0]);
        // All magnitudes equal 3: zero variance, NaN statistics
        assert_abs_diff_eq!(stats.std_dev().unwrap(), 0.0, epsilon = 0.0);
        assert!(stats.skewness().unwrap().is_nan());
    }
}
