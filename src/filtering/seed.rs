//! Support and magnitude thresholds for seed phrases.
use super::filter::Filter;

/// Keeps a phrase statistic only when it is backed by enough observations
/// and its average sentiment is far enough from zero.
///
/// The same gate runs twice: once on each partition's local statistics and
/// once more on the globally merged ones. Support is compared inclusively,
/// magnitude strictly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedThresholds {
    min_phrase_freq: usize,
    min_abs_weight: f64,
}

impl SeedThresholds {
    pub fn with_limits(min_phrase_freq: usize, min_abs_weight: f64) -> Self {
        Self {
            min_phrase_freq,
            min_abs_weight,
        }
    }

    pub fn min_phrase_freq(&self) -> usize {
        self.min_phrase_freq
    }

    pub fn min_abs_weight(&self) -> f64 {
        self.min_abs_weight
    }
}

impl Default for SeedThresholds {
    /// At least two observations, average magnitude above 1e-6.
    fn default() -> Self {
        Self {
            min_phrase_freq: 2,
            min_abs_weight: 1e-6,
        }
    }
}

impl Filter<(f64, usize)> for SeedThresholds {
    fn detect(&self, (average, support): (f64, usize)) -> bool {
        support >= self.min_phrase_freq && average.abs() > self.min_abs_weight
    }
}

#[cfg(test)]
mod tests {
    use super::super::Filter;
    use super::SeedThresholds;

    #[test]
    fn default_limits() {
        let t = SeedThresholds::default();
        assert_eq!(t.min_phrase_freq(), 2);
        assert_eq!(t.min_abs_weight(), 1e-6);
    }

    #[test]
    fn support_is_inclusive() {
        let t = SeedThresholds::default();
        assert!(!t.detect((0.5, 1)));
        assert!(t.detect((0.5, 2)));
        assert!(t.detect((0.5, 3)));
    }

    #[test]
    fn magnitude_is_strict() {
        let t = SeedThresholds::with_limits(1, 0.1);
        assert!(!t.detect((0.1, 5)));
        assert!(!t.detect((-0.1, 5)));
        assert!(t.detect((0.10001, 5)));
        assert!(t.detect((-0.10001, 5)));
    }

    #[test]
    fn zero_average_always_rejected() {
        let t = SeedThresholds::default();
        assert!(!t.detect((0.0, 100)));
    }
}
