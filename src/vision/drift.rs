//! Drift correction for cumulative angle estimates.

/// Drift-correction tunables.
///
/// The correction is a slow leak back toward the `threshold_deg` band, not
/// a hard clamp: each call removes `factor` times the excess magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftConfig {
    /// Magnitude below which the angle is left untouched (degrees).
    pub threshold_deg: f64,
    /// Fraction of the excess removed per step, expected in (0, 1).
    pub factor: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            threshold_deg: 5.0,
            factor: 0.001,
        }
    }
}

/// Pull `angle_deg` toward zero once its magnitude exceeds the threshold,
/// proportionally to the excess. Pure; applied once per accumulation step.
pub fn correct_drift(angle_deg: f64, config: &DriftConfig) -> f64 {
    if angle_deg.abs() < config.threshold_deg {
        return angle_deg;
    }
    let correction = config.factor * (angle_deg.abs() - config.threshold_deg);
    angle_deg - angle_deg.signum() * correction
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_below_threshold_unchanged() {
        let cfg = DriftConfig::default();
        for angle in [-4.99, -1.0, 0.0, 2.5, 4.99] {
            assert_relative_eq!(correct_drift(angle, &cfg), angle);
        }
    }

    #[test]
    fn test_excess_reduced_by_factor() {
        let cfg = DriftConfig {
            threshold_deg: 5.0,
            factor: 0.1,
        };
        // angle = threshold + x  ->  corrected by factor * x
        let angle = 15.0;
        let corrected = correct_drift(angle, &cfg);
        assert_relative_eq!(corrected, 15.0 - 0.1 * 10.0);
        assert!(corrected < angle);
    }

    #[test]
    fn test_sign_preserved() {
        let cfg = DriftConfig {
            threshold_deg: 5.0,
            factor: 0.1,
        };
        let corrected = correct_drift(-20.0, &cfg);
        assert_relative_eq!(corrected, -20.0 + 0.1 * 15.0);
        assert!(corrected < 0.0);
    }

    #[test]
    fn test_no_overshoot_for_small_factor() {
        let cfg = DriftConfig::default();
        let mut angle = 80.0;
        for _ in 0..10_000 {
            let next = correct_drift(angle, &cfg);
            assert!(next <= angle);
            assert!(next >= 0.0);
            angle = next;
        }
        // Leaks toward the threshold band, never past it.
        assert!(angle >= cfg.threshold_deg);
    }
}
