//! Per-step outlier rejection.

/// Gate a per-step rotation against a plausibility bound.
///
/// Returns `Some(step)` when the step is plausible and `None` when its
/// magnitude exceeds `max_step_deg`. A rejected step is discarded, not
/// clamped: it contributes zero for the interval, so a single gross
/// misestimate cannot kick the cumulative angle. A real sustained turn is
/// still picked up over subsequent intervals because the bound applies per
/// interval.
pub fn gate_step(step_deg: f64, max_step_deg: f64) -> Option<f64> {
    if step_deg.abs() > max_step_deg {
        None
    } else {
        Some(step_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plausible_step_passes_through() {
        assert_eq!(gate_step(2.0, 4.0), Some(2.0));
        assert_eq!(gate_step(-3.9, 4.0), Some(-3.9));
        assert_eq!(gate_step(4.0, 4.0), Some(4.0));
    }

    #[test]
    fn test_outlier_step_discarded() {
        assert_eq!(gate_step(50.0, 4.0), None);
        assert_eq!(gate_step(-4.01, 4.0), None);
    }
}
