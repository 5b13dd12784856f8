//! Structured per-step anomaly events.
//!
//! Anomalies are absorbed by the tracker (the trajectory holds, or the
//! step contributes zero) and surfaced as data so callers and tests can
//! assert on what happened without parsing log text.

/// What went wrong at one estimation step. `frame` is the reference frame
/// index of the interval in which the anomaly occurred.
#[derive(Debug, Clone, PartialEq)]
pub enum StepAnomaly {
    /// Fewer valid correspondences than the solver minimum; the interval
    /// held the last cumulative angle.
    InsufficientMatches {
        frame: usize,
        found: usize,
        required: usize,
    },
    /// The two-view solver returned an invalid or degenerate result; the
    /// interval held the last cumulative angle.
    EstimatorFailure { frame: usize },
    /// The two-view solver raised during computation; the interval held
    /// the last cumulative angle.
    NumericalError { frame: usize, detail: String },
    /// Step magnitude exceeded the plausibility bound and contributed
    /// zero (essential-matrix variant only).
    OutlierStep {
        frame: usize,
        step_deg: f64,
        max_step_deg: f64,
    },
}

impl StepAnomaly {
    /// Reference frame index the anomaly was observed at.
    pub fn frame(&self) -> usize {
        match *self {
            StepAnomaly::InsufficientMatches { frame, .. }
            | StepAnomaly::EstimatorFailure { frame }
            | StepAnomaly::NumericalError { frame, .. }
            | StepAnomaly::OutlierStep { frame, .. } => frame,
        }
    }
}
