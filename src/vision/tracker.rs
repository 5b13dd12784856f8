//! Shared cumulative-yaw tracking loop over a strided frame sequence.
//!
//! Both variants run the same loop: pin a reference frame, look `interval`
//! frames ahead, ask the external point tracker for correspondences, turn
//! them into a per-step yaw via the variant strategy, accumulate with
//! drift correction, and emit the cumulative angle once per frame in the
//! interval. Anomalies hold the trajectory instead of aborting the run.

use tracing::{debug, warn};

use crate::error::InputError;
use crate::vision::diagnostics::StepAnomaly;
use crate::vision::drift::{correct_drift, DriftConfig};
use crate::vision::gate::gate_step;
use crate::vision::solver::{FrameSequence, KeypointSet, PointTracker};
use crate::vision::variant::StepEstimator;

/// Tunables shared by both tracker variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    /// Frames between estimation steps. Comparing strided frames yields a
    /// larger, more measurable motion than frame-by-frame estimation; the
    /// trajectory is flattened back to per-frame granularity by
    /// repetition, not interpolation.
    pub interval: usize,
    pub drift: DriftConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            interval: 20,
            drift: DriftConfig::default(),
        }
    }
}

/// Phase of a tracking run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    /// Reference frame pinned, no estimate attempted yet.
    ReferenceSet,
    /// Last interval produced a motion estimate.
    Estimating,
    /// Last interval was held: insufficient matches or a solver anomaly.
    LowConfidence,
    /// Sequence exhausted.
    Done,
}

/// Per-frame yaw trajectory plus the anomalies absorbed along the way.
#[derive(Debug, Clone)]
pub struct TrackOutput {
    /// One cumulative-angle entry per frame covered by a processed
    /// interval, degrees.
    pub angles_deg: Vec<f64>,
    pub anomalies: Vec<StepAnomaly>,
}

enum StepOutcome {
    /// Accumulate this delta. A gated outlier advances with a zero delta
    /// and carries its anomaly record.
    Advance(f64, Option<StepAnomaly>),
    /// Hold the last cumulative angle for the interval.
    Hold(StepAnomaly),
}

/// Cumulative yaw tracker, generic over the per-variant strategy.
///
/// Owns its cumulative-angle state exclusively for the duration of one
/// [`track`](Self::track) call; the state is reset at the start of each
/// run.
pub struct YawTracker<E> {
    config: TrackerConfig,
    estimator: E,
    state: TrackerState,
}

impl<E: StepEstimator> YawTracker<E> {
    pub fn new(config: TrackerConfig, estimator: E) -> Result<Self, InputError> {
        if config.interval == 0 {
            return Err(InputError::ZeroInterval);
        }
        Ok(Self {
            config,
            estimator,
            state: TrackerState::ReferenceSet,
        })
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// Run over the full frame sequence and produce the per-frame yaw
    /// trajectory.
    ///
    /// Fails fast on structural input violations; every per-step anomaly
    /// is absorbed and reported in the output instead.
    pub fn track<F, K, P>(
        &mut self,
        frames: &F,
        keypoints: &K,
        point_tracker: &mut P,
    ) -> Result<TrackOutput, InputError>
    where
        F: FrameSequence,
        K: KeypointSet,
        P: PointTracker<F::Frame>,
    {
        if keypoints.frames() < frames.len() {
            return Err(InputError::KeypointFrameMismatch {
                keypoint_frames: keypoints.frames(),
                frames: frames.len(),
            });
        }

        let interval = self.config.interval;
        let total = frames.len();

        let mut angles = Vec::new();
        let mut anomalies = Vec::new();
        let mut cumulative = 0.0_f64;
        let mut reference = 0_usize;
        self.state = TrackerState::ReferenceSet;

        while reference + interval < total {
            let current = reference + interval;

            match self.estimate_step(frames, keypoints, point_tracker, reference, current) {
                StepOutcome::Advance(delta, anomaly) => {
                    cumulative += delta;
                    cumulative = correct_drift(cumulative, &self.config.drift);
                    self.state = TrackerState::Estimating;
                    debug!(
                        frame = reference,
                        step_deg = delta,
                        cumulative_deg = cumulative,
                        "accumulated step"
                    );
                    if let Some(anomaly) = anomaly {
                        anomalies.push(anomaly);
                    }
                }
                StepOutcome::Hold(anomaly) => {
                    warn!(frame = reference, ?anomaly, "holding cumulative angle");
                    anomalies.push(anomaly);
                    self.state = TrackerState::LowConfidence;
                }
            }

            // Flatten back to per-frame granularity by repetition.
            angles.extend(std::iter::repeat(cumulative).take(interval));
            reference = current;
        }

        self.state = TrackerState::Done;
        self.estimator.finish(&mut angles);

        Ok(TrackOutput {
            angles_deg: angles,
            anomalies,
        })
    }

    fn estimate_step<F, K, P>(
        &mut self,
        frames: &F,
        keypoints: &K,
        point_tracker: &mut P,
        reference: usize,
        current: usize,
    ) -> StepOutcome
    where
        F: FrameSequence,
        K: KeypointSet,
        P: PointTracker<F::Frame>,
    {
        let pairs = match point_tracker.track(
            frames.frame(reference),
            frames.frame(current),
            keypoints.keypoints(reference),
        ) {
            Ok(pairs) => pairs,
            Err(err) => {
                return StepOutcome::Hold(StepAnomaly::NumericalError {
                    frame: reference,
                    detail: err.0,
                })
            }
        };

        let required = self.estimator.min_matches();
        if pairs.len() < required {
            return StepOutcome::Hold(StepAnomaly::InsufficientMatches {
                frame: reference,
                found: pairs.len(),
                required,
            });
        }

        let step = match self.estimator.step_angle(&pairs) {
            Ok(Some(step)) => step,
            Ok(None) => return StepOutcome::Hold(StepAnomaly::EstimatorFailure { frame: reference }),
            Err(err) => {
                return StepOutcome::Hold(StepAnomaly::NumericalError {
                    frame: reference,
                    detail: err.0,
                })
            }
        };

        if let Some(max_step_deg) = self.estimator.max_step_deg() {
            if gate_step(step, max_step_deg).is_none() {
                // Policy rejection, not an error: the step contributes
                // zero but the run keeps advancing.
                warn!(frame = reference, step_deg = step, max_step_deg, "rejected outlier step");
                return StepOutcome::Advance(
                    0.0,
                    Some(StepAnomaly::OutlierStep {
                        frame: reference,
                        step_deg: step,
                        max_step_deg,
                    }),
                );
            }
        }

        StepOutcome::Advance(step, None)
    }
}
