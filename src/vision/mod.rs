//! Vision-based yaw estimation from two-view relative motion.
//!
//! The pipeline: strided frame pairs -> external point tracker -> matched
//! pairs -> per-variant two-view solver -> per-step yaw -> outlier gate
//! (essential variant) -> drift-corrected cumulative angle -> per-frame
//! trajectory.

pub mod diagnostics;
pub mod drift;
pub mod gate;
pub mod solver;
pub mod tracker;
pub mod variant;

pub use diagnostics::StepAnomaly;
pub use drift::{correct_drift, DriftConfig};
pub use gate::gate_step;
pub use solver::{
    AffineSolver, EssentialSolver, FrameSequence, KeypointSet, MatchedPairs, PointTracker,
    SolverError,
};
pub use tracker::{TrackOutput, TrackerConfig, TrackerState, YawTracker};
pub use variant::{AffineConfig, AffineVariant, EssentialConfig, EssentialVariant, StepEstimator};
