//! Per-variant step estimation strategies.
//!
//! The affine and essential-matrix trackers share the outer loop
//! (striding, hold-on-anomaly, drift correction, trajectory emission);
//! they differ only in the solver's correspondence minimum, the step-angle
//! extraction, the presence of an outlier gate, and where the calibration
//! gain is applied. That variation lives behind [`StepEstimator`].

use crate::geometry::{affine_rotation_deg, yaw_from_rotation_deg, CameraIntrinsics};
use crate::vision::solver::{AffineSolver, EssentialSolver, MatchedPairs, SolverError};

/// Per-step estimation strategy plugged into the shared tracking loop.
pub trait StepEstimator {
    /// Minimum valid correspondences below which the interval is held.
    fn min_matches(&self) -> usize;

    /// Raw per-step yaw in degrees from matched pairs. `Ok(None)` means
    /// the underlying solver reported failure.
    fn step_angle(&mut self, pairs: &MatchedPairs) -> Result<Option<f64>, SolverError>;

    /// Plausibility bound for the outlier gate, if this variant has one.
    fn max_step_deg(&self) -> Option<f64> {
        None
    }

    /// Post-pass over the finished trajectory.
    fn finish(&self, _trajectory: &mut [f64]) {}
}

/// Affine-variant tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineConfig {
    /// Calibration gain applied to every step. Empirically fitted per
    /// camera/lens (3.5 on the original setup); it does not generalize,
    /// which is why there is no default.
    pub scalar_multiplier: f64,
}

impl AffineConfig {
    pub fn new(scalar_multiplier: f64) -> Self {
        Self { scalar_multiplier }
    }
}

/// Affine variant: 2D similarity estimate, no outlier gate. Relies
/// entirely on drift correction for stability.
pub struct AffineVariant<S> {
    solver: S,
    config: AffineConfig,
}

impl<S> AffineVariant<S> {
    pub fn new(solver: S, config: AffineConfig) -> Self {
        Self { solver, config }
    }
}

impl<S: AffineSolver> StepEstimator for AffineVariant<S> {
    fn min_matches(&self) -> usize {
        3
    }

    fn step_angle(&mut self, pairs: &MatchedPairs) -> Result<Option<f64>, SolverError> {
        let matrix = self.solver.estimate(&pairs.reference, &pairs.current)?;
        Ok(matrix.map(|m| affine_rotation_deg(&m) * self.config.scalar_multiplier))
    }
}

/// Essential-variant tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EssentialConfig {
    /// Calibration gain applied, with a sign flip, to the finished
    /// trajectory (1.5 on the original setup). Empirically fitted; no
    /// default.
    pub scalar_multiplier: f64,
    /// RANSAC inlier threshold handed to the essential-matrix solver.
    pub ransac_threshold: f64,
    /// Outlier-gate bound on a single step, degrees.
    pub max_step_deg: f64,
    /// Calibrated intrinsics; `None` derives an approximation from the
    /// frame size at construction.
    pub intrinsics: Option<CameraIntrinsics>,
}

impl EssentialConfig {
    pub fn new(scalar_multiplier: f64) -> Self {
        Self {
            scalar_multiplier,
            ransac_threshold: 1.0,
            max_step_deg: 4.0,
            intrinsics: None,
        }
    }
}

/// Essential-matrix variant: full pose recovery with yaw extraction, a
/// per-step outlier gate, and the calibration gain applied as a signed
/// post-pass.
pub struct EssentialVariant<S> {
    solver: S,
    config: EssentialConfig,
    intrinsics: CameraIntrinsics,
}

impl<S> EssentialVariant<S> {
    /// `frame_size` is `(width, height)` in pixels, used only when the
    /// config carries no calibrated intrinsics.
    pub fn new(solver: S, config: EssentialConfig, frame_size: (u32, u32)) -> Self {
        let intrinsics = config
            .intrinsics
            .unwrap_or_else(|| CameraIntrinsics::approximate_from_frame(frame_size.0, frame_size.1));
        Self {
            solver,
            config,
            intrinsics,
        }
    }

    pub fn intrinsics(&self) -> &CameraIntrinsics {
        &self.intrinsics
    }
}

impl<S: EssentialSolver> StepEstimator for EssentialVariant<S> {
    // The 8-point problem is algebraically underdetermined below 8
    // correspondences.
    fn min_matches(&self) -> usize {
        8
    }

    fn step_angle(&mut self, pairs: &MatchedPairs) -> Result<Option<f64>, SolverError> {
        let rotation = self.solver.recover_rotation(
            &pairs.reference,
            &pairs.current,
            &self.intrinsics,
            self.config.ransac_threshold,
        )?;
        Ok(rotation.map(|r| yaw_from_rotation_deg(&r)))
    }

    fn max_step_deg(&self) -> Option<f64> {
        Some(self.config.max_step_deg)
    }

    fn finish(&self, trajectory: &mut [f64]) {
        for angle in trajectory {
            *angle *= -self.config.scalar_multiplier;
        }
    }
}
