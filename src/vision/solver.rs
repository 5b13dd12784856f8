//! Seams to the external vision collaborators.
//!
//! Keypoint detection, sparse optical-flow point tracking, and the
//! two-view solvers (affine estimation, essential-matrix estimation with
//! pose recovery) live outside this crate. The yaw tracker consumes their
//! outputs through the traits below:
//! - matched point pairs plus an implicit validity mask (only surviving
//!   pairs are returned),
//! - a motion matrix or rotation matrix, with `Ok(None)` as the
//!   failure/degenerate flag,
//! - `Err(SolverError)` for numerical failures inside the solver.

use nalgebra::{Matrix2x3, Matrix3, Point2};
use thiserror::Error;

use crate::geometry::CameraIntrinsics;

/// Computation failure inside an external solver, e.g. an ill-conditioned
/// system. The tracker recovers from these; they never abort a run.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("two-view solver error: {0}")]
pub struct SolverError(pub String);

/// Random-accessible ordered frame sequence.
///
/// The core never inspects pixels; frames are only handed through to the
/// point tracker, so `Frame` stays fully opaque.
pub trait FrameSequence {
    type Frame;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn frame(&self, index: usize) -> &Self::Frame;
}

/// Per-frame keypoint locations from the external detector, indexed
/// identically to the frame sequence.
pub trait KeypointSet {
    /// Number of frames the set covers.
    fn frames(&self) -> usize;

    fn keypoints(&self, frame: usize) -> &[Point2<f64>];
}

/// Correspondences surviving the external point tracker for one frame
/// pair. Entry `i` of `reference` matches entry `i` of `current`; pairs
/// the tracker's validity mask dropped are not included.
#[derive(Debug, Clone, Default)]
pub struct MatchedPairs {
    pub reference: Vec<Point2<f64>>,
    pub current: Vec<Point2<f64>>,
}

impl MatchedPairs {
    pub fn len(&self) -> usize {
        self.reference.len().min(self.current.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// External sparse point tracker (e.g. pyramidal Lucas-Kanade): given the
/// reference frame's keypoints, returns the correspondences it could
/// follow into the current frame.
pub trait PointTracker<F> {
    fn track(
        &mut self,
        reference: &F,
        current: &F,
        keypoints: &[Point2<f64>],
    ) -> Result<MatchedPairs, SolverError>;
}

/// External 2D similarity/affine estimator (RANSAC internally).
///
/// `Ok(None)` signals a degenerate or failed estimate.
pub trait AffineSolver {
    fn estimate(
        &mut self,
        reference: &[Point2<f64>],
        current: &[Point2<f64>],
    ) -> Result<Option<Matrix2x3<f64>>, SolverError>;
}

/// External essential-matrix estimator plus pose recovery: returns the
/// relative rotation between the two views.
///
/// `Ok(None)` signals an invalid essential matrix.
pub trait EssentialSolver {
    fn recover_rotation(
        &mut self,
        reference: &[Point2<f64>],
        current: &[Point2<f64>],
        intrinsics: &CameraIntrinsics,
        ransac_threshold: f64,
    ) -> Result<Option<Matrix3<f64>>, SolverError>;
}
