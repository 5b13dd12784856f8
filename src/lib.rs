//! Yaw trajectory estimation from pre-recorded video and sensor logs.
//!
//! Two independent estimator families for the same physical quantity:
//!
//! - [`vision`]: cumulative yaw from two-view relative motion between
//!   strided frames, as a 2D affine approximation or full essential-matrix
//!   pose recovery, with drift correction and outlier gating.
//! - [`fusion`]: gyroscope integration blended with magnetometer heading
//!   via a complementary filter.
//!
//! Nothing in the crate combines the two outputs; that is left to the
//! evaluation harness consuming the trajectories.

pub mod error;
pub mod fusion;
pub mod geometry;
pub mod io;
pub mod vision;

pub use error::InputError;
