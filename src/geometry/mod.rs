//! Geometry utilities: camera intrinsics, yaw extraction.

pub mod intrinsics;
pub mod yaw;

pub use intrinsics::CameraIntrinsics;
pub use yaw::{affine_rotation_deg, yaw_from_rotation_deg};
