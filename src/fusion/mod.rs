//! Inertial/magnetic yaw estimation: gyro integration blended with
//! magnetometer heading via a complementary filter.

pub mod calibration;
pub mod complementary;
pub mod sample;
pub mod series;

pub use calibration::{calibrate_hard_iron, HardIronOffsets};
pub use complementary::{fuse, FusedTrajectory, FusionConfig};
pub use sample::{GyroSample, MagSample};
pub use series::{interp, unwrap_angles};
