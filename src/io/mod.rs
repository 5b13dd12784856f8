//! Sensor-log loading and trajectory export.

pub mod export;
pub mod sensor_log;

pub use export::write_trajectory_csv;
pub use sensor_log::{load_gyro_log, load_mag_log};
