//! Gyro-magnetometer complementary fusion.
//!
//! Blends the gyroscope's short-term dynamics with the magnetometer's
//! long-term stability by fusing per-sample increments, not absolute
//! headings: each output step adds `alpha` times the integrated gyro delta
//! and `1 - alpha` times the interpolated magnetometer heading delta.

use tracing::debug;

use crate::error::InputError;
use crate::fusion::sample::{validate_stream, GyroSample, MagSample};
use crate::fusion::series::{interp, unwrap_angles};

/// Fuser tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusionConfig {
    /// Gyro weight in the increment blend, in [0, 1]. Close to 1 trusts
    /// the gyro for short-term dynamics while the magnetometer increment
    /// leaks out accumulated drift.
    pub alpha: f64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self { alpha: 0.998 }
    }
}

/// The three aligned yaw trajectories, all on the gyroscope time base and
/// all starting at zero degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct FusedTrajectory {
    pub time_s: Vec<f64>,
    /// Forward-Euler integration of the gyro rate alone.
    pub gyro_deg: Vec<f64>,
    /// Relative, unwrapped magnetometer heading resampled onto the gyro
    /// time base.
    pub mag_deg: Vec<f64>,
    /// Complementary-filtered estimate.
    pub fused_deg: Vec<f64>,
}

/// Fuse a gyroscope stream with a magnetometer stream into a yaw
/// trajectory on the gyroscope time base.
///
/// Fails fast with [`InputError`] when either stream has fewer than two
/// samples or non-monotonic timestamps; no partial output is produced.
pub fn fuse(
    gyro: &[GyroSample],
    mag: &[MagSample],
    config: &FusionConfig,
) -> Result<FusedTrajectory, InputError> {
    validate_stream("gyroscope", gyro, |s| s.timestamp_s)?;
    validate_stream("magnetometer", mag, |s| s.timestamp_s)?;

    let time_s: Vec<f64> = gyro.iter().map(|s| s.timestamp_s).collect();

    // Magnetometer heading relative to the first sample, unwrapped so the
    // +-180 degree boundary never shows up as a jump.
    let initial_heading = mag[0].heading_rad();
    let mut mag_heading: Vec<f64> = mag.iter().map(|s| s.heading_rad() - initial_heading).collect();
    unwrap_angles(&mut mag_heading);
    let mag_heading_deg: Vec<f64> = mag_heading.iter().map(|a| a.to_degrees()).collect();
    let mag_time: Vec<f64> = mag.iter().map(|s| s.timestamp_s).collect();

    // Resample onto the gyro time base.
    let mag_deg = interp(&time_s, &mag_time, &mag_heading_deg);

    // Forward-Euler gyro integration; the first sample has no rate
    // history, so its angle is zero by definition. Accumulated in degrees
    // with the same per-step deltas the filter below uses, so alpha = 1
    // reproduces this trajectory exactly.
    let mut gyro_deg = vec![0.0; gyro.len()];
    for i in 1..gyro.len() {
        let dt = time_s[i] - time_s[i - 1];
        gyro_deg[i] = gyro_deg[i - 1] + (gyro[i].rate_rad_s * dt).to_degrees();
    }

    // Complementary blend of increments.
    let mut fused_deg = vec![0.0; gyro.len()];
    for i in 1..gyro.len() {
        let dt = time_s[i] - time_s[i - 1];
        let gyro_delta = (gyro[i].rate_rad_s * dt).to_degrees();
        let mag_delta = mag_deg[i] - mag_deg[i - 1];
        fused_deg[i] = fused_deg[i - 1] + config.alpha * gyro_delta + (1.0 - config.alpha) * mag_delta;
    }

    debug!(
        samples = gyro.len(),
        alpha = config.alpha,
        final_deg = fused_deg[fused_deg.len() - 1],
        "fused yaw trajectory"
    );

    Ok(FusedTrajectory {
        time_s,
        gyro_deg,
        mag_deg,
        fused_deg,
    })
}
