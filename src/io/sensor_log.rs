//! CSV sensor-log loading.
//!
//! Logs use the phone-recorder format: a header row, then
//! `relative_timestamp` in milliseconds plus raw `x`, `y`, `z` axis
//! readings per row. Axis-to-quantity mapping lives here, not in the
//! fuser: the yaw-axis gyro rate is recorded on the device's y axis.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::fusion::sample::{GyroSample, MagSample};

#[derive(Debug, Deserialize)]
struct SensorRecord {
    relative_timestamp: f64,
    x: f64,
    y: f64,
    z: f64,
}

fn load_records(path: &Path) -> Result<Vec<SensorRecord>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open sensor log {}", path.display()))?;
    let mut records = Vec::new();
    for record in rdr.deserialize() {
        let record: SensorRecord =
            record.with_context(|| format!("Malformed row in {}", path.display()))?;
        records.push(record);
    }
    Ok(records)
}

/// Load a gyroscope log; rate in rad/s, timestamps converted to seconds.
pub fn load_gyro_log<P: AsRef<Path>>(path: P) -> Result<Vec<GyroSample>> {
    Ok(load_records(path.as_ref())?
        .into_iter()
        .map(|r| GyroSample {
            timestamp_s: r.relative_timestamp / 1000.0,
            rate_rad_s: r.y,
        })
        .collect())
}

/// Load a magnetometer log with all three raw axes, timestamps converted
/// to seconds.
pub fn load_mag_log<P: AsRef<Path>>(path: P) -> Result<Vec<MagSample>> {
    Ok(load_records(path.as_ref())?
        .into_iter()
        .map(|r| MagSample {
            timestamp_s: r.relative_timestamp / 1000.0,
            x: r.x,
            y: r.y,
            z: r.z,
        })
        .collect())
}
