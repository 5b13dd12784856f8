//! CSV export of fused trajectories.

use std::path::Path;

use anyhow::{Context, Result};

use crate::fusion::complementary::FusedTrajectory;

/// Write the three aligned trajectories as
/// `time,gyro_yaw,mag_yaw,fused_yaw` rows.
pub fn write_trajectory_csv<P: AsRef<Path>>(path: P, trajectory: &FusedTrajectory) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(["time", "gyro_yaw", "mag_yaw", "fused_yaw"])?;
    for i in 0..trajectory.time_s.len() {
        writer.write_record(&[
            trajectory.time_s[i].to_string(),
            trajectory.gyro_deg[i].to_string(),
            trajectory.mag_deg[i].to_string(),
            trajectory.fused_deg[i].to_string(),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_roundtrip_row_count() {
        let trajectory = FusedTrajectory {
            time_s: vec![0.0, 0.5, 1.0],
            gyro_deg: vec![0.0, 1.0, 2.0],
            mag_deg: vec![0.0, 0.9, 2.1],
            fused_deg: vec![0.0, 0.999, 2.0],
        };
        let path = std::env::temp_dir().join(format!(
            "yaw_track_export_{}.csv",
            std::process::id()
        ));

        write_trajectory_csv(&path, &trajectory).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("time,gyro_yaw,mag_yaw,fused_yaw"));
        assert_eq!(lines.count(), 3);
    }
}
