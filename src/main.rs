use anyhow::{Context, Result};

use yaw_track::fusion::{calibrate_hard_iron, fuse, FusionConfig};
use yaw_track::io::{load_gyro_log, load_mag_log, write_trajectory_csv};

const USAGE: &str = "usage: yaw-track <gyro.csv> <mag.csv> [output.csv]";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let gyro_path = args.next().context(USAGE)?;
    let mag_path = args.next().context(USAGE)?;
    let output_path = args.next().unwrap_or_else(|| "yaw_fusion.csv".to_string());

    let gyro = load_gyro_log(&gyro_path)?;
    let mut mag = load_mag_log(&mag_path)?;
    println!(
        "Loaded {} gyro samples, {} magnetometer samples",
        gyro.len(),
        mag.len()
    );

    calibrate_hard_iron(&mut mag);

    let trajectory = fuse(&gyro, &mag, &FusionConfig::default())?;
    write_trajectory_csv(&output_path, &trajectory)?;

    let final_yaw = trajectory.fused_deg.last().copied().unwrap_or(0.0);
    println!(
        "Wrote {} samples to {} (final fused yaw: {:.2} deg)",
        trajectory.time_s.len(),
        output_path,
        final_yaw
    );

    Ok(())
}
