//! Hard-iron magnetometer calibration.

use crate::fusion::sample::MagSample;

/// Per-axis hard-iron offsets, estimated as the midpoint of the observed
/// range on each axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HardIronOffsets {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl HardIronOffsets {
    /// Estimate offsets from a recording. Returns `None` for an empty
    /// stream. The recording should sweep enough orientations that each
    /// axis sees both extremes of the field.
    pub fn estimate(samples: &[MagSample]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        for s in samples {
            for (i, v) in [s.x, s.y, s.z].into_iter().enumerate() {
                min[i] = min[i].min(v);
                max[i] = max[i].max(v);
            }
        }
        Some(Self {
            x: (max[0] + min[0]) / 2.0,
            y: (max[1] + min[1]) / 2.0,
            z: (max[2] + min[2]) / 2.0,
        })
    }

    /// Subtract the offsets from every sample in place.
    pub fn apply(&self, samples: &mut [MagSample]) {
        for s in samples {
            s.x -= self.x;
            s.y -= self.y;
            s.z -= self.z;
        }
    }
}

/// Estimate and apply hard-iron offsets in one pass. No-op on an empty
/// stream.
pub fn calibrate_hard_iron(samples: &mut [MagSample]) {
    if let Some(offsets) = HardIronOffsets::estimate(samples) {
        offsets.apply(samples);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample(x: f64, y: f64, z: f64) -> MagSample {
        MagSample {
            timestamp_s: 0.0,
            x,
            y,
            z,
        }
    }

    #[test]
    fn test_offsets_are_range_midpoints() {
        let samples = [sample(-1.0, 2.0, 10.0), sample(3.0, 4.0, 20.0)];
        let offsets = HardIronOffsets::estimate(&samples).unwrap();
        assert_relative_eq!(offsets.x, 1.0);
        assert_relative_eq!(offsets.y, 3.0);
        assert_relative_eq!(offsets.z, 15.0);
    }

    #[test]
    fn test_calibration_centers_the_field() {
        let mut samples = vec![sample(9.0, -2.0, 0.5), sample(11.0, 2.0, 1.5)];
        calibrate_hard_iron(&mut samples);
        assert_relative_eq!(samples[0].x, -1.0);
        assert_relative_eq!(samples[1].x, 1.0);
        assert_relative_eq!(samples[0].y, -2.0);
        assert_relative_eq!(samples[0].z, -0.5);
    }

    #[test]
    fn test_empty_stream_is_noop() {
        assert!(HardIronOffsets::estimate(&[]).is_none());
        let mut empty: Vec<MagSample> = Vec::new();
        calibrate_hard_iron(&mut empty);
        assert!(empty.is_empty());
    }
}
