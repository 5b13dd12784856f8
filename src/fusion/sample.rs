//! Timestamped sensor samples and stream validation.

use crate::error::InputError;

/// One gyroscope sample: angular rate about the yaw axis, rad/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GyroSample {
    pub timestamp_s: f64,
    pub rate_rad_s: f64,
}

/// One magnetometer sample, raw field components in the device frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagSample {
    pub timestamp_s: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl MagSample {
    /// Horizontal heading in radians: `atan2(-y', x)` where `y'` is the
    /// sign-inverted z axis, the second horizontal axis under the device
    /// mounting convention.
    pub fn heading_rad(&self) -> f64 {
        let y_horizontal = -self.z;
        (-y_horizontal).atan2(self.x)
    }
}

/// Validate the structural contract on a sensor stream: at least two
/// samples, strictly increasing timestamps.
pub(crate) fn validate_stream<T>(
    stream: &'static str,
    samples: &[T],
    timestamp: impl Fn(&T) -> f64,
) -> Result<(), InputError> {
    if samples.len() < 2 {
        return Err(InputError::TooFewSamples {
            stream,
            found: samples.len(),
            required: 2,
        });
    }
    for (i, pair) in samples.windows(2).enumerate() {
        if timestamp(&pair[1]) <= timestamp(&pair[0]) {
            return Err(InputError::NonMonotonicTimestamps {
                stream,
                index: i + 1,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_heading_convention() {
        // Field along +x: zero heading.
        let s = MagSample {
            timestamp_s: 0.0,
            x: 1.0,
            y: 0.0,
            z: 0.0,
        };
        assert_relative_eq!(s.heading_rad(), 0.0);

        // atan2(z, x) under the mounting convention.
        let s = MagSample {
            timestamp_s: 0.0,
            x: 1.0,
            y: 0.5,
            z: 1.0,
        };
        assert_relative_eq!(s.heading_rad(), std::f64::consts::FRAC_PI_4);
    }

    #[test]
    fn test_validate_rejects_short_stream() {
        let samples = [GyroSample {
            timestamp_s: 0.0,
            rate_rad_s: 0.0,
        }];
        let err = validate_stream("gyroscope", &samples, |s| s.timestamp_s).unwrap_err();
        assert_eq!(
            err,
            InputError::TooFewSamples {
                stream: "gyroscope",
                found: 1,
                required: 2
            }
        );
    }

    #[test]
    fn test_validate_rejects_non_monotonic_timestamps() {
        let samples = [
            GyroSample {
                timestamp_s: 0.0,
                rate_rad_s: 0.0,
            },
            GyroSample {
                timestamp_s: 1.0,
                rate_rad_s: 0.0,
            },
            GyroSample {
                timestamp_s: 1.0,
                rate_rad_s: 0.0,
            },
        ];
        let err = validate_stream("gyroscope", &samples, |s| s.timestamp_s).unwrap_err();
        assert_eq!(
            err,
            InputError::NonMonotonicTimestamps {
                stream: "gyroscope",
                index: 2
            }
        );
    }

    #[test]
    fn test_validate_accepts_increasing_stream() {
        let samples = [
            GyroSample {
                timestamp_s: 0.0,
                rate_rad_s: 0.1,
            },
            GyroSample {
                timestamp_s: 0.01,
                rate_rad_s: 0.2,
            },
        ];
        assert!(validate_stream("gyroscope", &samples, |s| s.timestamp_s).is_ok());
    }
}
