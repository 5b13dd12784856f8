//! Pinhole camera intrinsics.

use nalgebra::Matrix3;

/// Pinhole intrinsics handed through to the essential-matrix solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraIntrinsics {
    pub fx: f64,
    pub fy: f64,
    pub cx: f64,
    pub cy: f64,
}

impl CameraIntrinsics {
    pub fn new(fx: f64, fy: f64, cx: f64, cy: f64) -> Self {
        Self { fx, fy, cx, cy }
    }

    /// Rough intrinsics when no calibration is available: focal length equal
    /// to the frame width, principal point at the frame center.
    ///
    /// This is an approximation, not a calibrated value; callers with a real
    /// calibration should supply it instead.
    pub fn approximate_from_frame(width: u32, height: u32) -> Self {
        let w = f64::from(width);
        let h = f64::from(height);
        Self {
            fx: w,
            fy: w,
            cx: w / 2.0,
            cy: h / 2.0,
        }
    }

    /// The 3x3 calibration matrix K.
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.fx, 0.0, self.cx, //
            0.0, self.fy, self.cy, //
            0.0, 0.0, 1.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_approximate_intrinsics_from_frame() {
        let k = CameraIntrinsics::approximate_from_frame(1920, 1080);
        assert_relative_eq!(k.fx, 1920.0);
        assert_relative_eq!(k.fy, 1920.0);
        assert_relative_eq!(k.cx, 960.0);
        assert_relative_eq!(k.cy, 540.0);
    }

    #[test]
    fn test_calibration_matrix_layout() {
        let k = CameraIntrinsics::new(500.0, 510.0, 320.0, 240.0);
        let m = k.matrix();
        assert_relative_eq!(m[(0, 0)], 500.0);
        assert_relative_eq!(m[(1, 1)], 510.0);
        assert_relative_eq!(m[(0, 2)], 320.0);
        assert_relative_eq!(m[(1, 2)], 240.0);
        assert_relative_eq!(m[(2, 2)], 1.0);
    }
}
