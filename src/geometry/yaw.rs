//! Yaw extraction from recovered two-view motion.

use nalgebra::{Matrix2x3, Matrix3};

/// Threshold below which the ZYX decomposition is considered gimbal-locked.
const GIMBAL_EPS: f64 = 1e-6;

/// Yaw in degrees from a rotation matrix, ZYX Tait-Bryan convention.
///
/// Gimbal-lock-adjacent configurations (`|R[0,0]|` and `|R[1,0]|` both
/// near zero, e.g. a pure 90-degree pitch) carry no extractable yaw and
/// map to 0 instead of an unstable atan2.
pub fn yaw_from_rotation_deg(r: &Matrix3<f64>) -> f64 {
    if r[(0, 0)].abs() < GIMBAL_EPS && r[(1, 0)].abs() < GIMBAL_EPS {
        return 0.0;
    }
    r[(2, 0)].atan2(r[(0, 0)]).to_degrees()
}

/// In-plane rotation in degrees of a 2D similarity/affine transform.
pub fn affine_rotation_deg(m: &Matrix2x3<f64>) -> f64 {
    -m[(0, 1)].atan2(m[(0, 0)]).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn yaw_matrix(deg: f64) -> Matrix3<f64> {
        let (s, c) = deg.to_radians().sin_cos();
        Matrix3::new(
            c, 0.0, -s, //
            0.0, 1.0, 0.0, //
            s, 0.0, c,
        )
    }

    #[test]
    fn test_yaw_roundtrip() {
        for deg in [-170.0, -45.0, -2.0, 0.0, 1.5, 30.0, 120.0] {
            assert_relative_eq!(yaw_from_rotation_deg(&yaw_matrix(deg)), deg, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_gimbal_lock_maps_to_zero() {
        // Pure 90-degree pitch: R[0,0] = R[1,0] = 0, R[0,2] = 1.
        let r = Matrix3::new(
            0.0, 0.0, 1.0, //
            0.0, 1.0, 0.0, //
            -1.0, 0.0, 0.0,
        );
        let yaw = yaw_from_rotation_deg(&r);
        assert!(yaw.is_finite());
        assert_relative_eq!(yaw, 0.0);
    }

    #[test]
    fn test_affine_rotation_sign() {
        // In-image rotation by theta: [[cos, -sin], [sin, cos]].
        let theta: f64 = 12.0;
        let (s, c) = theta.to_radians().sin_cos();
        let m = Matrix2x3::new(c, -s, 0.0, s, c, 0.0);
        assert_relative_eq!(affine_rotation_deg(&m), theta, epsilon = 1e-9);
    }

    #[test]
    fn test_affine_identity_is_zero() {
        let m = Matrix2x3::new(1.0, 0.0, 5.0, 0.0, 1.0, -3.0);
        assert_relative_eq!(affine_rotation_deg(&m), 0.0);
    }
}
