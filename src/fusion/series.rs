//! Angle unwrapping and resampling onto a common time base.

use std::f64::consts::PI;

const TWO_PI: f64 = 2.0 * PI;

/// Remove discontinuities at the +-pi boundary from a radian angle
/// sequence: each sample is shifted by a multiple of 2*pi so consecutive
/// differences stay within (-pi, pi].
pub fn unwrap_angles(angles: &mut [f64]) {
    let Some(&first) = angles.first() else {
        return;
    };

    let mut correction = 0.0;
    let mut prev_raw = first;
    for angle in angles.iter_mut().skip(1) {
        let raw = *angle;
        let mut delta = raw - prev_raw;
        while delta > PI {
            delta -= TWO_PI;
            correction -= TWO_PI;
        }
        while delta <= -PI {
            delta += TWO_PI;
            correction += TWO_PI;
        }
        prev_raw = raw;
        *angle = raw + correction;
    }
}

/// Linear interpolation of the samples `(xp, fp)` at the query points `x`,
/// clamping to the end values outside the sampled range.
///
/// `xp` must be strictly increasing and the same length as `fp`; the fuser
/// validates its streams before calling this.
pub fn interp(x: &[f64], xp: &[f64], fp: &[f64]) -> Vec<f64> {
    debug_assert_eq!(xp.len(), fp.len());
    debug_assert!(!xp.is_empty());
    x.iter().map(|&q| interp_one(q, xp, fp)).collect()
}

fn interp_one(q: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let last = xp.len() - 1;
    if q <= xp[0] {
        return fp[0];
    }
    if q >= xp[last] {
        return fp[last];
    }
    // First index with xp[j] > q; q is interior so 1 <= j <= last.
    let j = xp.partition_point(|&v| v <= q);
    let (x0, x1) = (xp[j - 1], xp[j]);
    let (f0, f1) = (fp[j - 1], fp[j]);
    f0 + (f1 - f0) * (q - x0) / (x1 - x0)
}
