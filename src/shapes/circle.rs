//! Circle / sector sampler
//!
//! The circular shape differs from the edge-walk shapes: instead of
//! sampling perimeter points, it precomputes a fixed set of local
//! direction vectors spanning the vision angle and scales each by the
//! vision range. The direction set depends only on angle and precision,
//! so the generator caches it until either changes.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Smallest angular step in degrees; keeps the sweep loop finite
pub(crate) const MIN_STEP_DEGREES: f32 = 0.01;

/// Circle / sector parameters
///
/// `vision_angle` is the full aperture in degrees, centered on the
/// emitter's forward (+Z) axis; 360 gives a full circle. `precision` is
/// the requested ray count across the aperture.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircleParams {
    /// Full aperture in degrees
    pub vision_angle: f32,
    /// Ray length before obstacle clipping
    pub vision_range: f32,
    /// Requested sample count across the aperture
    pub precision: u32,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self {
            vision_angle: 360.0,
            vision_range: 1.0,
            precision: 300,
        }
    }
}

impl CircleParams {
    /// Angular step in degrees between consecutive directions
    ///
    /// Clamped so a tiny precision cannot produce an empty sweep and a
    /// huge one cannot stall the loop.
    pub fn step_degrees(&self) -> f32 {
        let half = self.half_angle();
        (self.vision_angle / self.precision.max(1) as f32)
            .clamp(MIN_STEP_DEGREES, half.max(MIN_STEP_DEGREES))
    }

    /// Half aperture, rounded to whole degrees
    pub fn half_angle(&self) -> f32 {
        (self.vision_angle / 2.0).round()
    }

    /// Unit direction vectors spanning [-half, +half] around forward (+Z)
    ///
    /// Exactly floor(2 * half / step) + 1 directions. Each angle is
    /// derived by index rather than by accumulating the step, so float
    /// rounding cannot drift the count or the endpoints. Deterministic
    /// for identical parameters.
    pub fn directions(&self) -> Vec<Vector3<f32>> {
        let half = self.half_angle();
        let step = self.step_degrees();

        let n = (2.0 * half / step).floor() as usize;
        let mut dirs = Vec::with_capacity(n + 1);
        for i in 0..=n {
            let a = -half + i as f32 * step;
            // Offset by 90 degrees so a = 0 points along local +Z.
            let rad = (a + 90.0).to_radians();
            dirs.push(Vector3::new(rad.cos(), 0.0, rad.sin()));
        }
        dirs
    }

    pub(crate) fn sanitized(&self) -> Self {
        let mut out = *self;
        if out.vision_angle < 0.0 || out.vision_angle > 360.0 {
            log::warn!(
                "vision angle {} out of [0, 360], clamping",
                out.vision_angle
            );
            out.vision_angle = out.vision_angle.clamp(0.0, 360.0);
        }
        out.vision_range = super::clamp_dimension(out.vision_range, "vision range");
        if out.precision == 0 {
            log::warn!("circle precision 0, clamping to 1");
            out.precision = 1;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direction_count() {
        // 90 degree aperture at 1 degree steps: floor(90/1) + 1 rays.
        let params = CircleParams {
            vision_angle: 90.0,
            vision_range: 5.0,
            precision: 90,
        };
        assert_relative_eq!(params.step_degrees(), 1.0);
        assert_eq!(params.directions().len(), 91);
    }

    #[test]
    fn test_directions_are_unit_length() {
        let params = CircleParams::default();
        for dir in params.directions() {
            assert_relative_eq!(dir.norm(), 1.0, epsilon = 1e-6);
            assert_eq!(dir.y, 0.0);
        }
    }

    #[test]
    fn test_symmetry_about_forward() {
        // When the step divides the aperture evenly, directions pair up
        // mirrored across the forward (+Z) axis.
        let params = CircleParams {
            vision_angle: 90.0,
            vision_range: 5.0,
            precision: 90,
        };
        let dirs = params.directions();
        let n = dirs.len();

        for i in 0..n / 2 {
            let a = dirs[i];
            let b = dirs[n - 1 - i];
            assert_relative_eq!(a.x, -b.x, epsilon = 1e-4);
            assert_relative_eq!(a.z, b.z, epsilon = 1e-4);
        }

        // The middle ray points straight ahead.
        let mid = dirs[n / 2];
        assert_relative_eq!(mid.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(mid.z, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_determinism() {
        let params = CircleParams {
            vision_angle: 123.0,
            vision_range: 3.7,
            precision: 77,
        };
        let a = params.directions();
        let b = params.directions();
        assert_eq!(a, b); // bit-identical
    }

    #[test]
    fn test_step_clamp_keeps_sweep_finite() {
        // Absurd precision drives the raw step to ~0; the clamp floors it
        // and the count stays at the documented floor(angle / step) + 1.
        let params = CircleParams {
            vision_angle: 360.0,
            vision_range: 1.0,
            precision: u32::MAX,
        };
        let step = params.step_degrees();
        assert!(step >= MIN_STEP_DEGREES);
        assert_eq!(
            params.directions().len(),
            (2.0 * params.half_angle() / step).floor() as usize + 1
        );

        // Precision 1 collapses to the half-angle step: three rays.
        let coarse = CircleParams {
            vision_angle: 180.0,
            vision_range: 1.0,
            precision: 1,
        };
        assert_relative_eq!(coarse.step_degrees(), 90.0);
        assert_eq!(coarse.directions().len(), 3);
    }

    #[test]
    fn test_sanitize() {
        let params = CircleParams {
            vision_angle: 400.0,
            vision_range: -1.0,
            precision: 0,
        };
        let fixed = params.sanitized();
        assert_eq!(fixed.vision_angle, 360.0);
        assert!(fixed.vision_range > 0.0);
        assert_eq!(fixed.precision, 1);
    }
}
