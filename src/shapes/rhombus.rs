//! Rhombus sampler
//!
//! A diamond derived from a side length and an interior angle: the
//! half-diagonals are cos(angle/2) * side along X and sin(angle/2) * side
//! along Z. The walk visits bottom -> right -> top -> left, one quarter
//! of t per edge, same direction as the rectangle walk.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use super::{clamp_dimension, clamp_segments, lerp, MIN_CLOSED_SEGMENTS};

/// Rhombus parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RhombusParams {
    /// Edge length of the diamond
    pub side_length: f32,
    /// Interior angle at the side corners, in degrees
    pub angle_degrees: f32,
    /// Boundary sample count, spread evenly over the four edges
    pub segments: u32,
}

impl Default for RhombusParams {
    fn default() -> Self {
        Self {
            side_length: 2.0,
            angle_degrees: 60.0,
            segments: 64,
        }
    }
}

impl RhombusParams {
    /// Half-diagonals (horizontal along X, vertical along Z)
    pub fn half_diagonals(&self) -> (f32, f32) {
        let half_angle = self.angle_degrees.to_radians() / 2.0;
        (
            half_angle.cos() * self.side_length,
            half_angle.sin() * self.side_length,
        )
    }

    /// Boundary point for t in [0, 1)
    pub fn point_on_edge(&self, t: f32) -> Point3<f32> {
        let (half_h, half_v) = self.half_diagonals();

        let total = t * 4.0;
        if total < 1.0 {
            // bottom corner -> right corner
            Point3::new(lerp(0.0, half_h, total), 0.0, lerp(-half_v, 0.0, total))
        } else if total < 2.0 {
            // right corner -> top corner
            let s = total - 1.0;
            Point3::new(lerp(half_h, 0.0, s), 0.0, lerp(0.0, half_v, s))
        } else if total < 3.0 {
            // top corner -> left corner
            let s = total - 2.0;
            Point3::new(lerp(0.0, -half_h, s), 0.0, lerp(half_v, 0.0, s))
        } else {
            // left corner -> bottom corner
            let s = total - 3.0;
            Point3::new(lerp(-half_h, 0.0, s), 0.0, lerp(0.0, -half_v, s))
        }
    }

    pub(crate) fn sanitized(&self) -> Self {
        let mut out = *self;
        out.side_length = clamp_dimension(out.side_length, "rhombus side length");
        if !(10.0..=170.0).contains(&out.angle_degrees) {
            log::warn!(
                "rhombus angle {} out of [10, 170], clamping",
                out.angle_degrees
            );
            out.angle_degrees = out.angle_degrees.clamp(10.0, 170.0);
        }
        out.segments = clamp_segments(out.segments, MIN_CLOSED_SEGMENTS, "rhombus");
        out
    }
}
