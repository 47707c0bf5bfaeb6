//! Half-ellipse sampler
//!
//! A bulged top edge, fanned from a displaced anchor like the offset
//! triangle. X runs linearly across the width; Z follows a sine-eased
//! curve whose intensity falls off from the horizontal midpoint with a
//! clamped triangular falloff scaled by `length`, biased outward by the
//! `pre_length` minimum extrusion:
//!
//! ```text
//! falloff = clamp01(|t - 0.5| * length)
//! z = pre_length + height * sin((1 - falloff) * pi/2)
//! ```

use std::f32::consts::FRAC_PI_2;

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::{clamp_dimension, clamp_segments, lerp, MIN_STRIP_SEGMENTS};

/// Half-ellipse parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HalfEllipseParams {
    /// Curve width along local X
    pub width: f32,
    /// Curve height above the `pre_length` baseline
    pub height: f32,
    /// Curve sample count (emits segments + 1 points)
    pub segments: u32,
    /// Local anchor displacement; fan apex and raycast origin
    pub center_offset: Vector3<f32>,
    /// Minimum extrusion of the edge ahead of the emitter
    pub pre_length: f32,
    /// Falloff scale; larger values flatten the curve sooner off-center
    pub length: f32,
}

impl Default for HalfEllipseParams {
    fn default() -> Self {
        Self {
            width: 4.0,
            height: 4.0,
            segments: 64,
            center_offset: Vector3::new(0.0, 0.0, -2.0),
            pre_length: 1.5,
            length: 2.0,
        }
    }
}

impl HalfEllipseParams {
    /// Boundary point on the curved edge for t in [0, 1]
    pub fn point_at(&self, t: f32) -> Point3<f32> {
        let x = lerp(-self.width / 2.0, self.width / 2.0, t);

        let falloff = ((t - 0.5).abs() * self.length).clamp(0.0, 1.0);
        let curve = ((1.0 - falloff) * FRAC_PI_2).sin();
        let z = self.pre_length + self.height * curve;

        Point3::new(x, 0.0, z)
    }

    pub(crate) fn sanitized(&self) -> Self {
        Self {
            width: clamp_dimension(self.width, "half-ellipse width"),
            height: clamp_dimension(self.height, "half-ellipse height"),
            segments: clamp_segments(self.segments, MIN_STRIP_SEGMENTS, "half-ellipse"),
            center_offset: self.center_offset,
            pre_length: self.pre_length,
            length: self.length,
        }
    }
}
