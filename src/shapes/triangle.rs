//! Offset-triangle sampler
//!
//! A single slanted top edge at fixed height, fanned from an anchor that
//! is displaced from the emitter. Both the fan vertex and the ray origin
//! use the offset point, so the cone's apex is the offset, not the
//! emitter itself. This is an open strip: samples run left to right
//! across the top edge with t inclusive of both ends.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::{clamp_dimension, clamp_segments, lerp, MIN_STRIP_SEGMENTS};

/// Offset-triangle parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OffsetTriangleParams {
    /// Top edge width along local X
    pub width: f32,
    /// Distance of the top edge ahead of the emitter, along local Z
    pub height: f32,
    /// Top edge sample count (emits segments + 1 points)
    pub segments: u32,
    /// Local anchor displacement; fan apex and raycast origin
    pub center_offset: Vector3<f32>,
}

impl Default for OffsetTriangleParams {
    fn default() -> Self {
        Self {
            width: 4.0,
            height: 4.0,
            segments: 64,
            center_offset: Vector3::new(0.0, 0.0, -2.0),
        }
    }
}

impl OffsetTriangleParams {
    /// Boundary point on the top edge for t in [0, 1]
    pub fn point_at(&self, t: f32) -> Point3<f32> {
        Point3::new(
            lerp(-self.width / 2.0, self.width / 2.0, t),
            0.0,
            self.height,
        )
    }

    pub(crate) fn sanitized(&self) -> Self {
        Self {
            width: clamp_dimension(self.width, "triangle width"),
            height: clamp_dimension(self.height, "triangle height"),
            segments: clamp_segments(self.segments, MIN_STRIP_SEGMENTS, "triangle"),
            center_offset: self.center_offset,
        }
    }
}
