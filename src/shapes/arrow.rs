//! Arrow sampler
//!
//! An arrow-head outline: a flat base through the emitter and two rising
//! edges meeting at an apex half the height ahead. The walk spends one
//! quarter of t per edge like the other diamond walks; the fourth quarter
//! is a degenerate edge that holds the left base corner, which keeps the
//! quarter layout uniform across the edge-walk shapes.
//!
//! The optional tilt yaws every boundary sample around +Y. It affects the
//! generated mesh and the diagnostic overlay alike.

use nalgebra::{Point3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use super::{clamp_dimension, clamp_segments, lerp, MIN_CLOSED_SEGMENTS};

/// Arrow parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrowParams {
    /// Base width along local X
    pub width: f32,
    /// Total height along local Z; the apex sits at height/2
    pub height: f32,
    /// Yaw applied to the whole outline, in degrees
    pub tilt_degrees: f32,
    /// Boundary sample count
    pub segments: u32,
}

impl Default for ArrowParams {
    fn default() -> Self {
        Self {
            width: 2.0,
            height: 2.0,
            tilt_degrees: 0.0,
            segments: 64,
        }
    }
}

impl ArrowParams {
    /// Boundary point for t in [0, 1), tilt included
    pub fn point_on_edge(&self, t: f32) -> Point3<f32> {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;

        let total = t * 4.0;
        let flat = if total < 1.0 {
            // base: left corner -> right corner
            Point3::new(lerp(-half_w, half_w, total), 0.0, 0.0)
        } else if total < 2.0 {
            // right corner -> apex
            let s = total - 1.0;
            Point3::new(lerp(half_w, 0.0, s), 0.0, lerp(0.0, half_h, s))
        } else if total < 3.0 {
            // apex -> left corner
            let s = total - 2.0;
            Point3::new(lerp(0.0, -half_w, s), 0.0, lerp(half_h, 0.0, s))
        } else {
            // degenerate quarter holding the left corner
            Point3::new(-half_w, 0.0, 0.0)
        };

        if self.tilt_degrees == 0.0 {
            flat
        } else {
            let tilt = UnitQuaternion::from_axis_angle(
                &Vector3::y_axis(),
                self.tilt_degrees.to_radians(),
            );
            tilt * flat
        }
    }

    pub(crate) fn sanitized(&self) -> Self {
        let mut out = *self;
        out.width = clamp_dimension(out.width, "arrow width");
        out.height = clamp_dimension(out.height, "arrow height");
        if !(-45.0..=45.0).contains(&out.tilt_degrees) {
            log::warn!("arrow tilt {} out of [-45, 45], clamping", out.tilt_degrees);
            out.tilt_degrees = out.tilt_degrees.clamp(-45.0, 45.0);
        }
        out.segments = clamp_segments(out.segments, MIN_CLOSED_SEGMENTS, "arrow");
        out
    }
}
