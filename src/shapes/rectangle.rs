//! Axis-aligned rectangle sampler
//!
//! Walks the four edges of a width x height box centered on the emitter,
//! one quarter of the t range per edge: bottom, right, top, left. With
//! +Y up this traces the outline counter-clockwise when viewed from
//! above.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use super::{clamp_dimension, clamp_segments, lerp, MIN_CLOSED_SEGMENTS};

/// Rectangle parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectangleParams {
    /// Extent along local X
    pub width: f32,
    /// Extent along local Z
    pub height: f32,
    /// Boundary sample count, spread evenly over the four edges
    pub segments: u32,
}

impl Default for RectangleParams {
    fn default() -> Self {
        Self {
            width: 2.0,
            height: 2.0,
            segments: 64,
        }
    }
}

impl RectangleParams {
    /// Boundary point for t in [0, 1)
    ///
    /// t in [0, 0.25) walks the bottom edge (-z), [0.25, 0.5) the right,
    /// [0.5, 0.75) the top, [0.75, 1) the left.
    pub fn point_on_edge(&self, t: f32) -> Point3<f32> {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;

        let total = t * 4.0;
        if total < 1.0 {
            Point3::new(lerp(-half_w, half_w, total), 0.0, -half_h)
        } else if total < 2.0 {
            Point3::new(half_w, 0.0, lerp(-half_h, half_h, total - 1.0))
        } else if total < 3.0 {
            Point3::new(lerp(half_w, -half_w, total - 2.0), 0.0, half_h)
        } else {
            Point3::new(-half_w, 0.0, lerp(half_h, -half_h, total - 3.0))
        }
    }

    pub(crate) fn sanitized(&self) -> Self {
        Self {
            width: clamp_dimension(self.width, "rectangle width"),
            height: clamp_dimension(self.height, "rectangle height"),
            segments: clamp_segments(self.segments, MIN_CLOSED_SEGMENTS, "rectangle"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quarter_points_are_corners() {
        let params = RectangleParams {
            width: 2.0,
            height: 2.0,
            segments: 4,
        };

        // At quarter boundaries the walk sits on the four corners.
        let corners = [
            params.point_on_edge(0.0),
            params.point_on_edge(0.25),
            params.point_on_edge(0.5),
            params.point_on_edge(0.75),
        ];
        let expected = [
            Point3::new(-1.0, 0.0, -1.0),
            Point3::new(1.0, 0.0, -1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(-1.0, 0.0, 1.0),
        ];
        for (got, want) in corners.iter().zip(&expected) {
            assert_relative_eq!(got.x, want.x, epsilon = 1e-6);
            assert_relative_eq!(got.z, want.z, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_edge_midpoints() {
        let params = RectangleParams {
            width: 4.0,
            height: 2.0,
            segments: 8,
        };

        // Midway through the first quarter: middle of the bottom edge.
        let p = params.point_on_edge(0.125);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, -1.0, epsilon = 1e-6);

        // Midway through the second quarter: middle of the right edge.
        let p = params.point_on_edge(0.375);
        assert_relative_eq!(p.x, 2.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_determinism() {
        let params = RectangleParams::default();
        for i in 0..16 {
            let t = i as f32 / 16.0;
            assert_eq!(params.point_on_edge(t), params.point_on_edge(t));
        }
    }

    #[test]
    fn test_sanitize_clamps() {
        let params = RectangleParams {
            width: 0.0,
            height: -3.0,
            segments: 1,
        };
        let fixed = params.sanitized();
        assert!(fixed.width > 0.0);
        assert!(fixed.height > 0.0);
        assert_eq!(fixed.segments, MIN_CLOSED_SEGMENTS);
    }
}
