//! Shape parameterizations for vision meshes
//!
//! This module provides:
//! - One parameter struct per shape variant, each with a pure boundary
//!   sampler mapping a fraction t to a local-space silhouette point
//! - `ShapeParams`, the tagged variant the generator dispatches on
//!
//! Sample order is fixed per variant so the resulting fan triangulates
//! without self-intersection: the closed shapes walk their outline in one
//! consistent direction, the strip shapes walk their top edge left to
//! right.

mod arrow;
mod circle;
mod ellipse;
mod rectangle;
mod rhombus;
mod triangle;

pub use arrow::ArrowParams;
pub use circle::CircleParams;
pub use ellipse::HalfEllipseParams;
pub use rectangle::RectangleParams;
pub use rhombus::RhombusParams;
pub use triangle::OffsetTriangleParams;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::mesh::Topology;

/// Minimum segment count for the closed edge-walk shapes
pub(crate) const MIN_CLOSED_SEGMENTS: u32 = 4;
/// Minimum segment count for the open strip shapes
pub(crate) const MIN_STRIP_SEGMENTS: u32 = 2;
/// Smallest accepted dimension; non-positive sizes are clamped up to this
pub(crate) const MIN_DIMENSION: f32 = 1e-3;

pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Approximate float equality for change detection on angle/range fields
///
/// Scales the tolerance with magnitude so large angles don't retrigger on
/// representation noise, with an absolute floor near zero.
pub(crate) fn approximately(a: f32, b: f32) -> bool {
    (b - a).abs() < (1e-6 * a.abs().max(b.abs())).max(f32::EPSILON * 8.0)
}

pub(crate) fn clamp_dimension(value: f32, what: &str) -> f32 {
    if value < MIN_DIMENSION {
        log::warn!("non-positive {what} ({value}), clamping to {MIN_DIMENSION}");
        MIN_DIMENSION
    } else {
        value
    }
}

pub(crate) fn clamp_segments(value: u32, min: u32, what: &str) -> u32 {
    if value < min {
        log::warn!("{what} segment count {value} below minimum {min}, clamping");
        min
    } else {
        value
    }
}

/// Shape parameterization of a vision emitter
///
/// A tagged variant rather than trait objects: the generator needs to
/// match on the shape kind anyway (mesh naming, UV rules, the circle's
/// precomputed direction cache), and the full set of variants is fixed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ShapeParams {
    /// Circle or angular sector swept around the forward axis
    Circle(CircleParams),
    /// Axis-aligned rectangle around the emitter
    Rectangle(RectangleParams),
    /// Diamond from a side length and interior angle
    Rhombus(RhombusParams),
    /// Arrow head (triangle with a flat base) around the emitter
    Arrow(ArrowParams),
    /// Slanted top edge fanned from a displaced apex
    OffsetTriangle(OffsetTriangleParams),
    /// Sine-eased bulged top edge fanned from a displaced apex
    HalfEllipse(HalfEllipseParams),
}

impl ShapeParams {
    /// Variant-specific mesh identity name
    ///
    /// Hosts compare this against the mesh they hold to detect shape-type
    /// changes and reallocate renderer resources.
    pub fn mesh_name(&self) -> &'static str {
        match self {
            ShapeParams::Circle(_) => "VisionCircleMesh",
            ShapeParams::Rectangle(_) => "VisionRectangleMesh",
            ShapeParams::Rhombus(_) => "VisionRhombusMesh",
            ShapeParams::Arrow(_) => "VisionArrowMesh",
            ShapeParams::OffsetTriangle(_) => "VisionOffsetTriangleMesh",
            ShapeParams::HalfEllipse(_) => "VisionHalfEllipseMesh",
        }
    }

    /// Whether the boundary closes into a ring or stays an open strip
    pub fn topology(&self) -> Topology {
        match self {
            ShapeParams::Circle(_)
            | ShapeParams::Rectangle(_)
            | ShapeParams::Rhombus(_)
            | ShapeParams::Arrow(_) => Topology::ClosedFan,
            ShapeParams::OffsetTriangle(_) | ShapeParams::HalfEllipse(_) => Topology::OpenStrip,
        }
    }

    /// Local-space fan anchor
    ///
    /// The emitter origin for the centered shapes; the configured center
    /// offset for the strip shapes, which fan from a displaced apex.
    pub fn anchor(&self) -> Point3<f32> {
        match self {
            ShapeParams::OffsetTriangle(p) => Point3::from(p.center_offset),
            ShapeParams::HalfEllipse(p) => Point3::from(p.center_offset),
            _ => Point3::origin(),
        }
    }

    /// Collect this shape's boundary points in sampling order
    ///
    /// Clears and refills `out` so callers can reuse one scratch buffer
    /// across regenerations. Closed shapes emit `segments` points for
    /// t = i/segments, i in [0, segments); open strips emit the inclusive
    /// range i in [0, segments].
    pub fn boundary_points(&self, out: &mut Vec<Point3<f32>>) {
        out.clear();
        match self {
            ShapeParams::Circle(p) => {
                for dir in p.directions() {
                    out.push(Point3::from(dir * p.vision_range));
                }
            }
            ShapeParams::Rectangle(p) => {
                for i in 0..p.segments {
                    out.push(p.point_on_edge(i as f32 / p.segments as f32));
                }
            }
            ShapeParams::Rhombus(p) => {
                for i in 0..p.segments {
                    out.push(p.point_on_edge(i as f32 / p.segments as f32));
                }
            }
            ShapeParams::Arrow(p) => {
                for i in 0..p.segments {
                    out.push(p.point_on_edge(i as f32 / p.segments as f32));
                }
            }
            ShapeParams::OffsetTriangle(p) => {
                for i in 0..=p.segments {
                    out.push(p.point_at(i as f32 / p.segments as f32));
                }
            }
            ShapeParams::HalfEllipse(p) => {
                for i in 0..=p.segments {
                    out.push(p.point_at(i as f32 / p.segments as f32));
                }
            }
        }
    }

    /// Copy with invalid numeric fields clamped into range
    ///
    /// Keeps a mesh always generatable instead of failing the frame; each
    /// clamp logs a warning.
    pub fn sanitized(&self) -> Self {
        match self {
            ShapeParams::Circle(p) => ShapeParams::Circle(p.sanitized()),
            ShapeParams::Rectangle(p) => ShapeParams::Rectangle(p.sanitized()),
            ShapeParams::Rhombus(p) => ShapeParams::Rhombus(p.sanitized()),
            ShapeParams::Arrow(p) => ShapeParams::Arrow(p.sanitized()),
            ShapeParams::OffsetTriangle(p) => ShapeParams::OffsetTriangle(p.sanitized()),
            ShapeParams::HalfEllipse(p) => ShapeParams::HalfEllipse(p.sanitized()),
        }
    }

    /// Change-detection compare against a cached copy
    ///
    /// Counts and dimensions compare exactly; the circle's angle and
    /// range use [`approximately`] since hosts commonly animate them and
    /// representation noise must not retrigger regeneration.
    pub fn matches(&self, cached: &ShapeParams) -> bool {
        match (self, cached) {
            (ShapeParams::Circle(a), ShapeParams::Circle(b)) => {
                approximately(a.vision_angle, b.vision_angle)
                    && approximately(a.vision_range, b.vision_range)
                    && a.precision == b.precision
            }
            (ShapeParams::Rectangle(a), ShapeParams::Rectangle(b)) => a == b,
            (ShapeParams::Rhombus(a), ShapeParams::Rhombus(b)) => a == b,
            (ShapeParams::Arrow(a), ShapeParams::Arrow(b)) => a == b,
            (ShapeParams::OffsetTriangle(a), ShapeParams::OffsetTriangle(b)) => a == b,
            (ShapeParams::HalfEllipse(a), ShapeParams::HalfEllipse(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_names_are_distinct() {
        let shapes = [
            ShapeParams::Circle(CircleParams::default()),
            ShapeParams::Rectangle(RectangleParams::default()),
            ShapeParams::Rhombus(RhombusParams::default()),
            ShapeParams::Arrow(ArrowParams::default()),
            ShapeParams::OffsetTriangle(OffsetTriangleParams::default()),
            ShapeParams::HalfEllipse(HalfEllipseParams::default()),
        ];

        for (i, a) in shapes.iter().enumerate() {
            for b in shapes.iter().skip(i + 1) {
                assert_ne!(a.mesh_name(), b.mesh_name());
            }
        }
    }

    #[test]
    fn test_boundary_point_counts() {
        let mut out = Vec::new();

        let rect = ShapeParams::Rectangle(RectangleParams {
            segments: 8,
            ..Default::default()
        });
        rect.boundary_points(&mut out);
        assert_eq!(out.len(), 8);

        let strip = ShapeParams::OffsetTriangle(OffsetTriangleParams {
            segments: 8,
            ..Default::default()
        });
        strip.boundary_points(&mut out);
        assert_eq!(out.len(), 9); // inclusive range for open strips
    }

    #[test]
    fn test_matches_tolerance() {
        let a = ShapeParams::Circle(CircleParams {
            vision_angle: 90.0,
            vision_range: 5.0,
            precision: 300,
        });

        // Sub-tolerance angle wiggle is "unchanged"
        let b = ShapeParams::Circle(CircleParams {
            vision_angle: 90.0 + 1e-5,
            vision_range: 5.0,
            precision: 300,
        });
        assert!(a.matches(&b));

        // A precision delta of 1 is a change
        let c = ShapeParams::Circle(CircleParams {
            vision_angle: 90.0,
            vision_range: 5.0,
            precision: 301,
        });
        assert!(!a.matches(&c));

        // Exact-compared dimensions notice any difference
        let r1 = ShapeParams::Rectangle(RectangleParams::default());
        let mut r2 = RectangleParams::default();
        r2.width += 1e-6;
        assert!(!r1.matches(&ShapeParams::Rectangle(r2)));

        // Different variants never match
        assert!(!a.matches(&r1));
    }

    #[test]
    fn test_serde_round_trip() {
        let shape = ShapeParams::Rhombus(RhombusParams::default());
        let json = serde_json::to_string(&shape).unwrap();
        let back: ShapeParams = serde_json::from_str(&json).unwrap();
        assert_eq!(shape, back);
    }
}
