//! Visibility probe - "is there an obstacle between two points?"
//!
//! The mesh generator never owns obstacle data. It asks a probe for the
//! nearest intersection along each boundary ray and clips the boundary
//! point to the hit. Hosts plug in whatever spatial query they already
//! have; [`crate::scene::ObstacleScene`] is a self-contained wall-segment
//! implementation for tests and demos.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Bit set selecting which obstacle layers participate in visibility tests
///
/// An empty mask means no obstacle can match, so every ray is treated as
/// unobstructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleMask(pub u32);

impl ObstacleMask {
    /// Every layer
    pub const ALL: Self = Self(u32::MAX);
    /// No layer - disables clipping entirely
    pub const NONE: Self = Self(0);

    /// Mask containing the single layer `index` (0..=31)
    pub fn layer(index: u32) -> Self {
        debug_assert!(index < 32, "layer index {index} out of range 0..=31");
        Self(1 << (index % 32))
    }

    /// Whether this mask selects no layers
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether the two masks share any layer
    pub fn intersects(&self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for ObstacleMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Nearest obstacle intersection along a ray
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the hit
    pub distance: f32,
    /// World-space hit point
    pub point: Point3<f32>,
}

/// An obstacle-intersection query against the host's scene
///
/// Implementations must return the *nearest* hit within `max_distance`,
/// or `None` if the ray is unobstructed. `direction` is unit length.
///
/// Probes are read-only queries, so independent emitters can safely
/// regenerate in parallel against the same probe.
pub trait VisibilityProbe: Send + Sync {
    /// Cast a ray and return the nearest intersection, if any
    fn raycast(
        &self,
        origin: Point3<f32>,
        direction: Vector3<f32>,
        max_distance: f32,
        mask: ObstacleMask,
    ) -> Option<RayHit>;
}

/// A probe with nothing in it
///
/// Useful for headless tests and for hosts that want the unclipped
/// silhouette mesh.
pub struct NoObstacles;

impl VisibilityProbe for NoObstacles {
    fn raycast(
        &self,
        _origin: Point3<f32>,
        _direction: Vector3<f32>,
        _max_distance: f32,
        _mask: ObstacleMask,
    ) -> Option<RayHit> {
        None
    }
}
