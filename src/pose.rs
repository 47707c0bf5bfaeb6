//! Emitter pose - position and orientation in world space
//!
//! Vision emitters live on the XZ ground plane with +Y up. The pose is
//! supplied by the host (game logic or editor) each evaluation and is
//! read-only to the mesh generator.

use nalgebra::{Point3, UnitQuaternion, Vector3};

/// Position and orientation of a vision emitter
///
/// Boundary samples are produced in the emitter's local frame; the pose
/// maps them into world space for visibility probing and back again for
/// the output mesh.
#[derive(Clone, Copy, Debug)]
pub struct Pose {
    /// World-space position
    pub position: Point3<f32>,
    /// World-space orientation
    pub rotation: UnitQuaternion<f32>,
}

impl Pose {
    /// Create a pose from position and rotation
    pub fn new(position: Point3<f32>, rotation: UnitQuaternion<f32>) -> Self {
        Self { position, rotation }
    }

    /// Create a pose facing `yaw_degrees` around the +Y axis
    pub fn from_yaw(position: Point3<f32>, yaw_degrees: f32) -> Self {
        Self {
            position,
            rotation: UnitQuaternion::from_axis_angle(
                &Vector3::y_axis(),
                yaw_degrees.to_radians(),
            ),
        }
    }

    /// Pose at the world origin with no rotation
    pub fn identity() -> Self {
        Self {
            position: Point3::origin(),
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Transform a local point into world space
    pub fn to_world(&self, local: Point3<f32>) -> Point3<f32> {
        self.position + self.rotation * local.coords
    }

    /// Transform a world point into the emitter's local frame
    pub fn to_local(&self, world: Point3<f32>) -> Point3<f32> {
        Point3::from(self.rotation.inverse() * (world - self.position))
    }

    /// Rotate a local direction into world space
    pub fn rotate(&self, local_dir: Vector3<f32>) -> Vector3<f32> {
        self.rotation * local_dir
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

// Change detection wants "any component difference", so this is an exact
// componentwise compare, not an epsilon compare.
impl PartialEq for Pose {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && self.rotation.quaternion() == other.rotation.quaternion()
    }
}
