//! Vision mesh buffers - the generator's output
//!
//! Plain vertex/index/normal/UV arrays in the emitter's local frame,
//! ready for a renderer to upload. The buffers are owned by one generator
//! and rewritten in place on every regeneration so steady-state frames
//! allocate nothing.

use nalgebra::{Point3, Vector3};

/// How the sample sequence closes
///
/// Closed fans wrap the last boundary vertex back to the first; open
/// strips (the offset shapes) leave their ends free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Ring of samples around the anchor, closed with a wrap triangle
    ClosedFan,
    /// Line of samples fanned from the anchor, no wrap
    OpenStrip,
}

/// Generated vision mesh
///
/// Vertex 0 is always the fan anchor (the emitter origin, or the
/// configured center offset for the strip shapes). Triangle indices wind
/// counter-clockwise when viewed from +Y.
#[derive(Clone, Debug, Default)]
pub struct VisionMesh {
    /// Local-space vertex positions; vertex 0 is the anchor
    pub vertices: Vec<Point3<f32>>,
    /// Fan triangle indices, three per triangle
    pub triangles: Vec<u32>,
    /// Per-vertex normals, all +Y for a flat ground-plane mesh
    pub normals: Vec<Vector3<f32>>,
    /// One UV channel
    pub uvs: Vec<[f32; 2]>,
    /// Variant-specific mesh name, lets a host detect shape-type changes
    pub name: String,
}

impl VisionMesh {
    /// Create an empty mesh with the given identity name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Clear all buffers, keeping their allocations
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
        self.normals.clear();
        self.uvs.clear();
    }

    /// Append one vertex with its normal and UV
    pub fn push_vertex(&mut self, position: Point3<f32>, uv: [f32; 2]) {
        self.vertices.push(position);
        self.normals.push(Vector3::y());
        self.uvs.push(uv);
    }

    /// Append one triangle
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.push(a);
        self.triangles.push(b);
        self.triangles.push(c);
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Iterate triangles as index triples
    pub fn triangle_indices(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.triangles.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_keeps_capacity() {
        let mut mesh = VisionMesh::named("test");
        for i in 0..16 {
            mesh.push_vertex(Point3::new(i as f32, 0.0, 0.0), [0.0, 0.0]);
        }
        let cap = mesh.vertices.capacity();

        mesh.clear();
        assert_eq!(mesh.vertex_count(), 0);
        assert!(mesh.vertices.capacity() >= cap);
        assert_eq!(mesh.name, "test");
    }

    #[test]
    fn test_triangle_iteration() {
        let mut mesh = VisionMesh::default();
        mesh.push_triangle(0, 2, 1);
        mesh.push_triangle(0, 3, 2);

        let tris: Vec<_> = mesh.triangle_indices().collect();
        assert_eq!(tris, vec![[0, 2, 1], [0, 3, 2]]);
        assert_eq!(mesh.triangle_count(), 2);
    }
}
