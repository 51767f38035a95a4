//! Triangle mesh representation

use crate::{BBox3, Error, Result};
use nalgebra::Vector3;

mod io; // STL I/O implementation
mod math; // Mesh math helpers

/// Triangle mesh
///
/// Represents geometry as a dense triangle soup: three vertex positions per
/// triangle and exactly one outward-facing unit normal per triangle.
/// Coordinates are millimeters. The analysis passes treat a mesh as
/// immutable input and never modify it.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    positions: Vec<Vector3<f64>>,
    normals: Vec<Vector3<f64>>,
}

impl TriangleMesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh from raw attribute buffers
    ///
    /// `positions` holds three vertices per triangle in order; `normals`
    /// holds one normal per triangle. Buffers that violate either invariant
    /// describe a malformed mesh and are rejected with
    /// [`Error::MeshFormat`]. Two empty buffers are a valid empty mesh.
    pub fn from_buffers(
        positions: Vec<Vector3<f64>>,
        normals: Vec<Vector3<f64>>,
    ) -> Result<Self> {
        if positions.len() % 3 != 0 {
            return Err(Error::MeshFormat(format!(
                "vertex count {} is not a multiple of 3",
                positions.len()
            )));
        }
        if normals.len() != positions.len() / 3 {
            return Err(Error::MeshFormat(format!(
                "normal count {} does not match triangle count {}",
                normals.len(),
                positions.len() / 3
            )));
        }
        Ok(Self { positions, normals })
    }

    /// Create a cuboid mesh from a bounding box
    ///
    /// The 12 triangles wind counter-clockwise seen from outside, so the
    /// derived normals face outward and the signed volume is positive.
    pub fn from_bbox(bbox: &BBox3) -> Self {
        let mut mesh = TriangleMesh::new();

        let min = bbox.min;
        let max = bbox.max;
        let corners = [
            Vector3::new(min.x, min.y, min.z),
            Vector3::new(min.x, min.y, max.z),
            Vector3::new(min.x, max.y, min.z),
            Vector3::new(min.x, max.y, max.z),
            Vector3::new(max.x, min.y, min.z),
            Vector3::new(max.x, min.y, max.z),
            Vector3::new(max.x, max.y, min.z),
            Vector3::new(max.x, max.y, max.z),
        ];

        let mut add_tri = |a: usize, b: usize, c: usize| {
            mesh.add_triangle(corners[a], corners[b], corners[c]);
        };

        // -X face
        add_tri(0, 1, 3);
        add_tri(0, 3, 2);

        // +X face
        add_tri(4, 6, 7);
        add_tri(4, 7, 5);

        // -Y face
        add_tri(0, 4, 5);
        add_tri(0, 5, 1);

        // +Y face
        add_tri(2, 3, 7);
        add_tri(2, 7, 6);

        // -Z face
        add_tri(0, 2, 6);
        add_tri(0, 6, 4);

        // +Z face
        add_tri(1, 5, 7);
        add_tri(1, 7, 3);

        mesh
    }

    /// Add a triangle, deriving its normal from the winding
    ///
    /// Vertices are expected counter-clockwise seen from outside the solid.
    /// Degenerate triangles get a zero normal.
    pub fn add_triangle(&mut self, a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) {
        let normal = math::face_normal(a, b, c);
        self.add_triangle_with_normal(a, b, c, normal);
    }

    /// Add a triangle with an explicit facet normal
    pub fn add_triangle_with_normal(
        &mut self,
        a: Vector3<f64>,
        b: Vector3<f64>,
        c: Vector3<f64>,
        normal: Vector3<f64>,
    ) {
        self.positions.push(a);
        self.positions.push(b);
        self.positions.push(c);
        self.normals.push(normal);
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Check if the mesh has no triangles
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Get the vertices of a triangle by index
    pub fn triangle(&self, index: usize) -> Option<(Vector3<f64>, Vector3<f64>, Vector3<f64>)> {
        if index >= self.triangle_count() {
            return None;
        }
        let base = index * 3;
        Some((
            self.positions[base],
            self.positions[base + 1],
            self.positions[base + 2],
        ))
    }

    /// Get the facet normal of a triangle by index
    pub fn normal(&self, index: usize) -> Option<Vector3<f64>> {
        self.normals.get(index).copied()
    }

    /// All vertex positions, three per triangle
    pub fn positions(&self) -> &[Vector3<f64>] {
        &self.positions
    }

    /// All facet normals, one per triangle
    pub fn normals(&self) -> &[Vector3<f64>] {
        &self.normals
    }

    /// Load from an STL file (binary or ASCII)
    pub fn load_stl<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        io::load_stl_impl(path)
    }

    /// Save to a binary STL file
    pub fn save_stl<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        io::save_stl_impl(self, path)
    }
}
