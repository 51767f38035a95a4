//! Mesh math helpers

use super::TriangleMesh;
use crate::BBox3;
use nalgebra::Vector3;

impl TriangleMesh {
    /// Signed volume of a closed, consistently oriented mesh, in mm³.
    ///
    /// Uses the standard triangle-tetrahedron decomposition against the
    /// origin. If the mesh is not closed or triangle winding is
    /// inconsistent, results may be meaningless.
    pub fn signed_volume_mm3(&self) -> f64 {
        let mut v6_sum = 0.0f64;
        for tri in self.positions().chunks_exact(3) {
            v6_sum += tri[0].dot(&tri[1].cross(&tri[2]));
        }
        v6_sum / 6.0
    }

    /// Absolute volume of a closed mesh in mm³ (helper around `signed_volume_mm3`).
    pub fn volume_mm3(&self) -> f64 {
        self.signed_volume_mm3().abs()
    }

    /// Axis-aligned bounding box over all vertex positions
    pub fn bounding_box(&self) -> BBox3 {
        let mut bbox = BBox3::empty();
        for position in self.positions() {
            bbox.include_point(*position);
        }
        bbox
    }
}

/// Unit normal of triangle (a, b, c) from its counter-clockwise winding.
///
/// Returns the zero vector for degenerate triangles.
pub(crate) fn face_normal(
    a: Vector3<f64>,
    b: Vector3<f64>,
    c: Vector3<f64>,
) -> Vector3<f64> {
    let normal = (b - a).cross(&(c - a));
    let norm = normal.norm();
    if norm <= f64::EPSILON {
        Vector3::zeros()
    } else {
        normal / norm
    }
}
