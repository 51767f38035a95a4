//! Independent analysis passes over a triangle mesh
//!
//! Volume, bounding-box extents and support classification are each a
//! single pass over the triangle list with no data dependency between
//! them; hosts with parallel execution may run them concurrently over the
//! same immutable mesh before joining for the pricing step.

use crate::{EstimatorConfig, TriangleMesh};
use nalgebra::Vector3;

const MM3_PER_CM3: f64 = 1000.0;
const MM_PER_CM: f64 = 10.0;

/// Enclosed volume of the mesh in cm³, unrounded.
///
/// Magnitude of the divergence-theorem sum over all triangles, exact for
/// any closed, consistently oriented surface regardless of convexity. A
/// mesh that is not watertight yields an approximation, not an error; an
/// empty mesh yields zero.
pub fn volume_cm3(mesh: &TriangleMesh) -> f64 {
    mesh.volume_mm3() / MM3_PER_CM3
}

/// Axis-aligned extents of the mesh in cm, unrounded.
///
/// All-zero for an empty mesh.
pub fn extents_cm(mesh: &TriangleMesh) -> Vector3<f64> {
    mesh.bounding_box().size() / MM_PER_CM
}

/// Decide whether the mesh needs print supports.
///
/// "Up" is the +Y axis; callers align the print orientation before
/// analysis. A facet whose unit normal has a Y component below
/// `config.overhang_normal_y` faces downward enough to require support
/// material. The mesh needs supports when the overhang fraction of all
/// facets exceeds `config.support_ratio_threshold`. An empty mesh needs
/// none.
pub fn supports_needed(mesh: &TriangleMesh, config: &EstimatorConfig) -> bool {
    let total = mesh.triangle_count();
    if total == 0 {
        return false;
    }
    let overhangs = mesh
        .normals()
        .iter()
        .filter(|normal| normal.y < config.overhang_normal_y)
        .count();
    overhangs as f64 / total as f64 > config.support_ratio_threshold
}
