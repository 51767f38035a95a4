//! # printcost
//!
//! Mesh analysis and cost estimation for 3D-printable solids.
//!
//! The engine takes a triangulated surface (an STL-style triangle soup),
//! computes the enclosed volume via the divergence theorem, the
//! axis-aligned bounding box, and a support-material verdict from the
//! facet normals, then prices the print from material, infill and
//! throughput constants.
//!
//! ## Features
//!
//! - **Pure analysis**: volume, extents and support classification are
//!   independent single passes over an immutable mesh
//! - **Stateless engine**: every estimate is a deterministic, independent
//!   computation; estimators are freely shareable across threads
//! - **Stable output record**: the serialized estimate is a fixed wire
//!   contract for UI and persistence collaborators
//! - **STL ingestion**: binary and ASCII STL, millimeter units
//!
//! ## Example
//!
//! ```rust
//! use nalgebra::Vector3;
//! use printcost::{BBox3, Estimator, PricingParams, TriangleMesh};
//!
//! // 10 mm cube == 1 cm³
//! let mesh = TriangleMesh::from_bbox(&BBox3::new(
//!     Vector3::zeros(),
//!     Vector3::new(10.0, 10.0, 10.0),
//! ));
//!
//! let estimator = Estimator::new();
//! let result = estimator.estimate(&mesh, &PricingParams::default());
//! assert!((result.volume_cm3 - 1.0).abs() < 0.01);
//! ```

pub mod analysis;
pub mod error;
pub mod estimate;
pub mod log;
pub mod mesh;
pub mod pricing;
pub mod types;
pub mod utils;

// Re-exports
pub use error::{Error, Result};
pub use estimate::{DimsCm, EstimateResult, Estimator};
pub use log::LogFile;
pub use mesh::TriangleMesh;
pub use pricing::{
    format_duration, price, EstimatorConfig, Material, PricingParams, Quote,
    DEFAULT_INFILL_PERCENT,
};
pub use types::BBox3;
pub use utils::TempFolder;
