//! Estimator front door and the output record

use crate::{analysis, pricing, EstimatorConfig, PricingParams, Result, TriangleMesh};
use serde::{Deserialize, Serialize};

/// Axis-aligned model dimensions in centimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimsCm {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// The immutable estimation record returned to callers.
///
/// The serialized field names are a stable contract toward any UI or
/// persistence collaborator; the `camelCase` renames below are part of
/// that contract, not a style choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Raw enclosed volume in cm³, 2-decimal rounded.
    pub volume_cm3: f64,
    /// Estimated material consumption in cm³ after infill and supports,
    /// 2-decimal rounded.
    pub effective_volume_cm3: f64,
    /// Bounding-box dimensions in cm, each 2-decimal rounded.
    pub dims_cm: DimsCm,
    /// Whether the model needs support material.
    #[serde(rename = "supportsNeeded")]
    pub supports_needed: bool,
    /// Estimated print time as `HH:MM:SS`.
    #[serde(rename = "printTime")]
    pub print_time: String,
    /// Material cost, 2-decimal rounded.
    #[serde(rename = "materialCost")]
    pub material_cost: f64,
    /// Fixed service charge.
    #[serde(rename = "serviceCharge")]
    pub service_charge: f64,
    /// Material cost plus service charge, 2-decimal rounded.
    #[serde(rename = "totalCost")]
    pub total_cost: f64,
}

/// Stateless estimation engine.
///
/// Owns a validated [`EstimatorConfig`]. Each `estimate` call is an
/// independent computation with no shared mutable state, so one estimator
/// may serve many meshes, concurrently if the host wishes.
#[derive(Debug, Clone)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    /// Create an estimator with the reference configuration
    pub fn new() -> Self {
        Self {
            config: EstimatorConfig::default(),
        }
    }

    /// Create an estimator with a custom configuration.
    ///
    /// Rejects configurations that cannot price anything sensibly, such as
    /// a non-positive print speed or a negative material rate.
    pub fn with_config(config: EstimatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Access the active configuration
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Analyze a mesh and price the print.
    ///
    /// Volume, extents and support classification are independent passes
    /// over the immutable mesh, joined here for the pricing step. Monetary
    /// and volume fields are rounded to 2 decimals at this boundary and
    /// nowhere earlier.
    pub fn estimate(&self, mesh: &TriangleMesh, params: &PricingParams) -> EstimateResult {
        let volume_cm3 = analysis::volume_cm3(mesh);
        let extents = analysis::extents_cm(mesh);
        let supports_needed = analysis::supports_needed(mesh, &self.config);

        let quote = pricing::price(&self.config, volume_cm3, params, supports_needed);

        EstimateResult {
            volume_cm3: round2(volume_cm3),
            effective_volume_cm3: round2(quote.effective_volume_cm3),
            dims_cm: DimsCm {
                x: round2(extents.x),
                y: round2(extents.y),
                z: round2(extents.z),
            },
            supports_needed,
            print_time: pricing::format_duration(quote.print_seconds),
            material_cost: round2(quote.material_cost),
            service_charge: quote.service_charge,
            total_cost: round2(quote.total_cost),
        }
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to 2 decimal places at the output boundary
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
