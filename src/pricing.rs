//! Material and print-time pricing
//!
//! Converts a raw enclosed volume plus per-request parameters into
//! effective material volume, cost and print time. Everything here stays
//! at full f64 precision; rounding to 2 decimals happens once, at the
//! output boundary in [`crate::Estimator::estimate`].

use crate::{Error, Result};

/// Default infill percentage applied when a request carries none.
pub const DEFAULT_INFILL_PERCENT: f64 = 20.0;

/// Print material selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Material {
    /// Polylactic acid, the baseline material (also the rate fallback).
    #[default]
    Pla,
    /// Acrylonitrile butadiene styrene.
    Abs,
    /// Polyethylene terephthalate glycol.
    Petg,
}

impl Material {
    /// Get a human-readable name for the material
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pla => "PLA",
            Self::Abs => "ABS",
            Self::Petg => "PETG",
        }
    }

    /// Parse a material label.
    ///
    /// Matching is case-sensitive and exact; any other label selects PLA,
    /// which carries the fallback rate.
    pub fn from_label(label: &str) -> Self {
        match label {
            "ABS" => Self::Abs,
            "PETG" => Self::Petg,
            _ => Self::Pla,
        }
    }
}

/// Immutable pricing and classification constants.
///
/// `Default` reproduces the reference table; alternate tables for testing
/// or other shops go through the `with_*` builders and
/// [`crate::Estimator::with_config`].
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorConfig {
    /// Material rate per cm³ for PLA (also the fallback rate).
    pub rate_pla: f64,
    /// Material rate per cm³ for ABS.
    pub rate_abs: f64,
    /// Material rate per cm³ for PETG.
    pub rate_petg: f64,
    /// Assumed print throughput in cm³ per hour.
    pub print_speed_cm3_per_hour: f64,
    /// Material surcharge fraction applied when supports are needed.
    pub support_extra: f64,
    /// Fixed service charge added to every quote.
    pub service_charge: f64,
    /// Fraction of the solid volume scaled by infill; the remainder models
    /// shells, walls and top/bottom layers.
    pub solid_factor: f64,
    /// Facets whose unit-normal Y component is below this value count as
    /// overhangs (cos 45°).
    pub overhang_normal_y: f64,
    /// Overhang facet fraction above which the mesh needs supports.
    pub support_ratio_threshold: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            rate_pla: 5.0,
            rate_abs: 6.5,
            rate_petg: 7.0,
            print_speed_cm3_per_hour: 15.0,
            support_extra: 0.2,
            service_charge: 30.0,
            solid_factor: 0.8,
            overhang_normal_y: std::f64::consts::FRAC_PI_4.cos(),
            support_ratio_threshold: 0.1,
        }
    }
}

impl EstimatorConfig {
    /// Per-cm³ rate for the given material
    pub fn rate_for(&self, material: Material) -> f64 {
        match material {
            Material::Pla => self.rate_pla,
            Material::Abs => self.rate_abs,
            Material::Petg => self.rate_petg,
        }
    }

    /// Replace the per-material rate table
    #[must_use]
    pub fn with_rates(mut self, pla: f64, abs: f64, petg: f64) -> Self {
        self.rate_pla = pla;
        self.rate_abs = abs;
        self.rate_petg = petg;
        self
    }

    /// Replace the assumed print throughput
    #[must_use]
    pub fn with_print_speed(mut self, cm3_per_hour: f64) -> Self {
        self.print_speed_cm3_per_hour = cm3_per_hour;
        self
    }

    /// Replace the fixed service charge
    #[must_use]
    pub fn with_service_charge(mut self, charge: f64) -> Self {
        self.service_charge = charge;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !(self.print_speed_cm3_per_hour > 0.0) {
            return Err(Error::InvalidParameter(
                "print speed must be positive".to_string(),
            ));
        }
        for (name, rate) in [
            ("PLA", self.rate_pla),
            ("ABS", self.rate_abs),
            ("PETG", self.rate_petg),
        ] {
            if !rate.is_finite() || rate < 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "{} rate must be a non-negative number",
                    name
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.solid_factor) {
            return Err(Error::InvalidParameter(
                "solid factor must be within [0, 1]".to_string(),
            ));
        }
        if !self.support_extra.is_finite() || self.support_extra < 0.0 {
            return Err(Error::InvalidParameter(
                "support surcharge must be a non-negative number".to_string(),
            ));
        }
        if !self.service_charge.is_finite() {
            return Err(Error::InvalidParameter(
                "service charge must be a number".to_string(),
            ));
        }
        Ok(())
    }
}

/// Per-request pricing parameters
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PricingParams {
    /// Selected material.
    pub material: Material,
    /// Infill percentage; clamped to [0, 100], `None` selects the default
    /// of 20.
    pub infill_percent: Option<f64>,
    /// Layer height in mm. Accepted but not consumed by the cost formula;
    /// reserved for print-time refinement.
    pub layer_height_mm: Option<f64>,
}

impl PricingParams {
    /// Infill as a fraction in [0, 1] after clamping and defaulting.
    ///
    /// Non-finite values fall back to the default instead of failing; only
    /// missing geometry is a hard error in this crate.
    pub fn infill_fraction(&self) -> f64 {
        let percent = match self.infill_percent {
            Some(value) if value.is_finite() => value,
            _ => DEFAULT_INFILL_PERCENT,
        };
        percent.clamp(0.0, 100.0) / 100.0
    }
}

/// Full-precision pricing breakdown, prior to output rounding
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Estimated material consumption in cm³.
    pub effective_volume_cm3: f64,
    /// Material cost at the selected rate.
    pub material_cost: f64,
    /// Estimated print time in whole seconds.
    pub print_seconds: u64,
    /// Fixed service charge.
    pub service_charge: f64,
    /// Material cost plus service charge.
    pub total_cost: f64,
}

/// Price a raw enclosed volume under the given configuration
pub fn price(
    config: &EstimatorConfig,
    raw_volume_cm3: f64,
    params: &PricingParams,
    supports: bool,
) -> Quote {
    let infill = params.infill_fraction();

    let mut effective_volume_cm3 =
        raw_volume_cm3 * (config.solid_factor * infill + (1.0 - config.solid_factor));
    if supports {
        effective_volume_cm3 *= 1.0 + config.support_extra;
    }

    let material_cost = effective_volume_cm3 * config.rate_for(params.material);
    let print_hours = effective_volume_cm3 / config.print_speed_cm3_per_hour;
    let print_seconds = (print_hours * 3600.0).round() as u64;
    let total_cost = material_cost + config.service_charge;

    Quote {
        effective_volume_cm3,
        material_cost,
        print_seconds,
        service_charge: config.service_charge,
        total_cost,
    }
}

/// Format a duration in whole seconds as zero-padded `HH:MM:SS`
pub fn format_duration(seconds: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}
