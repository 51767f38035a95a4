use nalgebra::Vector3;
use printcost::{BBox3, Estimator, EstimatorConfig, Material, PricingParams, TriangleMesh};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 20 mm cube == 8 cm³
    let mesh = TriangleMesh::from_bbox(&BBox3::new(
        Vector3::zeros(),
        Vector3::new(20.0, 20.0, 20.0),
    ));

    let params = PricingParams {
        material: Material::Petg,
        infill_percent: Some(35.0),
        layer_height_mm: Some(0.2),
    };

    let reference = Estimator::new().estimate(&mesh, &params);
    println!(
        "Reference rates: total {:.2} ({} print time, supports: {})",
        reference.total_cost, reference.print_time, reference.supports_needed
    );

    let premium = Estimator::with_config(EstimatorConfig::default().with_rates(6.0, 8.0, 9.5))?;
    let quoted = premium.estimate(&mesh, &params);
    println!(
        "Premium rates:   total {:.2} ({} print time)",
        quoted.total_cost, quoted.print_time
    );

    Ok(())
}
