use printcost::{Estimator, LogFile, Material, PricingParams, TriangleMesh};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "model.stl".to_string());
    let material = Material::from_label(&args.next().unwrap_or_default());
    let infill_percent = args.next().and_then(|value| value.parse::<f64>().ok());

    let log = LogFile::new(None, true)?;
    log.log(format!("Loading STL file: {}", path))?;

    let mesh = TriangleMesh::load_stl(&path)?;
    log.log(format!("  Triangles: {}", mesh.triangle_count()))?;
    log.log(format!("  Bounds:    {}", mesh.bounding_box()))?;

    let params = PricingParams {
        material,
        infill_percent,
        layer_height_mm: None,
    };
    let result = Estimator::new().estimate(&mesh, &params);
    log.log(format!(
        "Estimated {} at {}% infill",
        material.as_str(),
        params.infill_fraction() * 100.0
    ))?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
