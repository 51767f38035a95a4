use nalgebra::Vector3;
use printcost::{
    BBox3, Estimator, EstimatorConfig, Material, PricingParams, TriangleMesh,
};

fn unit_cube_10mm() -> TriangleMesh {
    TriangleMesh::from_bbox(&BBox3::new(
        Vector3::zeros(),
        Vector3::new(10.0, 10.0, 10.0),
    ))
}

#[test]
fn test_unit_cube_volume_and_dims() {
    let result = Estimator::new().estimate(&unit_cube_10mm(), &PricingParams::default());

    assert!((result.volume_cm3 - 1.0).abs() < 0.01);
    assert!((result.dims_cm.x - 1.0).abs() < 0.01);
    assert!((result.dims_cm.y - 1.0).abs() < 0.01);
    assert!((result.dims_cm.z - 1.0).abs() < 0.01);
}

#[test]
fn test_orientation_reversal_preserves_volume() {
    let mesh = unit_cube_10mm();

    // Swap two vertices per triangle and flip the normals
    let mut reversed = TriangleMesh::new();
    for index in 0..mesh.triangle_count() {
        let (a, b, c) = mesh.triangle(index).unwrap();
        let normal = mesh.normal(index).unwrap();
        reversed.add_triangle_with_normal(a, c, b, -normal);
    }

    let forward = mesh.signed_volume_mm3();
    let backward = reversed.signed_volume_mm3();
    assert!((forward + backward).abs() < 1e-9, "signs must be opposite");
    assert!((mesh.volume_mm3() - reversed.volume_mm3()).abs() < 1e-9);

    let result = Estimator::new().estimate(&reversed, &PricingParams::default());
    assert!((result.volume_cm3 - 1.0).abs() < 0.01);
}

#[test]
fn test_empty_mesh_full_pipeline() {
    let result = Estimator::new().estimate(&TriangleMesh::new(), &PricingParams::default());

    assert_eq!(result.volume_cm3, 0.0);
    assert_eq!(result.effective_volume_cm3, 0.0);
    assert_eq!(result.dims_cm.x, 0.0);
    assert_eq!(result.dims_cm.y, 0.0);
    assert_eq!(result.dims_cm.z, 0.0);
    assert!(!result.supports_needed);
    assert_eq!(result.print_time, "00:00:00");
    assert_eq!(result.total_cost, 30.0);
}

#[test]
fn test_idempotence() {
    let mesh = unit_cube_10mm();
    let params = PricingParams {
        material: Material::Abs,
        infill_percent: Some(42.0),
        layer_height_mm: Some(0.2),
    };

    let estimator = Estimator::new();
    let first = estimator.estimate(&mesh, &params);
    let second = estimator.estimate(&mesh, &params);
    assert_eq!(first, second);
}

#[test]
fn test_cube_quote_figures() {
    // The cube classifies as needing supports (vertical walls count as
    // overhangs), so: 1 cm³ * (0.8*0.2 + 0.2) * 1.2 = 0.432 cm³,
    // cost 2.16, 104 s of print time, total 32.16.
    let result = Estimator::new().estimate(&unit_cube_10mm(), &PricingParams::default());

    assert!(result.supports_needed);
    assert!((result.effective_volume_cm3 - 0.43).abs() < 1e-9);
    assert!((result.material_cost - 2.16).abs() < 1e-9);
    assert_eq!(result.print_time, "00:01:44");
    assert_eq!(result.service_charge, 30.0);
    assert!((result.total_cost - 32.16).abs() < 1e-9);
}

#[test]
fn test_layer_height_does_not_change_quote() {
    let mesh = unit_cube_10mm();
    let thin = PricingParams {
        layer_height_mm: Some(0.1),
        ..PricingParams::default()
    };
    let thick = PricingParams {
        layer_height_mm: Some(0.3),
        ..PricingParams::default()
    };

    let estimator = Estimator::new();
    assert_eq!(estimator.estimate(&mesh, &thin), estimator.estimate(&mesh, &thick));
}

#[test]
fn test_alternate_rate_table() {
    let config = EstimatorConfig::default().with_rates(10.0, 20.0, 30.0);
    let estimator = Estimator::with_config(config).unwrap();

    let params = PricingParams {
        material: Material::Petg,
        ..PricingParams::default()
    };
    let result = estimator.estimate(&unit_cube_10mm(), &params);

    // 0.432 cm³ at 30 per cm³
    assert!((result.material_cost - 12.96).abs() < 1e-9);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = EstimatorConfig::default().with_print_speed(0.0);
    let err = Estimator::with_config(config).unwrap_err();
    assert!(matches!(err, printcost::Error::InvalidParameter(_)));
}

#[test]
fn test_wire_contract_field_names() {
    let result = Estimator::new().estimate(&unit_cube_10mm(), &PricingParams::default());
    let json = serde_json::to_value(&result).unwrap();
    let object = json.as_object().unwrap();

    for field in [
        "volume_cm3",
        "effective_volume_cm3",
        "dims_cm",
        "supportsNeeded",
        "printTime",
        "materialCost",
        "serviceCharge",
        "totalCost",
    ] {
        assert!(object.contains_key(field), "missing field {}", field);
    }
    assert_eq!(object.len(), 8);

    let dims = object["dims_cm"].as_object().unwrap();
    assert!(dims.contains_key("x") && dims.contains_key("y") && dims.contains_key("z"));
}
