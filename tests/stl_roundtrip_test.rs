use nalgebra::Vector3;
use printcost::{BBox3, Error, Estimator, PricingParams, TempFolder, TriangleMesh};
use std::fs;
use std::io::Write;

fn cube_20mm() -> TriangleMesh {
    TriangleMesh::from_bbox(&BBox3::new(
        Vector3::zeros(),
        Vector3::new(20.0, 20.0, 20.0),
    ))
}

#[test]
fn test_binary_roundtrip() {
    let mesh = cube_20mm();

    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let path = tmp.path().join("cube.stl");
    mesh.save_stl(&path).expect("Failed to save STL");

    // Each triangle is 50 bytes (12 floats * 4 bytes + 2 attribute bytes)
    let metadata = fs::metadata(&path).expect("Failed to read file metadata");
    let expected_size = 80 + 4 + mesh.triangle_count() * 50;
    assert_eq!(metadata.len(), expected_size as u64);

    let loaded = TriangleMesh::load_stl(&path).expect("Failed to load STL");
    assert_eq!(loaded.triangle_count(), mesh.triangle_count());
    assert_eq!(loaded.vertex_count(), mesh.vertex_count());
    assert!((loaded.volume_mm3() - 8000.0).abs() < 1e-3);

    for index in 0..mesh.triangle_count() {
        let expected = mesh.normal(index).unwrap();
        let actual = loaded.normal(index).unwrap();
        assert!((expected - actual).norm() < 1e-6, "normal {} drifted", index);
    }
}

#[test]
fn test_estimate_from_file() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let path = tmp.path().join("cube.stl");
    cube_20mm().save_stl(&path).expect("Failed to save STL");

    let mesh = TriangleMesh::load_stl(&path).expect("Failed to load STL");
    let result = Estimator::new().estimate(&mesh, &PricingParams::default());

    // 20 mm cube == 8 cm³, 2 cm on each side
    assert!((result.volume_cm3 - 8.0).abs() < 0.01);
    assert!((result.dims_cm.x - 2.0).abs() < 0.01);
    assert!((result.dims_cm.y - 2.0).abs() < 0.01);
    assert!((result.dims_cm.z - 2.0).abs() < 0.01);
}

#[test]
fn test_ascii_stl_load() {
    let text = "solid tetra\n\
        facet normal 0 0 -1\n\
        outer loop\n\
        vertex 0 0 0\n\
        vertex 0 10 0\n\
        vertex 10 0 0\n\
        endloop\n\
        endfacet\n\
        facet normal 0 -1 0\n\
        outer loop\n\
        vertex 0 0 0\n\
        vertex 10 0 0\n\
        vertex 0 0 10\n\
        endloop\n\
        endfacet\n\
        facet normal -1 0 0\n\
        outer loop\n\
        vertex 0 0 0\n\
        vertex 0 0 10\n\
        vertex 0 10 0\n\
        endloop\n\
        endfacet\n\
        facet normal 0.577350 0.577350 0.577350\n\
        outer loop\n\
        vertex 10 0 0\n\
        vertex 0 10 0\n\
        vertex 0 0 10\n\
        endloop\n\
        endfacet\n\
        endsolid tetra\n";

    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let path = tmp.path().join("tetra.stl");
    fs::write(&path, text).expect("Failed to write ASCII STL");

    let mesh = TriangleMesh::load_stl(&path).expect("Failed to load ASCII STL");
    assert_eq!(mesh.triangle_count(), 4);

    // Right tetrahedron with 10 mm legs: volume = 10³/6 mm³
    assert!((mesh.volume_mm3() - 1000.0 / 6.0).abs() < 1e-6);
}

#[test]
fn test_truncated_binary_file_errors() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let path = tmp.path().join("truncated.stl");

    // Header promises 5 triangles but the body carries none
    let mut file = fs::File::create(&path).expect("Failed to create file");
    file.write_all(&[0u8; 80]).unwrap();
    file.write_all(&5u32.to_le_bytes()).unwrap();
    drop(file);

    let err = TriangleMesh::load_stl(&path).unwrap_err();
    assert!(matches!(err, Error::FileLoad(_)));
}

#[test]
fn test_missing_file_errors() {
    let err = TriangleMesh::load_stl("/nonexistent/model.stl").unwrap_err();
    assert!(matches!(err, Error::FileLoad(_)));
}
