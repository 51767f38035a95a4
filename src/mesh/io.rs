//! STL file I/O support for TriangleMesh

use super::TriangleMesh;
use crate::{Error, Result};
use nalgebra::Vector3;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

const HEADER_LEN: usize = 80;

/// Save mesh to a binary STL file
pub(super) fn save_stl_impl<P: AsRef<Path>>(mesh: &TriangleMesh, path: P) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::FileSave(format!("Failed to create STL file: {}", e)))?;

    let mut writer = BufWriter::new(file);

    // Write header (80 bytes)
    let mut header = String::from("printcost UNITS=mm");
    header.truncate(HEADER_LEN);
    while header.len() < HEADER_LEN {
        header.push(' ');
    }
    writer
        .write_all(header.as_bytes())
        .map_err(|e| Error::FileSave(format!("Failed to write STL header: {}", e)))?;

    // Write triangle count
    let triangle_count = mesh.triangle_count() as u32;
    writer
        .write_all(&triangle_count.to_le_bytes())
        .map_err(|e| Error::FileSave(format!("Failed to write triangle count: {}", e)))?;

    // Write triangles
    for (tri, normal) in mesh.positions().chunks_exact(3).zip(mesh.normals()) {
        write_f32_triplet(&mut writer, normal)?;
        for vertex in tri {
            write_f32_triplet(&mut writer, vertex)?;
        }
        writer
            .write_all(&[0u8, 0u8])
            .map_err(|e| Error::FileSave(format!("Failed to write attribute: {}", e)))?;
    }

    Ok(())
}

/// Load mesh from an STL file
///
/// Binary STL is the primary format. Files whose header starts with `solid`
/// and whose body spells out `vertex` lines are parsed as ASCII STL.
/// Coordinates are taken as millimeters.
pub(super) fn load_stl_impl<P: AsRef<Path>>(path: P) -> Result<TriangleMesh> {
    let file = File::open(path)
        .map_err(|e| Error::FileLoad(format!("Failed to open STL file: {}", e)))?;

    let mut reader = BufReader::new(file);

    // Read header (80 bytes)
    let mut header = [0u8; HEADER_LEN];
    reader
        .read_exact(&mut header)
        .map_err(|e| Error::FileLoad(format!("Failed to read STL header: {}", e)))?;

    // Detect ASCII STL files
    let header_str = String::from_utf8_lossy(&header).to_string();
    if header_str.trim_start().to_lowercase().starts_with("solid") {
        let peek = reader
            .fill_buf()
            .map_err(|e| Error::FileLoad(format!("Failed to read STL body: {}", e)))?;
        if String::from_utf8_lossy(peek).to_lowercase().contains("vertex") {
            let mut body = String::new();
            reader
                .read_to_string(&mut body)
                .map_err(|e| Error::FileLoad(format!("Failed to read STL body: {}", e)))?;
            let text = format!("{}{}", header_str, body);
            return parse_ascii(&text);
        }
    }

    // Read triangle count
    let triangle_count = read_u32(&mut reader)?;

    let mut mesh = TriangleMesh::new();

    // Read triangles
    for _ in 0..triangle_count {
        let normal = read_f32_triplet(&mut reader)?;
        let a = read_f32_triplet(&mut reader)?;
        let b = read_f32_triplet(&mut reader)?;
        let c = read_f32_triplet(&mut reader)?;

        // Skip attribute bytes
        let mut attr = [0u8; 2];
        reader
            .read_exact(&mut attr)
            .map_err(|e| Error::FileLoad(format!("Failed to read attribute: {}", e)))?;

        push_facet(&mut mesh, a, b, c, normal);
    }

    Ok(mesh)
}

/// Parse an ASCII STL document
fn parse_ascii(text: &str) -> Result<TriangleMesh> {
    let mut mesh = TriangleMesh::new();
    let mut normal = Vector3::zeros();
    let mut vertices: Vec<Vector3<f64>> = Vec::with_capacity(3);

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if let Some(data) = line.strip_prefix("facet normal") {
            normal = parse_vector(data, line_no)?;
            vertices.clear();
        } else if let Some(data) = line.strip_prefix("vertex") {
            vertices.push(parse_vector(data, line_no)?);
        } else if line.starts_with("endfacet") {
            if vertices.len() != 3 {
                return Err(Error::FileLoad(format!(
                    "Line {}: facet with {} vertices",
                    line_no + 1,
                    vertices.len()
                )));
            }
            push_facet(&mut mesh, vertices[0], vertices[1], vertices[2], normal);
            vertices.clear();
        }
    }

    Ok(mesh)
}

/// Parse three whitespace-separated floats
fn parse_vector(data: &str, line_no: usize) -> Result<Vector3<f64>> {
    let mut parts = data.split_whitespace();
    let mut component = |name: &str| -> Result<f64> {
        let value = parts.next().ok_or_else(|| {
            Error::FileLoad(format!("Line {}: missing {} component", line_no + 1, name))
        })?;
        value.parse::<f64>().map_err(|_| {
            Error::FileLoad(format!(
                "Line {}: invalid {} component: {}",
                line_no + 1,
                name,
                value
            ))
        })
    };
    Ok(Vector3::new(component("x")?, component("y")?, component("z")?))
}

/// Append a facet, normalizing the stored normal.
///
/// Exporters commonly write a zeroed facet normal; derive it from the
/// winding in that case.
fn push_facet(
    mesh: &mut TriangleMesh,
    a: Vector3<f64>,
    b: Vector3<f64>,
    c: Vector3<f64>,
    stored_normal: Vector3<f64>,
) {
    let norm = stored_normal.norm();
    if norm > f64::EPSILON {
        mesh.add_triangle_with_normal(a, b, c, stored_normal / norm);
    } else {
        mesh.add_triangle(a, b, c);
    }
}

/// Write a vector as three little-endian f32 values
fn write_f32_triplet<W: Write>(writer: &mut W, v: &Vector3<f64>) -> Result<()> {
    for value in [v.x as f32, v.y as f32, v.z as f32] {
        writer
            .write_all(&value.to_le_bytes())
            .map_err(|e| Error::FileSave(format!("Failed to write float: {}", e)))?;
    }
    Ok(())
}

/// Read three little-endian f32 values as a vector
fn read_f32_triplet<R: Read>(reader: &mut R) -> Result<Vector3<f64>> {
    let mut values = [0.0f64; 3];
    for value in &mut values {
        let mut bytes = [0u8; 4];
        reader
            .read_exact(&mut bytes)
            .map_err(|e| Error::FileLoad(format!("Failed to read float: {}", e)))?;
        *value = f32::from_le_bytes(bytes) as f64;
    }
    Ok(Vector3::new(values[0], values[1], values[2]))
}

/// Read u32 in little-endian format
fn read_u32<R: Read>(reader: &mut R) -> Result<u32> {
    let mut bytes = [0u8; 4];
    reader
        .read_exact(&mut bytes)
        .map_err(|e| Error::FileLoad(format!("Failed to read u32: {}", e)))?;
    Ok(u32::from_le_bytes(bytes))
}
