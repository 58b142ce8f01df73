/// Binary STL serialisation for grid meshes
use glam::Vec3;
use heightfield_mesh::{MeshData, Vertex};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const HEADER_LEN: usize = 80;
const BYTES_PER_TRIANGLE: usize = 50;

/// Write a mesh to disk as binary STL, splitting each quad face into two
/// triangles that keep the quad's winding.
pub fn write_binary_stl(
    path: &Path,
    name: &str,
    mesh: &MeshData,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_stl(&mut writer, name, mesh)?;
    writer.flush()?;

    Ok(())
}

/// Serialise a mesh in binary STL layout: an 80-byte header carrying the
/// mesh name, a little-endian triangle count, then 50 bytes per triangle.
pub fn write_stl<W: Write>(out: &mut W, name: &str, mesh: &MeshData) -> std::io::Result<()> {
    let mut header = [0u8; HEADER_LEN];
    let label = name.as_bytes();
    let len = label.len().min(HEADER_LEN);
    header[..len].copy_from_slice(&label[..len]);

    out.write_all(&header)?;
    out.write_all(&((mesh.faces.len() * 2) as u32).to_le_bytes())?;

    for face in &mesh.faces {
        let [a, b, c, d] = *face;
        write_facet(out, &mesh.vertices, a, b, c)?;
        write_facet(out, &mesh.vertices, a, c, d)?;
    }

    Ok(())
}

/// Serialise one triangle facet: normal, three corners, attribute word.
fn write_facet<W: Write>(
    out: &mut W,
    vertices: &[Vertex],
    a: u32,
    b: u32,
    c: u32,
) -> std::io::Result<()> {
    let pa = to_vec3(vertices[a as usize]);
    let pb = to_vec3(vertices[b as usize]);
    let pc = to_vec3(vertices[c as usize]);
    let normal = (pb - pa).cross(pc - pa).normalize_or_zero();

    let mut bytes = Vec::with_capacity(BYTES_PER_TRIANGLE);
    for point in [normal.to_array(), pa.to_array(), pb.to_array(), pc.to_array()] {
        for value in point {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
    }
    bytes.extend_from_slice(&0u16.to_le_bytes());

    out.write_all(&bytes)
}

fn to_vec3(vertex: Vertex) -> Vec3 {
    Vec3::from(vertex.to_array())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_quad_mesh() -> MeshData {
        MeshData {
            vertices: vec![
                Vertex::new(0.0, 0.0, 0.0),
                Vertex::new(0.0, 1.0, 0.0),
                Vertex::new(1.0, 1.0, 0.0),
                Vertex::new(1.0, 0.0, 0.0),
            ],
            faces: vec![[0, 1, 2, 3]],
        }
    }

    #[test]
    fn layout_is_header_count_and_fifty_bytes_per_triangle() {
        let mut out = Vec::new();
        write_stl(&mut out, "DepthObject", &unit_quad_mesh()).unwrap();

        assert_eq!(out.len(), HEADER_LEN + 4 + 2 * BYTES_PER_TRIANGLE);
        assert_eq!(&out[..11], b"DepthObject");
        assert!(out[11..HEADER_LEN].iter().all(|&b| b == 0));
        assert_eq!(
            u32::from_le_bytes([out[80], out[81], out[82], out[83]]),
            2
        );
    }

    #[test]
    fn over_long_names_are_truncated_to_the_header() {
        let name = "x".repeat(200);
        let mut out = Vec::new();
        write_stl(&mut out, &name, &unit_quad_mesh()).unwrap();

        assert_eq!(&out[..HEADER_LEN], "x".repeat(HEADER_LEN).as_bytes());
    }

    #[test]
    fn split_triangles_keep_the_quad_winding() {
        let mut out = Vec::new();
        write_stl(&mut out, "quad", &unit_quad_mesh()).unwrap();

        // Both triangles of the split share the quad's orientation, so both
        // normals point the same way out of the XY plane.
        for triangle in 0..2 {
            let base = HEADER_LEN + 4 + triangle * BYTES_PER_TRIANGLE;
            let nz = f32::from_le_bytes([
                out[base + 8],
                out[base + 9],
                out[base + 10],
                out[base + 11],
            ]);
            assert!((nz - (-1.0)).abs() < 1e-6);
        }
    }
}
