//! STL (Stereolithography) file format support.
//!
//! Supports both ASCII and binary STL. Vascular surface segmentations are
//! almost always exported as STL, so this is the input boundary of the
//! pipeline.
//!
//! # Format Detection
//!
//! The loader decides ASCII vs binary from content, not extension:
//! - ASCII files start with `solid` (after optional whitespace)
//! - Binary files have an 80-byte header followed by a face count; the
//!   header often contains null bytes even when it happens to start with
//!   `solid`
//!
//! # Binary Layout
//!
//! ```text
//! UINT8[80]    – Header (ignored)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector (ignored on load, recomputed on save)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (usually 0)
//! end
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use mesh_types::{IndexedMesh, Triangle, Vertex, Vector3};

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one triangle record in binary STL (normal + 3 vertices + attribute).
const TRIANGLE_SIZE: usize = 50;

/// Load a mesh from an STL file.
///
/// Automatically detects ASCII vs binary format. The loaded mesh is a
/// triangle soup: every face owns three fresh vertices, so shared vertices
/// appear multiple times. Stored facet normals are discarded.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is not
/// valid STL.
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_stl;
///
/// let mesh = load_stl("aorta_surface.stl").unwrap();
/// println!("loaded {} faces", mesh.faces.len());
/// ```
pub fn load_stl<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    let mut reader = BufReader::new(file);

    // The prefix that decides the format: 80-byte header plus face count
    let mut prefix = Vec::with_capacity(HEADER_SIZE + 4);
    reader
        .by_ref()
        .take((HEADER_SIZE + 4) as u64)
        .read_to_end(&mut prefix)?;

    if prefix.len() < 6 {
        return Err(IoError::invalid_content("file too small to be valid STL"));
    }

    if is_ascii_stl(&prefix) {
        // Line-based parse needs the file from the start
        drop(reader);
        let reader = BufReader::new(File::open(path)?);
        parse_ascii(reader)
    } else {
        parse_binary(&prefix, reader)
    }
}

/// Decide whether the file prefix looks like ASCII STL.
///
/// Binary headers commonly contain null bytes even when they happen to
/// start with `solid`, so the `solid` keyword alone is not trusted.
fn is_ascii_stl(prefix: &[u8]) -> bool {
    let head = &prefix[..prefix.len().min(HEADER_SIZE)];
    if head.contains(&0) {
        return false;
    }
    String::from_utf8_lossy(head).trim_start().starts_with("solid")
}

/// Parse a binary STL given the already-read prefix.
fn parse_binary<R: Read>(prefix: &[u8], mut reader: R) -> IoResult<IndexedMesh> {
    if prefix.len() < HEADER_SIZE + 4 {
        return Err(IoError::InvalidHeader {
            expected: HEADER_SIZE + 4,
            got: prefix.len(),
        });
    }

    // Face count sits right after the 80-byte header
    let face_count = u32::from_le_bytes([
        prefix[HEADER_SIZE],
        prefix[HEADER_SIZE + 1],
        prefix[HEADER_SIZE + 2],
        prefix[HEADER_SIZE + 3],
    ]);

    let mut mesh = IndexedMesh::with_capacity(face_count as usize * 3, face_count as usize);
    let mut record = [0u8; TRIANGLE_SIZE];

    for i in 0..face_count {
        if let Err(e) = reader.read_exact(&mut record) {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                return Err(IoError::InvalidFaceCount {
                    expected: face_count,
                    got: i,
                });
            }
            return Err(IoError::Io(e));
        }

        // Bytes 0..12 hold the stored normal, 48..50 the attribute count;
        // both are ignored
        push_triangle(
            &mut mesh,
            read_point(&record[12..24]),
            read_point(&record[24..36]),
            read_point(&record[36..48]),
        );
    }

    Ok(mesh)
}

/// Parse an ASCII STL stream.
fn parse_ascii<R: BufRead>(reader: R) -> IoResult<IndexedMesh> {
    let mut mesh = IndexedMesh::new();
    let mut facet: Vec<Vertex> = Vec::with_capacity(3);
    let mut in_loop = false;

    for line in reader.lines() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };

        match keyword.to_ascii_lowercase().as_str() {
            "outer" => {
                in_loop = true;
                facet.clear();
            }
            "vertex" if in_loop => facet.push(parse_vertex(&mut tokens)?),
            "endloop" => in_loop = false,
            "endfacet" => {
                if facet.len() == 3 {
                    push_triangle(&mut mesh, facet[0], facet[1], facet[2]);
                }
                facet.clear();
            }
            "endsolid" => break,
            // "solid", "facet normal ..." and unknown keywords carry no geometry
            _ => {}
        }
    }

    Ok(mesh)
}

/// Parse the three coordinates following a `vertex` keyword.
fn parse_vertex<'a, I: Iterator<Item = &'a str>>(tokens: &mut I) -> IoResult<Vertex> {
    let mut coords = [0.0_f64; 3];
    for c in &mut coords {
        let token = tokens
            .next()
            .ok_or_else(|| IoError::invalid_content("vertex line with fewer than 3 coordinates"))?;
        *c = token.parse()?;
    }
    Ok(Vertex::from_coords(coords[0], coords[1], coords[2]))
}

/// Read a point from 12 bytes (3 little-endian f32s).
fn read_point(buf: &[u8]) -> Vertex {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    Vertex::from_coords(f64::from(x), f64::from(y), f64::from(z))
}

/// Append a triangle as three fresh vertices (triangle soup).
fn push_triangle(mesh: &mut IndexedMesh, v0: Vertex, v1: Vertex, v2: Vertex) {
    #[allow(clippy::cast_possible_truncation)]
    // Mesh indices are u32; meshes beyond 4B vertices are unsupported
    let base = mesh.vertices.len() as u32;
    mesh.vertices.push(v0);
    mesh.vertices.push(v1);
    mesh.vertices.push(v2);
    mesh.faces.push([base, base + 1, base + 2]);
}

/// Save a mesh to an STL file.
///
/// # Arguments
///
/// * `mesh` - The mesh to save
/// * `path` - Output file path
/// * `binary` - If true, save as binary STL; if false, save as ASCII
///
/// Facet normals are recomputed from the vertex winding rather than taken
/// from the mesh; degenerate faces get a zero normal.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
///
/// # Example
///
/// ```no_run
/// use mesh_io::{load_stl, save_stl};
///
/// let mesh = load_stl("input.stl").unwrap();
/// save_stl(&mesh, "output.stl", true).unwrap();
/// ```
pub fn save_stl<P: AsRef<Path>>(mesh: &IndexedMesh, path: P, binary: bool) -> IoResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    if binary {
        write_binary(mesh, writer)
    } else {
        write_ascii(mesh, writer)
    }
}

/// Write a mesh as binary STL.
fn write_binary<W: Write>(mesh: &IndexedMesh, mut writer: W) -> IoResult<()> {
    let mut header = [b' '; HEADER_SIZE];
    let stamp = b"VascuForge binary STL";
    header[..stamp.len()].copy_from_slice(stamp);
    writer.write_all(&header)?;

    #[allow(clippy::cast_possible_truncation)]
    // Mesh indices are u32, so the face count fits
    let face_count = mesh.faces.len() as u32;
    writer.write_all(&face_count.to_le_bytes())?;

    for &face in &mesh.faces {
        let (tri, normal) = facet(mesh, face);

        write_f32_triplet(&mut writer, normal.x, normal.y, normal.z)?;
        for p in tri.vertices() {
            write_f32_triplet(&mut writer, p.x, p.y, p.z)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

/// Write a mesh as ASCII STL.
fn write_ascii<W: Write>(mesh: &IndexedMesh, mut writer: W) -> IoResult<()> {
    writeln!(writer, "solid vascuforge")?;

    for &face in &mesh.faces {
        let (tri, normal) = facet(mesh, face);

        writeln!(
            writer,
            "  facet normal {:.6e} {:.6e} {:.6e}",
            normal.x, normal.y, normal.z
        )?;
        writeln!(writer, "    outer loop")?;
        for p in tri.vertices() {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", p.x, p.y, p.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid vascuforge")?;

    Ok(())
}

/// Resolve a face to its triangle and unit normal (zero if degenerate).
fn facet(mesh: &IndexedMesh, [i0, i1, i2]: [u32; 3]) -> (Triangle, Vector3<f64>) {
    let tri = Triangle::new(
        mesh.vertices[i0 as usize].position,
        mesh.vertices[i1 as usize].position,
        mesh.vertices[i2 as usize].position,
    );
    let normal = tri.normal().unwrap_or_else(Vector3::zeros);
    (tri, normal)
}

/// Write three f64s as little-endian f32s.
fn write_f32_triplet<W: Write>(writer: &mut W, x: f64, y: f64, z: f64) -> IoResult<()> {
    #[allow(clippy::cast_possible_truncation)]
    // f64 to f32 narrowing is what the STL format stores
    {
        writer.write_all(&(x as f32).to_le_bytes())?;
        writer.write_all(&(y as f32).to_le_bytes())?;
        writer.write_all(&(z as f32).to_le_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_types::MeshTopology;

    /// Two triangles with exactly f32-representable coordinates.
    fn two_triangles() -> IndexedMesh {
        let mut mesh = IndexedMesh::new();
        push_triangle(
            &mut mesh,
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(1.5, 0.0, 0.0),
            Vertex::from_coords(0.0, 2.25, 0.0),
        );
        push_triangle(
            &mut mesh,
            Vertex::from_coords(0.0, 0.0, 0.5),
            Vertex::from_coords(-1.25, 0.0, 0.5),
            Vertex::from_coords(0.0, -3.0, 0.5),
        );
        mesh
    }

    #[test]
    fn roundtrip_binary() {
        let original = two_triangles();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mesh.stl");

        save_stl(&original, &path, true).unwrap();
        let loaded = load_stl(&path).unwrap();

        assert_eq!(loaded.face_count(), 2);
        assert_eq!(loaded.vertex_count(), 6);
        // f32-representable coordinates survive the narrowing exactly
        for (a, b) in loaded.vertices.iter().zip(&original.vertices) {
            assert_eq!(a.position, b.position);
        }
    }

    #[test]
    fn roundtrip_ascii() {
        let original = two_triangles();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mesh_ascii.stl");

        save_stl(&original, &path, false).unwrap();
        let loaded = load_stl(&path).unwrap();

        assert_eq!(loaded.face_count(), 2);
        for (a, b) in loaded.vertices.iter().zip(&original.vertices) {
            assert_relative_eq!(a.position.x, b.position.x, epsilon = 1e-5);
            assert_relative_eq!(a.position.y, b.position.y, epsilon = 1e-5);
            assert_relative_eq!(a.position.z, b.position.z, epsilon = 1e-5);
        }
    }

    #[test]
    fn load_nonexistent_file() {
        let result = load_stl("no_such_mesh_652.stl");
        assert!(matches!(result, Err(IoError::FileNotFound { .. })));
    }

    #[test]
    fn rejects_tiny_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.stl");
        std::fs::write(&path, b"sol").unwrap();

        assert!(matches!(
            load_stl(&path),
            Err(IoError::InvalidContent { .. })
        ));
    }

    #[test]
    fn rejects_short_binary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.stl");
        std::fs::write(&path, vec![0xAB_u8; 40]).unwrap();

        assert!(matches!(
            load_stl(&path),
            Err(IoError::InvalidHeader {
                expected: 84,
                got: 40
            })
        ));
    }

    #[test]
    fn truncated_binary_reports_face_count() {
        let original = two_triangles();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("truncated.stl");

        save_stl(&original, &path, true).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        // Keep the header and the first triangle record only
        std::fs::write(&path, &bytes[..HEADER_SIZE + 4 + TRIANGLE_SIZE]).unwrap();

        assert!(matches!(
            load_stl(&path),
            Err(IoError::InvalidFaceCount {
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn detects_binary_despite_solid_prefix() {
        // A binary file whose header starts with "solid": the null padding
        // must win over the keyword
        let mut bytes = Vec::new();
        let mut header = [0_u8; HEADER_SIZE];
        header[..5].copy_from_slice(b"solid");
        bytes.extend_from_slice(&header);
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&[0_u8; 12]); // stored normal
        for coord in [
            0.0_f32, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0,
        ] {
            bytes.extend_from_slice(&coord.to_le_bytes());
        }
        bytes.extend_from_slice(&0u16.to_le_bytes());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sneaky.stl");
        std::fs::write(&path, &bytes).unwrap();

        let mesh = load_stl(&path).unwrap();
        assert_eq!(mesh.face_count(), 1);
        assert_relative_eq!(mesh.vertices[1].position.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn parses_ascii_from_memory() {
        let text = b"solid test\n  facet normal 0 0 1\n    outer loop\n      vertex 0 0 0\n      vertex 1 0 0\n      vertex 0 1 0\n    endloop\n  endfacet\nendsolid test\n";

        let mesh = parse_ascii(BufReader::new(&text[..])).unwrap();
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
        assert_relative_eq!(mesh.vertices[2].position.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_solid_parses_to_empty_mesh() {
        let text = b"solid empty\nendsolid empty\n";
        let mesh = parse_ascii(BufReader::new(&text[..])).unwrap();
        assert!(mesh.is_empty());
    }

    #[test]
    fn malformed_ascii_vertex_errors() {
        let bad_float = b"solid t\nouter loop\nvertex a b c\nendloop\n";
        assert!(matches!(
            parse_ascii(BufReader::new(&bad_float[..])),
            Err(IoError::ParseFloat(_))
        ));

        let short_line = b"solid t\nouter loop\nvertex 1 2\nendloop\n";
        assert!(matches!(
            parse_ascii(BufReader::new(&short_line[..])),
            Err(IoError::InvalidContent { .. })
        ));
    }
}
