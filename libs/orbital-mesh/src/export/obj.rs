//! Wavefront OBJ export.
//!
//! Writes one object declaration (`o`), vertex positions (`v`) and quad
//! faces (`f`). Each face corner reuses its vertex index as the normal
//! index; no `vn` records are written.

use crate::error::MeshError;
use crate::mesh::QuadMesh;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write `mesh` as OBJ text named `name` to the given writer.
///
/// Floats use Rust's shortest round-trip formatting, so output is a pure
/// function of the mesh.
pub fn write_obj<W: Write>(mesh: &QuadMesh, name: &str, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "o {name}")?;

    for v in mesh.vertices() {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }

    // OBJ indices are 1-based
    for quad in mesh.quads() {
        let [a, b, c, d] = quad.map(|i| i + 1);
        writeln!(writer, "f {a}//{a} {b}//{b} {c}//{c} {d}//{d}")?;
    }

    Ok(())
}

/// Create `path` and write `mesh` into it. The file is closed on return.
pub fn save_obj(mesh: &QuadMesh, name: &str, path: &Path) -> Result<(), MeshError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_obj(mesh, name, &mut writer)?;
    writer.flush()?;
    Ok(())
}
