//! # Orbital Mesh
//!
//! Generates a curved slice of a ring habitat as a quad-strip mesh and
//! writes it as Wavefront OBJ.
//!
//! ## Pipeline
//!
//! ```text
//! SectionConfig → SectionParams → AngleSamples → profiles → quad strips → frame → OBJ
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use orbital_mesh::{generate, write_obj};
//! use config::constants::{SectionConfig, Variant};
//!
//! let cfg = SectionConfig::default().with_variant(Variant::SingleWall).with_angle_steps(5);
//! let section = generate(&cfg);
//!
//! let mut out = Vec::new();
//! write_obj(&section.mesh, &cfg.object_name, &mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 4);
//! ```

pub mod error;
pub mod export;
pub mod frame;
pub mod mesh;
pub mod sampling;
pub mod section;

pub use config::constants::{OutputFrame, SectionConfig, Variant};
pub use error::MeshError;
pub use export::{save_obj, write_obj};
pub use mesh::QuadMesh;
pub use section::{build_section, SectionMesh, SectionParams};

use std::path::Path;
use tracing::{debug, info};

/// Builds the segment for `config` and moves it into the configured
/// output frame.
pub fn generate(config: &SectionConfig) -> SectionMesh {
    let mut section = build_section(config);
    frame::apply_frame(&mut section.mesh, config.frame);
    section
}

/// Generates the segment and writes it to `path` as OBJ.
///
/// Reports the outer and wall radius at `info` before writing when the
/// variant has an inner wall; that line is the only `info` event. Fails
/// only if the file cannot be created or written.
pub fn generate_to_file(config: &SectionConfig, path: &Path) -> Result<SectionMesh, MeshError> {
    let section = generate(config);

    if config.variant == Variant::DoubleWall {
        info!("{} {}", section.params.radius, section.params.wall_radius);
    }

    save_obj(&section.mesh, &config.object_name, path)?;

    debug!(
        path = %path.display(),
        vertices = section.mesh.vertex_count(),
        faces = section.mesh.quad_count(),
        "wrote section mesh"
    );

    Ok(section)
}
