//! # Output Frame
//!
//! Axis conventions applied to a finished mesh before export.

use crate::mesh::QuadMesh;
use config::constants::OutputFrame;
use glam::{DMat3, DVec3};

/// Linear map from the generator's local frame into `frame`.
///
/// # Example
///
/// ```rust
/// use orbital_mesh::frame::frame_matrix;
/// use config::constants::OutputFrame;
/// use glam::DVec3;
///
/// let m = frame_matrix(OutputFrame::AxialX);
/// assert_eq!(m * DVec3::new(1.0, 2.0, 3.0), DVec3::new(3.0, -1.0, 2.0));
/// ```
pub fn frame_matrix(frame: OutputFrame) -> DMat3 {
    match frame {
        OutputFrame::Local => DMat3::IDENTITY,
        // (x, y, z) -> (z, -x, y)
        OutputFrame::AxialX => DMat3::from_cols(
            DVec3::new(0.0, -1.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(1.0, 0.0, 0.0),
        ),
    }
}

/// Moves every vertex of `mesh` into `frame`. Faces are untouched.
pub fn apply_frame(mesh: &mut QuadMesh, frame: OutputFrame) {
    if frame != OutputFrame::Local {
        mesh.transform(&frame_matrix(frame));
    }
}
