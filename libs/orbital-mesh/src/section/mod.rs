//! # Section Generation
//!
//! Builds the ring segment: one cross-section profile per angular sample,
//! then a quad strip along the arc for every edge of the profile.
//!
//! ## Layout
//!
//! ```text
//! sample i:    p0 p1 ... p(P-1)      indices i*P .. i*P + P-1
//! sample i+1:  p0 p1 ... p(P-1)      indices (i+1)*P .. (i+1)*P + P-1
//! quad (i, j): [i*P + j, i*P + j + 1, (i+1)*P + j + 1, (i+1)*P + j]
//! ```

use crate::mesh::QuadMesh;
use crate::sampling::{AngleSamples, Sample};
use config::constants::{SectionConfig, Variant};
use glam::DVec3;
use tracing::debug;

/// Scaled geometric quantities derived once from a [`SectionConfig`].
///
/// # Example
///
/// ```rust
/// use orbital_mesh::section::SectionParams;
/// use config::constants::SectionConfig;
///
/// let params = SectionParams::from_config(&SectionConfig::default());
/// assert_eq!(params.half_width, 0.5);
/// assert!(params.wall_radius < params.radius);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionParams {
    /// Half the axial width, output units
    pub half_width: f64,
    /// Outer ring radius, output units
    pub radius: f64,
    /// Inner wall radius, output units; zero or negative when the wall
    /// is as thick as the radius or thicker
    pub wall_radius: f64,
    /// Axial offset between the two faces of an end wall
    pub wall_face_offset: f64,
    /// Angular extent, degrees
    pub angle_span_deg: f64,
    /// Number of angular subdivisions
    pub angle_steps: u32,
    /// Cross-section shape
    pub variant: Variant,
}

impl SectionParams {
    /// Derives scaled quantities from raw dimensions. Nothing is validated.
    pub fn from_config(config: &SectionConfig) -> Self {
        Self {
            half_width: config.width_m * config.scale * 0.5,
            radius: config.diameter_m * config.scale * 0.5,
            wall_radius: (config.diameter_m * 0.5 - config.edgewall_m) * config.scale,
            wall_face_offset: config.wall_face_offset,
            angle_span_deg: config.angle_span_deg,
            angle_steps: config.angle_steps,
            variant: config.variant,
        }
    }

    /// Angular width of one subdivision, degrees. Zero when there are no
    /// subdivisions.
    pub fn angle_increment(&self) -> f64 {
        self.samples().increment_deg()
    }

    /// Fresh sample sequence for this segment.
    pub fn samples(&self) -> AngleSamples {
        AngleSamples::new(self.angle_span_deg, self.angle_steps)
    }

    /// Point at radius `r` and `angle` on the arc, shifted by `-radius` in x
    /// so the outer surface passes through the origin at angle zero.
    #[inline]
    pub fn arc_point(&self, r: f64, angle: f64) -> (f64, f64) {
        (r * angle.cos() - self.radius, r * angle.sin())
    }

    /// Cross-section vertices for one sample, in emission order.
    ///
    /// Double wall, for each end `z = -half_width` then `z = +half_width`:
    /// outer near, wall near, wall far, outer far (near/far = `z ∓ offset`).
    /// Single wall: outer at `-half_width`, outer at `+half_width`.
    pub fn profile(&self, sample: &Sample) -> Vec<DVec3> {
        let (x, y) = self.arc_point(self.radius, sample.angle);

        match self.variant {
            Variant::DoubleWall => {
                let (wall_x, wall_y) = self.arc_point(self.wall_radius, sample.angle);
                let e = self.wall_face_offset;
                [-self.half_width, self.half_width]
                    .into_iter()
                    .flat_map(|z| {
                        [
                            DVec3::new(x, y, z - e),
                            DVec3::new(wall_x, wall_y, z - e),
                            DVec3::new(wall_x, wall_y, z + e),
                            DVec3::new(x, y, z + e),
                        ]
                    })
                    .collect()
            }
            Variant::SingleWall => vec![
                DVec3::new(x, y, -self.half_width),
                DVec3::new(x, y, self.half_width),
            ],
        }
    }
}

/// A generated segment together with the parameters that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionMesh {
    pub params: SectionParams,
    pub mesh: QuadMesh,
}

/// Builds the segment mesh for `config`.
///
/// Produces `steps * P` vertices and `(steps - 1) * (P - 1)` quads, where
/// `P` is the variant's profile length. Fewer than two samples yields no
/// quads.
///
/// # Example
///
/// ```rust
/// use orbital_mesh::section::build_section;
/// use config::constants::{SectionConfig, Variant};
///
/// let cfg = SectionConfig::default().with_variant(Variant::SingleWall).with_angle_steps(5);
/// let section = build_section(&cfg);
/// assert_eq!(section.mesh.vertex_count(), 10);
/// assert_eq!(section.mesh.quad_count(), 4);
/// ```
pub fn build_section(config: &SectionConfig) -> SectionMesh {
    let params = SectionParams::from_config(config);
    let profile_len = params.variant.profile_len();
    let steps = params.angle_steps as usize;

    let mut mesh = QuadMesh::with_capacity(
        steps * profile_len,
        steps.saturating_sub(1) * params.variant.strip_count(),
    );

    debug!(
        variant = ?params.variant,
        steps,
        increment_deg = params.angle_increment(),
        "emitting section vertices"
    );

    for sample in params.samples() {
        for position in params.profile(&sample) {
            mesh.add_vertex(position);
        }
    }

    stitch_strips(&mut mesh, params.angle_steps, profile_len as u32);

    let (min, max) = mesh.bounding_box();
    debug!(
        vertices = mesh.vertex_count(),
        quads = mesh.quad_count(),
        min = ?min,
        max = ?max,
        "stitched section strips"
    );

    SectionMesh { params, mesh }
}

/// Connects every sample to its successor with one quad per profile edge.
/// The last sample has no successor.
fn stitch_strips(mesh: &mut QuadMesh, samples: u32, profile_len: u32) {
    for i in 0..samples.saturating_sub(1) {
        let base = i * profile_len;
        let next = base + profile_len;
        for j in 0..profile_len.saturating_sub(1) {
            mesh.add_quad([base + j, base + j + 1, next + j + 1, next + j]);
        }
    }
}

#[cfg(test)]
mod tests;
