//! # Configuration Constants
//!
//! Every dimension and tunable of the orbital section generator lives here.
//! Changing the generated mesh means editing a value below and rerunning
//! `orbital-section`; nothing is read at runtime.
//!
//! ## Categories
//!
//! - **Dimensions**: physical size of the orbital, in meters
//! - **Scaling**: factor bringing meters down to output units
//! - **Sampling**: angular span and subdivision count of the segment
//! - **Output**: object name, file path, variant and coordinate frame

// =============================================================================
// DIMENSION CONSTANTS (meters)
// =============================================================================

/// Axial width of the ring, in meters.
///
/// # Examples
/// ```
/// use config::constants::ORBITAL_WIDTH_M;
/// assert_eq!(ORBITAL_WIDTH_M, 35.0e6);
/// ```
pub const ORBITAL_WIDTH_M: f64 = 35.0e6;

/// Diameter of the ring, in meters.
///
/// # Examples
/// ```
/// use config::constants::{ORBITAL_DIAMETER_M, ORBITAL_WIDTH_M};
/// assert!(ORBITAL_DIAMETER_M > ORBITAL_WIDTH_M);
/// ```
pub const ORBITAL_DIAMETER_M: f64 = 4.5e9;

/// Radial thickness of the inner edge wall, in meters.
///
/// Only the double-walled variant uses it. Values at or above half the
/// diameter are accepted and fold the wall through the axis.
pub const EDGEWALL_M: f64 = 2.0e6;

// =============================================================================
// SCALING CONSTANTS
// =============================================================================

/// Uniform scale applied to every length so the segment is one unit wide.
///
/// # Examples
/// ```
/// use config::constants::{ORBITAL_WIDTH_M, SCALE};
/// assert_eq!(ORBITAL_WIDTH_M * SCALE, 1.0);
/// ```
pub const SCALE: f64 = 1.0 / ORBITAL_WIDTH_M;

/// Axial nudge, in scaled units, separating the two faces of each end wall.
///
/// Produces a thin double surface rather than a true solid wall.
pub const WALL_FACE_OFFSET: f64 = 0.01;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Total angular extent of the segment, in degrees.
pub const ANGLE_SPAN_DEG: f64 = 10.0;

/// Number of angular subdivisions across the segment.
///
/// # Examples
/// ```
/// use config::constants::{ANGLE_SPAN_DEG, ANGLE_STEPS};
/// let increment = ANGLE_SPAN_DEG / ANGLE_STEPS as f64;
/// assert_eq!(increment, 0.3125);
/// ```
pub const ANGLE_STEPS: u32 = 32;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Object name written on the `o` line of the OBJ file.
pub const OBJECT_NAME: &str = "orbital_section";

/// Path of the generated OBJ file, relative to the working directory.
pub const OUTPUT_PATH: &str = "cyl_section.obj";

/// Cross-section variant generated by default.
pub const SECTION_VARIANT: Variant = Variant::DoubleWall;

/// Coordinate frame vertices are written in by default.
pub const OUTPUT_FRAME: OutputFrame = OutputFrame::AxialX;

/// Cross-section shape emitted for every angular sample.
///
/// # Examples
/// ```
/// use config::constants::Variant;
/// assert_eq!(Variant::DoubleWall.profile_len(), 8);
/// assert_eq!(Variant::SingleWall.profile_len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Outer surface plus inner edge walls, each end wall a thin double face.
    DoubleWall,
    /// Outer surface only, one vertex at each axial end.
    SingleWall,
}

impl Variant {
    /// Number of vertices in one sample's cross-section profile.
    pub const fn profile_len(self) -> usize {
        match self {
            Variant::DoubleWall => 8,
            Variant::SingleWall => 2,
        }
    }

    /// Number of quad strips running along the arc.
    ///
    /// # Examples
    /// ```
    /// use config::constants::Variant;
    /// assert_eq!(Variant::DoubleWall.strip_count(), 7);
    /// ```
    pub const fn strip_count(self) -> usize {
        self.profile_len() - 1
    }
}

/// Axis convention applied to vertices on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFrame {
    /// Positions exactly as generated: arc in XY, ring axis along Z.
    Local,
    /// Ring axis along X: each local `(x, y, z)` is written as `(z, -x, y)`.
    AxialX,
}

/// Full parameter set for one generator run.
///
/// `Default` reproduces the constants in this module. No geometric
/// validation happens here or anywhere downstream.
///
/// # Examples
/// ```
/// use config::constants::{SectionConfig, Variant, ANGLE_STEPS};
/// let cfg = SectionConfig::default();
/// assert_eq!(cfg.angle_steps, ANGLE_STEPS);
///
/// let thin = SectionConfig::default().with_variant(Variant::SingleWall).with_angle_steps(5);
/// assert_eq!(thin.angle_steps, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SectionConfig {
    /// Axial width, meters.
    pub width_m: f64,
    /// Ring diameter, meters.
    pub diameter_m: f64,
    /// Inner wall thickness, meters.
    pub edgewall_m: f64,
    /// Scale from meters to output units.
    pub scale: f64,
    /// Angular extent of the segment, degrees.
    pub angle_span_deg: f64,
    /// Number of angular subdivisions.
    pub angle_steps: u32,
    /// Axial offset between the two faces of an end wall, scaled units.
    pub wall_face_offset: f64,
    /// Cross-section variant.
    pub variant: Variant,
    /// Export axis convention.
    pub frame: OutputFrame,
    /// OBJ object name.
    pub object_name: String,
}

impl SectionConfig {
    /// Builds a configuration from explicit ring dimensions and sampling,
    /// scaled so the segment is one unit wide.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{SectionConfig, Variant};
    /// let cfg = SectionConfig::new(35.0e6, 4.5e9, 2.0e6, 10.0, 5, Variant::SingleWall);
    /// assert_eq!(cfg.width_m * cfg.scale, 1.0);
    /// ```
    pub fn new(
        width_m: f64,
        diameter_m: f64,
        edgewall_m: f64,
        angle_span_deg: f64,
        angle_steps: u32,
        variant: Variant,
    ) -> Self {
        Self {
            width_m,
            diameter_m,
            edgewall_m,
            scale: 1.0 / width_m,
            angle_span_deg,
            angle_steps,
            variant,
            ..Self::default()
        }
    }

    /// Replaces the cross-section variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Replaces the subdivision count.
    pub fn with_angle_steps(mut self, angle_steps: u32) -> Self {
        self.angle_steps = angle_steps;
        self
    }

    /// Replaces the export frame.
    pub fn with_frame(mut self, frame: OutputFrame) -> Self {
        self.frame = frame;
        self
    }
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            width_m: ORBITAL_WIDTH_M,
            diameter_m: ORBITAL_DIAMETER_M,
            edgewall_m: EDGEWALL_M,
            scale: SCALE,
            angle_span_deg: ANGLE_SPAN_DEG,
            angle_steps: ANGLE_STEPS,
            wall_face_offset: WALL_FACE_OFFSET,
            variant: SECTION_VARIANT,
            frame: OUTPUT_FRAME,
            object_name: OBJECT_NAME.to_string(),
        }
    }
}
