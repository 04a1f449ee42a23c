//! # Config Crate
//!
//! Centralized constants for the orbital section generator. The generator
//! takes no arguments, so this crate is the whole configuration surface.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{SectionConfig, ORBITAL_WIDTH_M, SCALE};
//!
//! // The default segment is one unit wide
//! assert_eq!(ORBITAL_WIDTH_M * SCALE, 1.0);
//!
//! let cfg = SectionConfig::default();
//! assert_eq!(cfg.object_name, "orbital_section");
//! ```

pub mod constants;
