//! # Export
//!
//! File formats the generated mesh can be written in.

pub mod obj;

pub use obj::{save_obj, write_obj};
