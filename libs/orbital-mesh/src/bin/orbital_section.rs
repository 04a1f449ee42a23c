//! Writes the orbital section described by `config::constants` to
//! `OUTPUT_PATH`. Takes no arguments.

use anyhow::{Context, Result};
use config::constants::{SectionConfig, OUTPUT_PATH};
use std::path::Path;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = SectionConfig::default();
    orbital_mesh::generate_to_file(&config, Path::new(OUTPUT_PATH))
        .with_context(|| format!("writing {OUTPUT_PATH}"))?;

    Ok(())
}
