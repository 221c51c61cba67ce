// src/io/mod.rs
pub mod coords;
pub mod xyz;

use crate::error::{ConvertError, Result};
use crate::model::CoordSystem;
use coords::CoordFile;
use std::path::{Path, PathBuf};

/// Input system from the file extension: `.cart` or `.frac` (any case).
pub fn coordinate_system_for(path: &Path) -> Result<CoordSystem> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(CoordSystem::from_extension)
        .ok_or_else(|| ConvertError::UnknownCoordinateType(path.to_path_buf()))
}

/// `nacl.frac` -> `nacl.cart` when writing Cartesian output, and vice versa.
pub fn output_path_for(input: &Path, output_system: CoordSystem) -> PathBuf {
    input.with_extension(output_system.extension())
}

/// Reads a .cart/.frac file, taking the coordinate system from its extension.
pub fn load_structure(path: &Path) -> Result<CoordFile> {
    let system = coordinate_system_for(path)?;
    let file = coords::parse(path, system)?;

    if let Some(header) = file.header_system {
        if header != system {
            log::warn!(
                "{} has a .{} extension but its header says {} coordinates; reading as {}",
                path.display(),
                system.extension(),
                header.name(),
                system.name()
            );
        }
    }
    log::debug!(
        "Read {} atoms from {}",
        file.structure.atoms.len(),
        path.display()
    );

    Ok(file)
}

pub fn save_structure(path: &Path, file: &CoordFile, precision: usize, overwrite: bool) -> Result<()> {
    if !overwrite && path.exists() {
        return Err(ConvertError::OutputExists(path.to_path_buf()));
    }
    coords::write(path, file, precision)
}
