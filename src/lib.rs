//! Cartesian <-> fractional coordinate conversion for crystal structures.
//!
//! Lattices are row-major with rows a, b, c (see [`model::Lattice`]).
//! Fractional positions are row vectors: `cart = frac * lattice`.

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod physics;
pub mod utils;

pub use error::{ConvertError, Result};

use config::Config;
use io::coords::CoordFile;
use std::path::{Path, PathBuf};

/// Reads `input`, converts it to the opposite coordinate system and writes
/// the result to `output` (or the input path with the swapped extension).
///
/// Nothing is written if any step fails. Returns the output path and the
/// converted file.
pub fn convert_file(
    input: &Path,
    output: Option<&Path>,
    config: &Config,
) -> Result<(PathBuf, CoordFile)> {
    let file = io::load_structure(input)?;
    convert_loaded(input, &file, output, config)
}

/// Same as [`convert_file`] for a file the caller already loaded from `input`.
pub fn convert_loaded(
    input: &Path,
    file: &CoordFile,
    output: Option<&Path>,
    config: &Config,
) -> Result<(PathBuf, CoordFile)> {
    let target = file.structure.system.opposite();

    log::info!("Converting to {} coordinates...", target.name());
    log::debug!("Cell volume {:.4} Å³", file.structure.lattice.volume());

    let converted = physics::conversion::convert(&file.structure, config.singular_tolerance)?;
    let out_file = file.with_structure(converted);

    let out_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| io::output_path_for(input, target));
    io::save_structure(&out_path, &out_file, config.precision, config.overwrite)?;
    log::info!("Wrote {}", out_path.display());

    Ok((out_path, out_file))
}
