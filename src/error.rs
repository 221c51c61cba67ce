//! Error types for coordinate conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, converting or writing a structure.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Lattice vectors do not span 3D space; fractional coordinates are undefined.
    #[error("Singular lattice: determinant is {determinant:e}, lattice vectors are coplanar")]
    SingularLattice {
        /// Determinant of the transposed lattice matrix.
        determinant: f64,
    },

    /// Malformed line in a coordinate file (line 0 means the whole file).
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A required block was not found.
    #[error("Missing section: {0}")]
    MissingSection(&'static str),

    /// The coordinate block is shorter than the declared atom count.
    #[error("Expected {expected} atoms, found {found}")]
    AtomCountMismatch { expected: usize, found: usize },

    /// Input extension is neither `.cart` nor `.frac`.
    #[error("Cannot tell coordinate type of {0}: expected a .cart or .frac extension")]
    UnknownCoordinateType(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output exists and overwriting is disabled.
    #[error("Refusing to overwrite {0} (use --force or set \"overwrite\": true)")]
    OutputExists(PathBuf),
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
