//src/model/mod.rs
pub mod lattice;
pub mod structure;

// Re-exports for cleaner imports
pub use lattice::{CellParameters, Lattice};
pub use structure::{Atom, CoordSystem, Structure};
