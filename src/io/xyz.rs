use crate::error::{ConvertError, Result};
use crate::model::Structure;
use crate::physics::conversion::to_cartesian;
use std::fmt::Write as _;
use std::path::Path;

/// Extended XYZ text: atom count, a comment line carrying the lattice, then
/// Cartesian rows. Fractional structures are converted first.
pub fn to_string(structure: &Structure) -> String {
    let cart = to_cartesian(structure);
    let l = &cart.lattice.vectors;

    let mut out = String::new();
    let _ = writeln!(out, "{}", cart.atoms.len());
    let _ = writeln!(
        out,
        "Lattice=\"{} {} {} {} {} {} {} {} {}\" Properties=species:S:1:pos:R:3",
        l[0][0], l[0][1], l[0][2], l[1][0], l[1][1], l[1][2], l[2][0], l[2][1], l[2][2]
    );
    for atom in &cart.atoms {
        let p = atom.position;
        let _ = writeln!(out, "{:<4} {:14.8} {:14.8} {:14.8}", atom.label, p[0], p[1], p[2]);
    }
    out
}

pub fn write(path: &Path, structure: &Structure) -> Result<()> {
    std::fs::write(path, to_string(structure)).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}
