// src/utils/report.rs

use crate::model::{CoordSystem, Structure};

const MAX_LISTED_ATOMS: usize = 20;

/// Text summary of a loaded structure, printed by `--report`
pub fn structure_summary(structure: &Structure, filename: &str) -> String {
    let p = structure.lattice.parameters();
    let unit = match structure.system {
        CoordSystem::Cartesian => "(Å)",
        CoordSystem::Fractional => "",
    };

    let mut out = String::new();
    out.push_str(&format!("File: {}\n", filename));
    out.push_str(&format!("Coordinates: {}\n", structure.system.name()));
    out.push_str(&format!("Formula: {}\n", structure.formula()));
    out.push_str(&format!(
        "Cell: a={:.4} b={:.4} c={:.4} Å  alpha={:.2} beta={:.2} gamma={:.2}°\n",
        p.a, p.b, p.c, p.alpha, p.beta, p.gamma
    ));
    out.push_str(&format!("Volume: {:.4} Å³\n", p.volume));
    out.push_str("--------------------------------------------------\n");
    out.push_str(&format!(
        "{:<8} {:<8} {:<10} {:<10} {:<10} {}\n",
        "Index", "Label", "1", "2", "3", unit
    ));
    out.push_str("--------------------------------------------------\n");

    for (i, atom) in structure.atoms.iter().take(MAX_LISTED_ATOMS).enumerate() {
        out.push_str(&format!(
            "{:<8} {:<8} {:<10.4} {:<10.4} {:<10.4}\n",
            i, atom.label, atom.position[0], atom.position[1], atom.position[2]
        ));
    }

    if structure.atoms.len() > MAX_LISTED_ATOMS {
        out.push_str(&format!(
            "... and {} more atoms.\n",
            structure.atoms.len() - MAX_LISTED_ATOMS
        ));
    }

    out
}
