use super::lattice::Lattice;

/// Which basis an atom position is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordSystem {
    /// (x, y, z) in Angstroms
    Cartesian,
    /// Multiples of the lattice vectors a, b, c
    Fractional,
}

impl CoordSystem {
    pub fn opposite(self) -> Self {
        match self {
            CoordSystem::Cartesian => CoordSystem::Fractional,
            CoordSystem::Fractional => CoordSystem::Cartesian,
        }
    }

    /// File extension used for files in this system (no dot).
    pub fn extension(self) -> &'static str {
        match self {
            CoordSystem::Cartesian => "cart",
            CoordSystem::Fractional => "frac",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "cart" => Some(CoordSystem::Cartesian),
            "frac" => Some(CoordSystem::Fractional),
            _ => None,
        }
    }

    /// Header line introducing the coordinate block.
    pub fn header(self) -> &'static str {
        match self {
            CoordSystem::Cartesian => "Cartesian coordinates:",
            CoordSystem::Fractional => "Fractional coordinates:",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CoordSystem::Cartesian => "Cartesian",
            CoordSystem::Fractional => "fractional",
        }
    }
}

/// A labelled position. Whether it is Cartesian or fractional depends on
/// the `Structure` (or transform) that holds it.
#[derive(Clone, Debug, PartialEq)]
pub struct Atom {
    pub label: String,
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(label: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Structure {
    pub lattice: Lattice,
    pub system: CoordSystem,
    // Order matches atom indices in the source file
    pub atoms: Vec<Atom>,
}

impl Structure {
    /// Element counts in order of first appearance, e.g. "Na4 Cl4"
    pub fn formula(&self) -> String {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for atom in &self.atoms {
            match counts.iter_mut().find(|(label, _)| *label == atom.label) {
                Some((_, n)) => *n += 1,
                None => counts.push((atom.label.as_str(), 1)),
            }
        }

        counts
            .iter()
            .map(|(label, n)| format!("{}{}", label, n))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
