// src/io/coords.rs
//
// Plain-text layout shared by .cart and .frac files:
//
//   Number of atoms: <N>
//
//   Lattice vectors:
//   a:   ax  ay  az
//   b:   bx  by  bz
//   c:   cx  cy  cz
//
//   <Cartesian|Fractional> coordinates:
//   X   v1  v2  v3      (N lines)

use crate::error::{ConvertError, Result};
use crate::model::{Atom, CoordSystem, Lattice, Structure};
use std::fmt::Write as _;
use std::path::Path;

pub const DEFAULT_PRECISION: usize = 6;
/// f64 carries about 17 significant digits; more decimals are noise.
pub const MAX_PRECISION: usize = 17;

/// A parsed coordinate file.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordFile {
    pub structure: Structure,
    /// Lattice block lines as they appeared in the input, re-emitted verbatim.
    pub lattice_lines: [String; 3],
    /// System named by the coordinate header, if recognisable.
    pub header_system: Option<CoordSystem>,
}

impl CoordFile {
    /// Wraps a structure built in code, generating the lattice block.
    pub fn from_structure(structure: Structure) -> Self {
        let names = ["a", "b", "c"];
        let lattice_lines = std::array::from_fn(|i| {
            let v = structure.lattice.vectors[i];
            format!(
                "{}:   {}   {}   {}",
                names[i],
                format_value(v[0], DEFAULT_PRECISION),
                format_value(v[1], DEFAULT_PRECISION),
                format_value(v[2], DEFAULT_PRECISION)
            )
        });

        Self {
            header_system: Some(structure.system),
            structure,
            lattice_lines,
        }
    }

    /// Same file with the coordinate block replaced (e.g. after conversion).
    pub fn with_structure(&self, structure: Structure) -> Self {
        Self {
            header_system: Some(structure.system),
            structure,
            lattice_lines: self.lattice_lines.clone(),
        }
    }
}

fn parse_err(line: usize, message: impl Into<String>) -> ConvertError {
    ConvertError::Parse {
        line,
        message: message.into(),
    }
}

fn parse_f64(token: &str, line: usize) -> Result<f64> {
    token
        .parse()
        .map_err(|_| parse_err(line, format!("invalid number `{}`", token)))
}

fn parse_triplet(tokens: &[&str], line: usize) -> Result<[f64; 3]> {
    Ok([
        parse_f64(tokens[0], line)?,
        parse_f64(tokens[1], line)?,
        parse_f64(tokens[2], line)?,
    ])
}

fn system_from_header(header: &str) -> Option<CoordSystem> {
    let h = header.trim().to_lowercase();
    if h.starts_with("cart") {
        Some(CoordSystem::Cartesian)
    } else if h.starts_with("frac") {
        Some(CoordSystem::Fractional)
    } else {
        None
    }
}

/// Parses file contents. `system` says how the positions are to be read;
/// it normally comes from the file extension.
pub fn parse_str(text: &str, system: CoordSystem) -> Result<CoordFile> {
    let lines: Vec<&str> = text.lines().collect();

    // Section markers, 0-based. Later matches win.
    let mut count_idx = None;
    let mut coords_idx = None;
    let mut lattice_idx = None;
    for (i, line) in lines.iter().enumerate() {
        if line.contains("Number of atoms") {
            count_idx = Some(i);
        } else if line.contains("coordinates") {
            coords_idx = Some(i);
        } else if line.contains("Lattice vectors") {
            lattice_idx = Some(i);
        }
    }

    let count_idx = count_idx.ok_or(ConvertError::MissingSection("Number of atoms"))?;
    let coords_idx = coords_idx.ok_or(ConvertError::MissingSection("coordinates"))?;
    let lattice_idx = lattice_idx.ok_or(ConvertError::MissingSection("Lattice vectors"))?;

    let count_str = lines[count_idx].rsplit(':').next().unwrap_or("").trim();
    let n_atoms: usize = count_str
        .parse()
        .map_err(|_| parse_err(count_idx + 1, format!("invalid atom count `{}`", count_str)))?;

    // Lattice
    let mut vectors = [[0.0; 3]; 3];
    let mut lattice_lines: [String; 3] = Default::default();
    for k in 0..3 {
        let idx = lattice_idx + 1 + k;
        let line_no = idx + 1;
        let line = lines
            .get(idx)
            .ok_or_else(|| parse_err(line_no, "missing lattice vector"))?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(parse_err(line_no, "lattice vector needs a name and 3 components"));
        }
        vectors[k] = parse_triplet(&parts[1..4], line_no)?;
        lattice_lines[k] = line.trim_end().to_string();
    }

    // Atoms
    let first = coords_idx + 1;
    let available = lines.len().saturating_sub(first);
    if available < n_atoms {
        return Err(ConvertError::AtomCountMismatch {
            expected: n_atoms,
            found: available,
        });
    }

    let mut atoms = Vec::with_capacity(n_atoms);
    for (offset, line) in lines[first..first + n_atoms].iter().enumerate() {
        let line_no = first + offset + 1;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(parse_err(line_no, "atom record needs a label and 3 coordinates"));
        }
        atoms.push(Atom::new(parts[0], parse_triplet(&parts[1..4], line_no)?));
    }

    Ok(CoordFile {
        structure: Structure {
            lattice: Lattice::new(vectors),
            system,
            atoms,
        },
        lattice_lines,
        header_system: system_from_header(lines[coords_idx]),
    })
}

pub fn parse(path: &Path, system: CoordSystem) -> Result<CoordFile> {
    let text = std::fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&text, system)
}

/// Fixed-point value with a leading space standing in for `+`, right-aligned
/// to `precision + 4` columns (` 10.6f` at the default precision).
/// `precision` is capped at `MAX_PRECISION`.
pub fn format_value(v: f64, precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);
    let body = format!("{:.*}", precision, v);
    let signed = if body.starts_with('-') {
        body
    } else {
        format!(" {}", body)
    };
    format!("{:>w$}", signed, w = precision + 4)
}

pub fn to_string(file: &CoordFile, precision: usize) -> String {
    let s = &file.structure;
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Number of atoms: {}", s.atoms.len());
    out.push('\n');
    out.push_str("Lattice vectors:\n");
    for line in &file.lattice_lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(s.system.header());
    out.push('\n');
    for atom in &s.atoms {
        let p = atom.position;
        let _ = writeln!(
            out,
            "{:<2}   {}   {}   {}",
            atom.label,
            format_value(p[0], precision),
            format_value(p[1], precision),
            format_value(p[2], precision)
        );
    }
    out.push('\n');

    out
}

pub fn write(path: &Path, file: &CoordFile, precision: usize) -> Result<()> {
    std::fs::write(path, to_string(file, precision)).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NACL_FRAC: &str = "Number of atoms: 2

Fractional coordinates:
Na   0.0 0.0 0.0
Cl   0.5 0.5 0.5

Lattice vectors:
a:   5.64 0.0 0.0
b:   0.0 5.64 0.0
c:   0.0 0.0 5.64
";

    #[test]
    fn test_parse_sections_in_any_order() {
        let file = parse_str(NACL_FRAC, CoordSystem::Fractional).unwrap();
        let s = &file.structure;

        assert_eq!(s.atoms.len(), 2);
        assert_eq!(s.atoms[1].label, "Cl");
        assert_eq!(s.atoms[1].position, [0.5, 0.5, 0.5]);
        assert_eq!(s.lattice.vectors[1], [0.0, 5.64, 0.0]);
        assert_eq!(file.lattice_lines[2], "c:   0.0 0.0 5.64");
        assert_eq!(file.header_system, Some(CoordSystem::Fractional));
    }

    #[test]
    fn test_format_value_matches_space_sign() {
        assert_eq!(format_value(2.5, 6), "  2.500000");
        assert_eq!(format_value(-2.5, 6), " -2.500000");
        assert_eq!(format_value(-12.25, 6), "-12.250000");
        assert_eq!(format_value(0.0, 3), "  0.000");
        assert_eq!(format_value(1.0, usize::MAX), format_value(1.0, MAX_PRECISION));
        assert_eq!(format_value(1.0, MAX_PRECISION).len(), MAX_PRECISION + 4);
    }

    #[test]
    fn test_output_layout() {
        let file = parse_str(NACL_FRAC, CoordSystem::Fractional).unwrap();
        let text = to_string(&file, DEFAULT_PRECISION);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Number of atoms: 2");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Lattice vectors:");
        assert_eq!(lines[3], "a:   5.64 0.0 0.0");
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "Fractional coordinates:");
        assert_eq!(lines[8], "Na     0.000000     0.000000     0.000000");
        assert_eq!(lines[9], "Cl     0.500000     0.500000     0.500000");
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn test_written_file_parses_back() {
        let file = parse_str(NACL_FRAC, CoordSystem::Fractional).unwrap();
        let again = parse_str(&to_string(&file, 6), CoordSystem::Fractional).unwrap();
        assert_eq!(again, file);
    }

    #[test]
    fn test_from_structure_lattice_lines() {
        let s = Structure {
            lattice: Lattice::orthorhombic(5.0, 4.0, 3.0),
            system: CoordSystem::Cartesian,
            atoms: vec![],
        };
        let file = CoordFile::from_structure(s.clone());
        assert_eq!(file.lattice_lines[0], "a:     5.000000     0.000000     0.000000");

        let text = to_string(&file, 6);
        let back = parse_str(&text, CoordSystem::Cartesian).unwrap();
        assert_eq!(back.structure, s);
    }

    #[test]
    fn test_missing_sections() {
        let err = parse_str("Fractional coordinates:\n", CoordSystem::Fractional).unwrap_err();
        assert!(matches!(err, ConvertError::MissingSection("Number of atoms")));

        let no_lattice = "Number of atoms: 0\nCartesian coordinates:\n";
        let err = parse_str(no_lattice, CoordSystem::Cartesian).unwrap_err();
        assert!(matches!(err, ConvertError::MissingSection("Lattice vectors")));
    }

    #[test]
    fn test_malformed_records() {
        let bad_number = NACL_FRAC.replace("Cl   0.5 0.5 0.5", "Cl   0.5 x 0.5");
        match parse_str(&bad_number, CoordSystem::Fractional) {
            Err(ConvertError::Parse { line, message }) => {
                assert_eq!(line, 5);
                assert!(message.contains("`x`"));
            }
            other => panic!("unexpected {:?}", other),
        }

        let short = NACL_FRAC.replace("Cl   0.5 0.5 0.5", "Cl   0.5 0.5");
        assert!(matches!(
            parse_str(&short, CoordSystem::Fractional),
            Err(ConvertError::Parse { line: 5, .. })
        ));

        let bad_lattice = NACL_FRAC.replace("b:   0.0 5.64 0.0", "b:   0.0 5.64");
        assert!(matches!(
            parse_str(&bad_lattice, CoordSystem::Fractional),
            Err(ConvertError::Parse { line: 9, .. })
        ));
    }

    #[test]
    fn test_atom_count_too_large() {
        let text = "Number of atoms: 3
Lattice vectors:
a: 1 0 0
b: 0 1 0
c: 0 0 1
Cartesian coordinates:
H 0 0 0
";
        match parse_str(text, CoordSystem::Cartesian) {
            Err(ConvertError::AtomCountMismatch { expected, found }) => {
                assert_eq!(expected, 3);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
