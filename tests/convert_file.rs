use fraccart::config::Config;
use fraccart::io::{self, coords};
use fraccart::model::CoordSystem;
use fraccart::{convert_file, convert_loaded, ConvertError};
use std::fs;
use std::path::Path;

const NA_FRAC: &str = "Number of atoms: 1

Fractional coordinates:
Na   0.5 0.5 0.5

Lattice vectors:
a:   5.0 0.0 0.0
b:   0.0 5.0 0.0
c:   0.0 0.0 5.0
";

const QUARTZ_CART: &str = "Number of atoms: 3

Lattice vectors:
a:   4.913400   0.000000   0.000000
b:  -2.456700   4.255129   0.000000
c:   0.000000   0.000000   5.405200

Cartesian coordinates:
Si    1.156200  -2.002600   3.603467
O     0.972400   1.684200   0.752600
O    -2.144500   2.477100   4.356600
";

const FLAT_CART: &str = "Number of atoms: 1
Lattice vectors:
a: 1.0 0.0 0.0
b: 0.0 1.0 0.0
c: 2.0 3.0 0.0
Cartesian coordinates:
H 0.1 0.2 0.0
";

fn write_input(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn frac_file_becomes_cart_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "nacl.frac", NA_FRAC);

    let (out_path, out) = convert_file(&input, None, &Config::default()).unwrap();

    assert_eq!(out_path, dir.path().join("nacl.cart"));
    assert_eq!(out.structure.system, CoordSystem::Cartesian);

    let text = fs::read_to_string(&out_path).unwrap();
    assert!(text.contains("Cartesian coordinates:\nNa     2.500000     2.500000     2.500000\n"));
    assert!(text.starts_with("Number of atoms: 1\n\nLattice vectors:\na:   5.0 0.0 0.0\n"));
}

#[test]
fn cart_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "quartz.cart", QUARTZ_CART);
    let config = Config {
        precision: 10,
        ..Config::default()
    };

    let (frac_path, frac) = convert_file(&input, None, &config).unwrap();
    assert_eq!(frac_path, dir.path().join("quartz.frac"));

    let labels: Vec<&str> = frac.structure.atoms.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(labels, ["Si", "O", "O"]);

    let back_path = dir.path().join("quartz_back.cart");
    let (_, back) = convert_file(&frac_path, Some(back_path.as_path()), &config).unwrap();

    let original = io::load_structure(&input).unwrap();
    for (a, b) in original.structure.atoms.iter().zip(&back.structure.atoms) {
        for k in 0..3 {
            assert!((a.position[k] - b.position[k]).abs() < 1e-6);
        }
    }
    assert_eq!(back.lattice_lines, original.lattice_lines);
}

#[test]
fn singular_lattice_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "flat.cart", FLAT_CART);

    let err = convert_file(&input, None, &Config::default()).unwrap_err();

    assert!(matches!(err, ConvertError::SingularLattice { .. }));
    assert!(!dir.path().join("flat.frac").exists());
}

#[test]
fn existing_output_respects_overwrite_flag() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "nacl.frac", NA_FRAC);
    let existing = write_input(dir.path(), "nacl.cart", "keep me");

    let config = Config {
        overwrite: false,
        ..Config::default()
    };
    let err = convert_file(&input, None, &config).unwrap_err();
    assert!(matches!(err, ConvertError::OutputExists(_)));
    assert_eq!(fs::read_to_string(&existing).unwrap(), "keep me");

    convert_file(&input, None, &Config::default()).unwrap();
    assert!(fs::read_to_string(&existing).unwrap().starts_with("Number of atoms: 1"));
}

#[test]
fn unknown_extension_and_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "nacl.txt", NA_FRAC);

    assert!(matches!(
        convert_file(&input, None, &Config::default()),
        Err(ConvertError::UnknownCoordinateType(_))
    ));
    assert!(matches!(
        convert_file(&dir.path().join("absent.cart"), None, &Config::default()),
        Err(ConvertError::Read { .. })
    ));
}

#[test]
fn precision_controls_width() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "nacl.frac", NA_FRAC);
    let config = Config {
        precision: 3,
        ..Config::default()
    };

    let (path, out) = convert_file(&input, None, &config).unwrap();
    let text = fs::read_to_string(path).unwrap();

    assert!(text.contains("Na     2.500     2.500     2.500\n"));
    assert_eq!(text, coords::to_string(&out, 3));
}

#[test]
fn negative_tolerance_cannot_bypass_singular_check() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "flat.cart", FLAT_CART);
    let config = Config {
        singular_tolerance: -1.0,
        ..Config::default()
    };

    let err = convert_file(&input, None, &config).unwrap_err();

    assert!(matches!(err, ConvertError::SingularLattice { .. }));
    assert!(!dir.path().join("flat.frac").exists());
}

#[test]
fn preloaded_file_converts_like_a_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "nacl.frac", NA_FRAC);
    let loaded = io::load_structure(&input).unwrap();

    let out = dir.path().join("preloaded.cart");
    let (path, from_loaded) =
        convert_loaded(&input, &loaded, Some(out.as_path()), &Config::default()).unwrap();
    let (_, from_path) = convert_file(&input, None, &Config::default()).unwrap();

    assert_eq!(path, out);
    assert_eq!(from_loaded, from_path);
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        fs::read_to_string(dir.path().join("nacl.cart")).unwrap()
    );
}

#[test]
fn oversized_precision_is_capped() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "nacl.frac", NA_FRAC);
    let config = Config {
        precision: usize::MAX,
        ..Config::default()
    };

    let (path, _) = convert_file(&input, None, &config).unwrap();
    let text = fs::read_to_string(path).unwrap();

    assert!(text.contains("Na     2.50000000000000000     2.50000000000000000"));
}
