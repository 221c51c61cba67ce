// src/physics/conversion.rs

use crate::error::{ConvertError, Result};
use crate::model::{Atom, CoordSystem, Lattice, Structure};
use crate::utils::linalg::{determinant3x3, replace_column, transpose3x3, Mat3, Vec3};

/// Fractional -> Cartesian for a single position
///
/// # Formula
/// ```text
/// pos_k = f_a * a_k + f_b * b_k + f_c * c_k
/// ```
/// i.e. the fractional row vector times the lattice matrix.
pub fn frac_to_cart(frac: Vec3, lattice: &Lattice) -> Vec3 {
  let m = &lattice.vectors;
  let mut cart = [0.0; 3];
  for (k, value) in cart.iter_mut().enumerate() {
    *value = frac[0] * m[0][k] + frac[1] * m[1][k] + frac[2] * m[2][k];
  }
  cart
}

/// Linear system `L * f = p` with `L` the transposed lattice (columns a, b, c),
/// solved by Cramer's rule. The determinant is computed once per lattice.
#[derive(Clone, Copy, Debug)]
pub struct CramerSolver {
  columns: Mat3,
  det: f64,
}

impl CramerSolver {
  /// Fails with `SingularLattice` when `|det(L)| <= tolerance`.
  /// Negative or NaN tolerances are treated as 0.0.
  pub fn new(lattice: &Lattice, tolerance: f64) -> Result<Self> {
    let tolerance = tolerance.max(0.0);
    let columns = transpose3x3(&lattice.vectors);
    let det = determinant3x3(&columns);

    if det.is_nan() || det.abs() <= tolerance {
      return Err(ConvertError::SingularLattice { determinant: det });
    }

    Ok(Self { columns, det })
  }

  pub fn solve(&self, p: Vec3) -> Vec3 {
    [
      determinant3x3(&replace_column(&self.columns, 0, p)) / self.det,
      determinant3x3(&replace_column(&self.columns, 1, p)) / self.det,
      determinant3x3(&replace_column(&self.columns, 2, p)) / self.det,
    ]
  }
}

/// Cartesian -> fractional for a single position.
pub fn cart_to_frac(cart: Vec3, lattice: &Lattice) -> Result<Vec3> {
  Ok(CramerSolver::new(lattice, 0.0)?.solve(cart))
}

/// Converts a fractional coordinate set to Cartesian (Angstroms).
/// Labels and order are preserved.
pub fn fractional_to_cartesian(lattice: &Lattice, atoms: &[Atom]) -> Vec<Atom> {
  atoms
    .iter()
    .map(|atom| Atom::new(atom.label.clone(), frac_to_cart(atom.position, lattice)))
    .collect()
}

/// Converts a Cartesian coordinate set to fractional.
///
/// Returns `SingularLattice` instead of producing inf/NaN positions when the
/// lattice vectors are coplanar.
pub fn cartesian_to_fractional(lattice: &Lattice, atoms: &[Atom]) -> Result<Vec<Atom>> {
  cartesian_to_fractional_with_tolerance(lattice, atoms, 0.0)
}

pub fn cartesian_to_fractional_with_tolerance(
  lattice: &Lattice,
  atoms: &[Atom],
  tolerance: f64,
) -> Result<Vec<Atom>> {
  let solver = CramerSolver::new(lattice, tolerance)?;

  Ok(
    atoms
      .iter()
      .map(|atom| Atom::new(atom.label.clone(), solver.solve(atom.position)))
      .collect(),
  )
}

/// Returns the structure expressed in the opposite coordinate system.
pub fn convert(structure: &Structure, tolerance: f64) -> Result<Structure> {
  let atoms = match structure.system {
    CoordSystem::Cartesian => {
      cartesian_to_fractional_with_tolerance(&structure.lattice, &structure.atoms, tolerance)?
    }
    CoordSystem::Fractional => fractional_to_cartesian(&structure.lattice, &structure.atoms),
  };

  Ok(Structure {
    lattice: structure.lattice,
    system: structure.system.opposite(),
    atoms,
  })
}

/// Cartesian copy of the structure (a plain clone when it already is).
pub fn to_cartesian(structure: &Structure) -> Structure {
  match structure.system {
    CoordSystem::Cartesian => structure.clone(),
    CoordSystem::Fractional => Structure {
      lattice: structure.lattice,
      system: CoordSystem::Cartesian,
      atoms: fractional_to_cartesian(&structure.lattice, &structure.atoms),
    },
  }
}
