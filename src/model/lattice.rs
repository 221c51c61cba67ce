// src/model/lattice.rs

use crate::utils::linalg::{determinant3x3, to_matrix3, Mat3, Vec3};

/// Unit cell defined by its three lattice vectors (rows a, b, c), in Angstroms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lattice {
  pub vectors: Mat3,
}

/// Conventional cell parameters: lengths in Angstroms, angles in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellParameters {
  pub a: f64,
  pub b: f64,
  pub c: f64,
  pub alpha: f64,
  pub beta: f64,
  pub gamma: f64,
  pub volume: f64,
}

impl Lattice {
  pub fn new(vectors: Mat3) -> Self {
    Self { vectors }
  }

  /// Orthogonal box with edges along x, y, z.
  pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self {
    Self::new([[a, 0.0, 0.0], [0.0, b, 0.0], [0.0, 0.0, c]])
  }

  pub fn a(&self) -> Vec3 {
    self.vectors[0]
  }

  pub fn b(&self) -> Vec3 {
    self.vectors[1]
  }

  pub fn c(&self) -> Vec3 {
    self.vectors[2]
  }

  /// Cell volume in Å³ (absolute value of the lattice determinant)
  pub fn volume(&self) -> f64 {
    determinant3x3(&self.vectors).abs()
  }

  pub fn parameters(&self) -> CellParameters {
    let m = to_matrix3(&self.vectors);
    let a_vec = m.row(0).transpose();
    let b_vec = m.row(1).transpose();
    let c_vec = m.row(2).transpose();

    // alpha = angle(b, c), beta = angle(a, c), gamma = angle(a, b)
    CellParameters {
      a: a_vec.norm(),
      b: b_vec.norm(),
      c: c_vec.norm(),
      alpha: b_vec.angle(&c_vec).to_degrees(),
      beta: a_vec.angle(&c_vec).to_degrees(),
      gamma: a_vec.angle(&b_vec).to_degrees(),
      volume: self.volume(),
    }
  }
}
