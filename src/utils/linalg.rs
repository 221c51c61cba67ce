// src/utils/linalg.rs

use nalgebra::Matrix3;

/// Row-major 3x3 matrix. For a lattice the rows are the a, b, c vectors.
pub type Mat3 = [[f64; 3]; 3];

/// Plain 3-vector (Cartesian in Angstroms, or fractional).
pub type Vec3 = [f64; 3];

/// Determinant of a 3x3 matrix by cofactor expansion
///
/// # Formula
/// ```text
/// det = m00*m11*m22 + m01*m12*m20 + m02*m10*m21
///     - m02*m11*m20 - m01*m10*m22 - m00*m12*m21
/// ```
///
/// Singular input returns 0.0; there is no error case.
pub fn determinant3x3(m: &Mat3) -> f64 {
  m[0][0] * m[1][1] * m[2][2] + m[0][1] * m[1][2] * m[2][0] + m[0][2] * m[1][0] * m[2][1]
    - m[0][2] * m[1][1] * m[2][0]
    - m[0][1] * m[1][0] * m[2][2]
    - m[0][0] * m[1][2] * m[2][1]
}

/// Returns a new matrix with `out[i][j] = m[j][i]`.
pub fn transpose3x3(m: &Mat3) -> Mat3 {
  let mut out = [[0.0; 3]; 3];
  for (i, row) in out.iter_mut().enumerate() {
    for (j, value) in row.iter_mut().enumerate() {
      *value = m[j][i];
    }
  }
  out
}

/// Copy of `m` with column `col` replaced by `v` (Cramer's rule numerator).
pub fn replace_column(m: &Mat3, col: usize, v: Vec3) -> Mat3 {
  let mut out = *m;
  for (row, value) in out.iter_mut().zip(v) {
    row[col] = value;
  }
  out
}

/// Bridge into nalgebra for norms, angles and cross-checks.
pub fn to_matrix3(m: &Mat3) -> Matrix3<f64> {
  Matrix3::from_row_slice(&[
    m[0][0], m[0][1], m[0][2], m[1][0], m[1][1], m[1][2], m[2][0], m[2][1], m[2][2],
  ])
}
