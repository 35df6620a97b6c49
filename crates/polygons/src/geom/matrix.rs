//! 2×2 linear maps used for rotations and axis scalings.

use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use nalgebra::{Matrix2, Vector2};

use super::Vector;

/// Row-major 2×2 matrix `[[a, b], [c, d]]`, indexed 1-based as `m[(row, col)]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix(Matrix2<f64>);

impl Matrix {
    /// `[[a, b], [c, d]]`.
    #[inline]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self(Matrix2::new(a, b, c, d))
    }

    #[inline]
    pub fn zeros() -> Self {
        Self(Matrix2::zeros())
    }

    #[inline]
    pub fn identity() -> Self {
        Self(Matrix2::identity())
    }

    /// Counter-clockwise rotation by `angle` radians.
    #[inline]
    pub fn rotation(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, -s, s, c)
    }

    /// Axis scaling `diag(sx, sy)`.
    #[inline]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self(Matrix2::from_diagonal(&Vector2::new(sx, sy)))
    }

    #[inline]
    pub fn det(&self) -> f64 {
        self.0.determinant()
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<Matrix2<f64>> for Matrix {
    #[inline]
    fn from(m: Matrix2<f64>) -> Self {
        Self(m)
    }
}

#[inline]
fn checked(row: usize, col: usize) -> (usize, usize) {
    if !(1..=2).contains(&row) || !(1..=2).contains(&col) {
        panic!("matrix element ({row}, {col}) out of range (expected 1..=2)");
    }
    (row - 1, col - 1)
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.0[checked(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.0[checked(row, col)]
    }
}

impl Mul for Matrix {
    type Output = Matrix;
    #[inline]
    fn mul(self, rhs: Matrix) -> Matrix {
        Matrix(self.0 * rhs.0)
    }
}

impl Mul<Vector> for Matrix {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        Vector::from(self.0 * *rhs.inner())
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;
    #[inline]
    fn mul(self, rhs: Matrix) -> Matrix {
        Matrix(rhs.0 * self)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\t{}", self.0[(0, 0)], self.0[(0, 1)])?;
        write!(f, "{}\t{}", self.0[(1, 0)], self.0[(1, 1)])
    }
}
