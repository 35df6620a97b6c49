//! 2D vectors: vertex positions and translations.
//!
//! Conventions
//! - Components are addressed 1-based (`v[1] = x`, `v[2] = y`) to match the
//!   matrix notation used throughout the shape module.
//! - Any other component index is a caller bug and panics.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use nalgebra::Vector2;

/// Components whose fractional part is below this in magnitude print without decimals.
const DISPLAY_SNAP: f64 = 0.01;

/// A 2D point or displacement `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector(Vector2<f64>);

impl Vector {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self(Vector2::new(x, y))
    }

    #[inline]
    pub fn zeros() -> Self {
        Self(Vector2::zeros())
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Scalar product.
    #[inline]
    pub fn dot(&self, rhs: &Vector) -> f64 {
        self.0.dot(&rhs.0)
    }

    /// Euclidean length.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.0.norm()
    }

    /// Largest absolute component, `max(|x|, |y|)`.
    #[inline]
    pub fn max_abs_component(&self) -> f64 {
        self.0.x.abs().max(self.0.y.abs())
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.x.is_finite() && self.0.y.is_finite()
    }

    #[inline]
    pub fn as_array(&self) -> [f64; 2] {
        [self.0.x, self.0.y]
    }

    #[inline]
    pub(crate) fn inner(&self) -> &Vector2<f64> {
        &self.0
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<Vector2<f64>> for Vector {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self(v)
    }
}

impl From<Vector> for Vector2<f64> {
    #[inline]
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl From<[f64; 2]> for Vector {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        match i {
            1 => &self.0[0],
            2 => &self.0[1],
            _ => panic!("vector component {i} out of range (expected 1 or 2)"),
        }
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            1 => &mut self.0[0],
            2 => &mut self.0[1],
            _ => panic!("vector component {i} out of range (expected 1 or 2)"),
        }
    }
}

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector(self.0 - rhs.0)
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector(-self.0)
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Vector) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Vector {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector) {
        self.0 -= rhs.0;
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        Vector(rhs.0 * self)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        Vector(self.0 * rhs)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_component(f, self.0.x)?;
        f.write_str(",")?;
        write_component(f, self.0.y)?;
        f.write_str(")")
    }
}

/// Values less than 0.01 above an integer in magnitude print without
/// decimals, everything else with two. `2.999` stays `"3.00"`.
fn write_component(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.fract().abs() < DISPLAY_SNAP {
        // avoid "-0"
        let whole = if v.trunc() == 0.0 { 0.0 } else { v.trunc() };
        write!(f, "{whole:.0}")
    } else {
        write!(f, "{v:.2}")
    }
}
