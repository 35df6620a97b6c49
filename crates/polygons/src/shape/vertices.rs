//! Owned, ordered vertex storage shared by every polygon family.

use super::ShapeError;
use crate::geom::{Matrix, Vector};

/// Smallest vertex count that encloses an area.
pub const MIN_VERTICES: usize = 3;

/// Ordered vertex list of a closed polygon.
///
/// Invariants:
/// - `len() >= MIN_VERTICES`.
/// - Order is insertion order and is never changed; the last vertex connects
///   back to the first.
/// - Mutation only maps vertices in place, so neither invariant can be broken
///   after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertices(Vec<Vector>);

impl Vertices {
    pub fn new(points: Vec<Vector>) -> Result<Self, ShapeError> {
        if points.len() < MIN_VERTICES {
            return Err(ShapeError::TooFewVertices {
                found: points.len(),
            });
        }
        Ok(Self(points))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vector] {
        &self.0
    }

    /// Vertex `i` (0-based). Panics when `i >= len()`.
    #[inline]
    pub fn get(&self, i: usize) -> Vector {
        match self.0.get(i) {
            Some(v) => *v,
            None => panic!("vertex {i} out of range (polygon has {})", self.0.len()),
        }
    }

    /// Closed edge loop `(v0,v1), (v1,v2), ..., (vn-1,v0)`.
    pub fn edges(&self) -> impl Iterator<Item = (Vector, Vector)> + '_ {
        edges(&self.0)
    }

    /// Replace every vertex by `f(vertex)`, in order.
    #[inline]
    pub(crate) fn map_in_place(&mut self, mut f: impl FnMut(Vector) -> Vector) {
        for v in self.0.iter_mut() {
            *v = f(*v);
        }
    }

    #[inline]
    pub(crate) fn apply(&mut self, m: Matrix) {
        self.map_in_place(|v| m * v);
    }

    #[inline]
    pub(crate) fn translate(&mut self, r: Vector) {
        for v in self.0.iter_mut() {
            *v += r;
        }
    }

    /// Arithmetic mean of the vertices.
    pub fn centre(&self) -> Vector {
        let sum = self.0.iter().fold(Vector::zeros(), |acc, v| acc + *v);
        (1.0 / self.0.len() as f64) * sum
    }

    /// Signed shoelace area; positive for counter-clockwise vertex order.
    pub fn signed_area(&self) -> f64 {
        let sum: f64 = self
            .edges()
            .map(|(p, q)| Matrix::new(p.x(), p.y(), q.x(), q.y()).det())
            .sum();
        0.5 * sum
    }
}

/// Closed edge loop over any vertex slice.
pub fn edges(vertices: &[Vector]) -> impl Iterator<Item = (Vector, Vector)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}
