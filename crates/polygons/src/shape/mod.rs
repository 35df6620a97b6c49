//! Polygon hierarchy: shared operations plus two rescale policies.
//!
//! Purpose
//! - `Shape`: the operations every polygon supports (name, vertices, centre,
//!   area, translate, rotate, rescale, info). Shared behavior lives in the
//!   provided methods; families override `rotate_origin` and `rescale`.
//! - `SymmetricPoly` (isosceles triangle, rectangle): tracks an accumulated
//!   `orientation` and rescales along its own width/height axes, keeping the
//!   centroid fixed.
//! - `GeneralPoly` (regular n-gon, pentagon, hexagon): rescales in the global
//!   x/y basis; the centroid moves unless it sits at the origin.
//! - `Polygon`: closed enum over both families, the type callers store.
//!
//! Conventions
//! - Angles are radians, counter-clockwise positive.
//! - Factories validate their parameters and return `ShapeError` instead of
//!   building an invalid polygon. Callers are expected to have validated user
//!   input already, so an error here is a precondition failure.

mod general;
mod symmetric;
mod vertices;

use std::fmt;

pub use general::{GeneralKind, GeneralPoly};
pub use symmetric::{SymmetricKind, SymmetricPoly};
pub use vertices::{edges, Vertices, MIN_VERTICES};

use crate::geom::{Matrix, Vector};

/// Errors raised at polygon construction boundaries.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// Fewer than `MIN_VERTICES` vertices.
    TooFewVertices { found: usize },
    /// A size parameter (base, width, radius, ...) is not a positive finite number.
    InvalidDimension { what: &'static str, value: f64 },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::TooFewVertices { found } => write!(
                f,
                "a polygon needs at least {MIN_VERTICES} vertices (got {found})"
            ),
            ShapeError::InvalidDimension { what, value } => {
                write!(f, "{what} must be a positive finite number (got {value})")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// Accept `value` only if it is finite and strictly positive.
pub(crate) fn positive(what: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::InvalidDimension { what, value })
    }
}

mod sealed {
    use super::Vertices;

    /// Mutable vertex storage. Not reachable outside the crate, so vertices only
    /// change through `Shape` methods that keep `orientation` in step.
    pub trait VertexStore {
        fn vertex_set_mut(&mut self) -> &mut Vertices;
    }
}

pub(crate) use sealed::VertexStore;

/// Operations shared by all polygons. Sealed: only this crate's families implement it.
///
/// Vertices are read-only from outside the crate:
///
/// ```compile_fail
/// use polygons::{Matrix, Polygon, Shape};
/// let mut p = Polygon::rectangle(2.0, 1.0).unwrap();
/// p.vertex_set_mut().apply(Matrix::rotation(0.5));
/// ```
pub trait Shape: VertexStore {
    /// Display label, e.g. "Rectangle" or "7-gon".
    fn name(&self) -> String;

    fn vertex_set(&self) -> &Vertices;

    /// Rescale by `x` and `y`; the axes depend on the family.
    fn rescale(&mut self, x: f64, y: f64);

    /// Rotate every vertex about the global origin.
    fn rotate_origin(&mut self, angle: f64) {
        self.vertex_set_mut().apply(Matrix::rotation(angle));
    }

    /// Ordered vertices; the last one connects back to the first.
    fn vertices(&self) -> &[Vector] {
        self.vertex_set().as_slice()
    }

    fn centre(&self) -> Vector {
        self.vertex_set().centre()
    }

    /// Enclosed area (absolute shoelace sum).
    fn area(&self) -> f64 {
        self.vertex_set().signed_area().abs()
    }

    fn translate(&mut self, r: Vector) {
        self.vertex_set_mut().translate(r);
    }

    /// Rotate about the centroid; the centroid stays where it is.
    fn rotate_centre(&mut self, angle: f64) {
        let c = self.centre();
        self.translate(-c);
        self.rotate_origin(angle);
        self.translate(c);
    }

    /// Name followed by the vertex list, e.g. `"Rectangle:\n\t(1,1) (-1,1) ..."`.
    fn info(&self) -> String {
        let verts: Vec<String> = self.vertices().iter().map(|v| v.to_string()).collect();
        format!("{}:\n\t{}", self.name(), verts.join(" "))
    }
}

/// Any polygon the application can hold.
#[derive(Clone, Debug, PartialEq)]
pub enum Polygon {
    Symmetric(SymmetricPoly),
    General(GeneralPoly),
}

impl Polygon {
    pub fn isosceles(base: f64, height: f64) -> Result<Self, ShapeError> {
        SymmetricPoly::isosceles(base, height).map(Self::Symmetric)
    }

    pub fn rectangle(width: f64, height: f64) -> Result<Self, ShapeError> {
        SymmetricPoly::rectangle(width, height).map(Self::Symmetric)
    }

    pub fn pentagon(radius: f64) -> Result<Self, ShapeError> {
        GeneralPoly::pentagon(radius).map(Self::General)
    }

    pub fn hexagon(radius: f64) -> Result<Self, ShapeError> {
        GeneralPoly::hexagon(radius).map(Self::General)
    }

    /// Regular `n`-gon with circumradius `radius`.
    pub fn ngon(n: usize, radius: f64) -> Result<Self, ShapeError> {
        GeneralPoly::regular(n, radius).map(Self::General)
    }

    /// Accumulated rotation for symmetric shapes, `None` otherwise.
    pub fn orientation(&self) -> Option<f64> {
        match self {
            Polygon::Symmetric(p) => Some(p.orientation()),
            Polygon::General(_) => None,
        }
    }
}

impl From<SymmetricPoly> for Polygon {
    fn from(p: SymmetricPoly) -> Self {
        Self::Symmetric(p)
    }
}

impl From<GeneralPoly> for Polygon {
    fn from(p: GeneralPoly) -> Self {
        Self::General(p)
    }
}

impl VertexStore for Polygon {
    fn vertex_set_mut(&mut self) -> &mut Vertices {
        match self {
            Polygon::Symmetric(p) => p.vertex_set_mut(),
            Polygon::General(p) => p.vertex_set_mut(),
        }
    }
}

impl Shape for Polygon {
    fn name(&self) -> String {
        match self {
            Polygon::Symmetric(p) => p.name(),
            Polygon::General(p) => p.name(),
        }
    }

    fn vertex_set(&self) -> &Vertices {
        match self {
            Polygon::Symmetric(p) => p.vertex_set(),
            Polygon::General(p) => p.vertex_set(),
        }
    }

    fn rescale(&mut self, x: f64, y: f64) {
        match self {
            Polygon::Symmetric(p) => p.rescale(x, y),
            Polygon::General(p) => p.rescale(x, y),
        }
    }

    fn rotate_origin(&mut self, angle: f64) {
        match self {
            Polygon::Symmetric(p) => p.rotate_origin(angle),
            Polygon::General(p) => p.rotate_origin(angle),
        }
    }
}
