use std::f64::consts::{FRAC_PI_2, TAU};

use crate::geom::{Matrix, Vector};

use super::{positive, Shape, ShapeError, VertexStore, Vertices, MIN_VERTICES};

/// Label for a general polygon; the geometry is the same regular n-gon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneralKind {
    NGon,
    Pentagon,
    Hexagon,
}

/// Polygon without symmetry constraints.
///
/// Starts as a regular n-gon on a circle about the origin; after `rescale` it
/// is generally no longer regular. Rescaling uses the global basis and does
/// not keep the centroid fixed.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneralPoly {
    kind: GeneralKind,
    vertices: Vertices,
}

impl GeneralPoly {
    /// Regular `n`-gon of circumradius `radius`, counter-clockwise, first
    /// vertex at the top.
    pub fn regular(n: usize, radius: f64) -> Result<Self, ShapeError> {
        Self::build(GeneralKind::NGon, n, radius)
    }

    pub fn pentagon(radius: f64) -> Result<Self, ShapeError> {
        Self::build(GeneralKind::Pentagon, 5, radius)
    }

    pub fn hexagon(radius: f64) -> Result<Self, ShapeError> {
        Self::build(GeneralKind::Hexagon, 6, radius)
    }

    fn build(kind: GeneralKind, n: usize, radius: f64) -> Result<Self, ShapeError> {
        if n < MIN_VERTICES {
            return Err(ShapeError::TooFewVertices { found: n });
        }
        let r = positive("circumradius", radius)?;
        let step = TAU / n as f64;
        let points = (0..n)
            .map(|i| {
                let (s, c) = (FRAC_PI_2 + i as f64 * step).sin_cos();
                Vector::new(r * c, r * s)
            })
            .collect();
        Ok(Self {
            kind,
            vertices: Vertices::new(points)?,
        })
    }

    #[inline]
    pub fn kind(&self) -> GeneralKind {
        self.kind
    }
}

impl VertexStore for GeneralPoly {
    fn vertex_set_mut(&mut self) -> &mut Vertices {
        &mut self.vertices
    }
}

impl Shape for GeneralPoly {
    fn name(&self) -> String {
        match self.kind {
            GeneralKind::NGon => format!("{}-gon", self.vertices.len()),
            GeneralKind::Pentagon => "Pentagon".to_string(),
            GeneralKind::Hexagon => "Hexagon".to_string(),
        }
    }

    fn vertex_set(&self) -> &Vertices {
        &self.vertices
    }

    fn rescale(&mut self, x: f64, y: f64) {
        self.vertices.apply(Matrix::scaling(x, y));
    }
}
