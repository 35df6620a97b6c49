use crate::geom::{Matrix, Vector};

use super::{positive, Shape, ShapeError, VertexStore, Vertices};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymmetricKind {
    Isosceles,
    Rectangle,
}

/// Shape that must not be skewed by rescaling.
///
/// Invariants:
/// - `orientation` is the sum of every angle passed to `rotate_origin`
///   (directly or through `rotate_centre`). It is never wrapped.
/// - `rescale` acts on the shape's own axes, i.e. the global axes rotated by
///   `orientation`, and keeps the centroid fixed.
#[derive(Clone, Debug, PartialEq)]
pub struct SymmetricPoly {
    kind: SymmetricKind,
    vertices: Vertices,
    orientation: f64,
}

impl SymmetricPoly {
    /// Apex on the positive y axis, base parallel to x, bounding box centred
    /// on the origin.
    pub fn isosceles(base: f64, height: f64) -> Result<Self, ShapeError> {
        let b = 0.5 * positive("base", base)?;
        let h = 0.5 * positive("height", height)?;
        let vertices = Vertices::new(vec![
            Vector::new(0.0, h),
            Vector::new(-b, -h),
            Vector::new(b, -h),
        ])?;
        Ok(Self::with_vertices(SymmetricKind::Isosceles, vertices))
    }

    /// Axis-aligned, centred on the origin, first vertex top-right.
    pub fn rectangle(width: f64, height: f64) -> Result<Self, ShapeError> {
        let a = 0.5 * positive("width", width)?;
        let b = 0.5 * positive("height", height)?;
        let vertices = Vertices::new(vec![
            Vector::new(a, b),
            Vector::new(-a, b),
            Vector::new(-a, -b),
            Vector::new(a, -b),
        ])?;
        Ok(Self::with_vertices(SymmetricKind::Rectangle, vertices))
    }

    fn with_vertices(kind: SymmetricKind, vertices: Vertices) -> Self {
        Self {
            kind,
            vertices,
            orientation: 0.0,
        }
    }

    #[inline]
    pub fn kind(&self) -> SymmetricKind {
        self.kind
    }

    /// Accumulated rotation in radians.
    #[inline]
    pub fn orientation(&self) -> f64 {
        self.orientation
    }
}

impl VertexStore for SymmetricPoly {
    fn vertex_set_mut(&mut self) -> &mut Vertices {
        &mut self.vertices
    }
}

impl Shape for SymmetricPoly {
    fn name(&self) -> String {
        match self.kind {
            SymmetricKind::Isosceles => "Isosceles triangle".to_string(),
            SymmetricKind::Rectangle => "Rectangle".to_string(),
        }
    }

    fn vertex_set(&self) -> &Vertices {
        &self.vertices
    }

    fn rotate_origin(&mut self, angle: f64) {
        self.vertices.apply(Matrix::rotation(angle));
        self.orientation += angle;
    }

    /// Scale width by `width` and height by `height` in the shape's own frame:
    /// undo the orientation, scale, redo it, all about the centroid.
    fn rescale(&mut self, width: f64, height: f64) {
        let c = self.centre();
        let ori = self.orientation;
        let m = Matrix::rotation(ori) * Matrix::scaling(width, height) * Matrix::rotation(-ori);
        self.vertices.translate(-c);
        self.vertices.apply(m);
        self.vertices.translate(c);
    }
}
