//! Text rasterization of polygon outlines.
//!
//! Purpose
//! - Project every edge of a set of polygons onto a fixed-size character
//!   grid, together with the coordinate axes and the origin.
//!
//! Model
//! - The depicted square is `[-extent, extent]²` with
//!   `extent = margin · max(|x|, |y|)` over all vertices.
//! - Character cells are about twice as tall as wide, so the grid has
//!   `height = ⌊pixel_aspect · width⌋` rows and x/y use different scales
//!   (`width / 2·extent` and `height / 2·extent`).
//! - Scaled coordinates are rounded to integers and offset by
//!   `(width / 2, height / 2)`; edges are then drawn with `line::bresenham`.
//! - With `margin > 1` every rounded pixel lands inside the
//!   `(width + 1) × (height + 1)` grid.
//!
//! Degenerate input
//! - No polygons, or all vertices at the origin: the frame holds only the
//!   axes and reports `is_empty()`. This is not an error.

mod frame;
mod line;

use std::fmt;

use tracing::{debug, warn};

use crate::geom::Vector;
use crate::shape::{edges, Shape};

pub use frame::{Frame, GLYPH_BLANK, GLYPH_EDGE, GLYPH_ORIGIN, GLYPH_X_AXIS, GLYPH_Y_AXIS};
pub use line::{bresenham, Pixel};

/// Default raster width in characters.
pub const DEFAULT_WIDTH: usize = 79;

/// Widest raster `validate` accepts.
pub const MAX_WIDTH: usize = 1024;

/// Raster configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterCfg {
    /// Columns of text, `1..=MAX_WIDTH`.
    pub width: usize,
    /// Character cell width over height; `height = ⌊pixel_aspect · width⌋`.
    pub pixel_aspect: f64,
    /// Free space factor around the outermost vertex; must be `> 1`.
    pub margin: f64,
}

impl Default for RasterCfg {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            pixel_aspect: 0.5,
            margin: 1.2,
        }
    }
}

impl RasterCfg {
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        (self.pixel_aspect * self.width as f64).floor() as usize
    }

    pub fn validate(&self) -> Result<(), RasterError> {
        if self.width == 0 {
            return Err(RasterError::ZeroWidth);
        }
        if self.width > MAX_WIDTH {
            return Err(RasterError::WidthTooLarge(self.width));
        }
        if !(self.pixel_aspect.is_finite() && self.pixel_aspect > 0.0) {
            return Err(RasterError::InvalidAspect(self.pixel_aspect));
        }
        if !(self.margin.is_finite() && self.margin > 1.0) {
            return Err(RasterError::InvalidMargin(self.margin));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RasterError {
    ZeroWidth,
    WidthTooLarge(usize),
    InvalidAspect(f64),
    InvalidMargin(f64),
    /// A vertex has a NaN or infinite coordinate.
    NonFiniteVertex { polygon: usize, vertex: usize },
    /// Vertices so far out that the depicted width is not representable.
    ExtentOverflow(f64),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::ZeroWidth => write!(f, "raster width must be at least 1"),
            RasterError::WidthTooLarge(w) => {
                write!(f, "raster width must be at most {MAX_WIDTH} (got {w})")
            }
            RasterError::InvalidAspect(a) => {
                write!(f, "pixel aspect must be a positive finite number (got {a})")
            }
            RasterError::InvalidMargin(m) => {
                write!(f, "margin must be a finite number > 1 (got {m})")
            }
            RasterError::NonFiniteVertex { polygon, vertex } => write!(
                f,
                "vertex {vertex} of polygon {polygon} has a non-finite coordinate"
            ),
            RasterError::ExtentOverflow(reach) => {
                write!(f, "polygons reach too far to draw (max coordinate {reach:e})")
            }
        }
    }
}

impl std::error::Error for RasterError {}

/// Largest `|x|` or `|y|` over all vertices.
fn reach<S: Shape>(polygons: &[S]) -> Result<f64, RasterError> {
    let mut reach = 0.0_f64;
    for (pi, poly) in polygons.iter().enumerate() {
        for (vi, v) in poly.vertices().iter().enumerate() {
            if !v.is_finite() {
                return Err(RasterError::NonFiniteVertex {
                    polygon: pi,
                    vertex: vi,
                });
            }
            reach = reach.max(v.max_abs_component());
        }
    }
    Ok(reach)
}

/// Rasterize the outlines of `polygons` into a `Frame`.
pub fn rasterize<S: Shape>(polygons: &[S], cfg: &RasterCfg) -> Result<Frame, RasterError> {
    cfg.validate()?;
    let width = cfg.width;
    let height = cfg.height();
    let mut frame = Frame::blank(width, height);

    let reach = reach(polygons)?;
    if reach <= 0.0 {
        warn!(polygons = polygons.len(), "nothing to draw");
        return Ok(frame);
    }

    let extent = cfg.margin * reach;
    if !(2.0 * extent).is_finite() {
        return Err(RasterError::ExtentOverflow(reach));
    }
    let scale_x = width as f64 / (2.0 * extent);
    let scale_y = height as f64 / (2.0 * extent);
    let (mid_x, mid_y) = frame.mid();
    debug!(width, height, extent, scale_x, scale_y, "rasterize");

    let to_pixel = |v: Vector| -> Pixel {
        (
            (scale_x * v.x()).round() as i64 + mid_x as i64,
            (scale_y * v.y()).round() as i64 + mid_y as i64,
        )
    };

    for poly in polygons {
        for (a, b) in edges(poly.vertices()) {
            bresenham(to_pixel(a), to_pixel(b), |p| frame.set(p));
        }
    }
    frame.set_extent(extent);
    Ok(frame)
}

/// Render `polygons` as text `width` columns wide, caption included.
pub fn render<S: Shape>(polygons: &[S], width: usize) -> Result<String, RasterError> {
    rasterize(polygons, &RasterCfg::with_width(width)).map(|frame| frame.to_string())
}

#[cfg(test)]
mod tests;
