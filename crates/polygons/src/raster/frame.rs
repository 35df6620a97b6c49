//! Boolean pixel grid plus its text rendering.

use std::fmt;

use super::line::Pixel;

/// Glyph for a pixel covered by a polygon edge.
pub const GLYPH_EDGE: char = 'x';
/// Glyph for the origin cell `(mid_x, mid_y)`.
pub const GLYPH_ORIGIN: char = 'O';
/// Glyph for the y axis (column `mid_x`).
pub const GLYPH_Y_AXIS: char = '|';
/// Glyph for the x axis (row `mid_y`).
pub const GLYPH_X_AXIS: char = '-';
pub const GLYPH_BLANK: char = ' ';

/// Rasterized scene.
///
/// Invariants:
/// - Backing grid is `(width + 1) × (height + 1)`, column-major by x.
/// - `mid = (width / 2, height / 2)` is the image of the geometric origin.
/// - `extent` is `None` for an empty scene (nothing was scaled or drawn).
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    width: usize,
    height: usize,
    mid_x: usize,
    mid_y: usize,
    cells: Vec<bool>,
    extent: Option<f64>,
}

impl Frame {
    pub(crate) fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            mid_x: width / 2,
            mid_y: height / 2,
            cells: vec![false; (width + 1) * (height + 1)],
            extent: None,
        }
    }

    pub(crate) fn set_extent(&mut self, extent: f64) {
        self.extent = Some(extent);
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        (x <= self.width && y <= self.height).then(|| x * (self.height + 1) + y)
    }

    /// Mark pixel `p` (grid coordinates). Panics outside the backing grid.
    pub(crate) fn set(&mut self, (x, y): Pixel) {
        let idx = usize::try_from(x)
            .ok()
            .zip(usize::try_from(y).ok())
            .and_then(|(x, y)| self.offset(x, y));
        match idx {
            Some(i) => self.cells[i] = true,
            None => panic!(
                "pixel ({x}, {y}) outside the {}x{} raster",
                self.width + 1,
                self.height + 1
            ),
        }
    }

    /// Whether an edge covers `(x, y)`; false outside the grid.
    #[inline]
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.offset(x, y).is_some_and(|i| self.cells[i])
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid cell of the geometric origin.
    #[inline]
    pub fn mid(&self) -> (usize, usize) {
        (self.mid_x, self.mid_y)
    }

    /// Half-width of the depicted region in scene units (margin included).
    #[inline]
    pub fn extent(&self) -> Option<f64> {
        self.extent
    }

    /// True when there was nothing to draw.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.extent.is_none()
    }

    /// Covered pixels in column order.
    pub fn set_pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let rows = self.height + 1;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(move |(i, _)| (i / rows, i % rows))
    }

    /// Glyph for cell `(x, y)`: edge > origin > y axis > x axis > blank.
    pub fn glyph(&self, x: usize, y: usize) -> char {
        if self.is_set(x, y) {
            GLYPH_EDGE
        } else if x == self.mid_x && y == self.mid_y {
            GLYPH_ORIGIN
        } else if x == self.mid_x {
            GLYPH_Y_AXIS
        } else if y == self.mid_y {
            GLYPH_X_AXIS
        } else {
            GLYPH_BLANK
        }
    }

    /// Text rows from the top (`y = height`) down to `y = 0`, `width` glyphs each.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..=self.height)
            .rev()
            .map(move |y| (0..self.width).map(|x| self.glyph(x, y)).collect())
    }

    pub fn caption(&self) -> String {
        match self.extent {
            Some(extent) => format!("The width of the image is {} units.", short(2.0 * extent)),
            None => "Nothing to draw.".to_string(),
        }
    }
}

/// At most four decimals, trailing zeros dropped.
fn short(v: f64) -> String {
    let s = format!("{v:.4}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.caption())
    }
}
