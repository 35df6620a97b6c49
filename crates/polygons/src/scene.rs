//! Ordered polygon registry with 1-based addressing.
//!
//! The scene owns its polygons exclusively. Index `i` refers to the `i`-th
//! polygon in insertion order, counting from 1; removing a polygon shifts the
//! ones after it down by one.

use std::fmt;

use tracing::debug;

use crate::geom::Vector;
use crate::raster::{rasterize, Frame, RasterCfg, RasterError, DEFAULT_WIDTH};
use crate::shape::{Polygon, Shape, ShapeError};

#[derive(Clone, Debug, PartialEq)]
pub enum SceneError {
    IndexOutOfRange { index: usize, len: usize },
    Shape(ShapeError),
    Raster(RasterError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::IndexOutOfRange { index, len } => {
                if *len == 0 {
                    write!(f, "no polygon {index}: the scene is empty")
                } else {
                    write!(f, "no polygon {index}: expected an index in 1..={len}")
                }
            }
            SceneError::Shape(e) => write!(f, "{e}"),
            SceneError::Raster(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::IndexOutOfRange { .. } => None,
            SceneError::Shape(e) => Some(e),
            SceneError::Raster(e) => Some(e),
        }
    }
}

impl From<ShapeError> for SceneError {
    fn from(e: ShapeError) -> Self {
        Self::Shape(e)
    }
}

impl From<RasterError> for SceneError {
    fn from(e: RasterError) -> Self {
        Self::Raster(e)
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    polygons: Vec<Polygon>,
    raster: RasterCfg,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            polygons: Vec::new(),
            raster: RasterCfg::with_width(DEFAULT_WIDTH),
        }
    }

    pub fn with_draw_width(width: usize) -> Result<Self, SceneError> {
        let mut scene = Self::new();
        scene.set_draw_width(width)?;
        Ok(scene)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Read-only view in index order, as consumed by the rasterizer.
    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// `(index, polygon)` pairs with 1-based indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Polygon)> + '_ {
        self.polygons.iter().enumerate().map(|(i, p)| (i + 1, p))
    }

    #[inline]
    pub fn draw_width(&self) -> usize {
        self.raster.width
    }

    pub fn set_draw_width(&mut self, width: usize) -> Result<(), SceneError> {
        let cfg = RasterCfg::with_width(width);
        cfg.validate()?;
        self.raster = cfg;
        Ok(())
    }

    fn slot(&self, index: usize) -> Result<usize, SceneError> {
        if index == 0 || index > self.polygons.len() {
            return Err(SceneError::IndexOutOfRange {
                index,
                len: self.polygons.len(),
            });
        }
        Ok(index - 1)
    }

    pub fn get(&self, index: usize) -> Result<&Polygon, SceneError> {
        let i = self.slot(index)?;
        Ok(&self.polygons[i])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Polygon, SceneError> {
        let i = self.slot(index)?;
        Ok(&mut self.polygons[i])
    }

    /// Append and return the new polygon's index.
    pub fn add(&mut self, polygon: Polygon) -> usize {
        debug!(name = %polygon.name(), "add polygon");
        self.polygons.push(polygon);
        self.polygons.len()
    }

    pub fn add_isosceles(&mut self, base: f64, height: f64) -> Result<usize, SceneError> {
        Ok(self.add(Polygon::isosceles(base, height)?))
    }

    pub fn add_rectangle(&mut self, width: f64, height: f64) -> Result<usize, SceneError> {
        Ok(self.add(Polygon::rectangle(width, height)?))
    }

    pub fn add_pentagon(&mut self, radius: f64) -> Result<usize, SceneError> {
        Ok(self.add(Polygon::pentagon(radius)?))
    }

    pub fn add_hexagon(&mut self, radius: f64) -> Result<usize, SceneError> {
        Ok(self.add(Polygon::hexagon(radius)?))
    }

    pub fn add_ngon(&mut self, n: usize, radius: f64) -> Result<usize, SceneError> {
        Ok(self.add(Polygon::ngon(n, radius)?))
    }

    pub fn remove(&mut self, index: usize) -> Result<Polygon, SceneError> {
        let i = self.slot(index)?;
        Ok(self.polygons.remove(i))
    }

    pub fn translate(&mut self, index: usize, r: Vector) -> Result<(), SceneError> {
        self.get_mut(index)?.translate(r);
        Ok(())
    }

    /// Rotate polygon `index` about its own centre.
    pub fn rotate(&mut self, index: usize, angle: f64) -> Result<(), SceneError> {
        self.get_mut(index)?.rotate_centre(angle);
        Ok(())
    }

    pub fn rescale(&mut self, index: usize, x: f64, y: f64) -> Result<(), SceneError> {
        self.get_mut(index)?.rescale(x, y);
        Ok(())
    }

    pub fn translate_all(&mut self, r: Vector) {
        for p in &mut self.polygons {
            p.translate(r);
        }
    }

    /// Rotate the whole scene about the global origin.
    pub fn rotate_all(&mut self, angle: f64) {
        for p in &mut self.polygons {
            p.rotate_origin(angle);
        }
    }

    /// Rescale every polygon with its own policy.
    pub fn rescale_all(&mut self, x: f64, y: f64) {
        for p in &mut self.polygons {
            p.rescale(x, y);
        }
    }

    /// Shift everything so the mean of the polygon centres is the origin.
    pub fn centre_all(&mut self) {
        if self.polygons.is_empty() {
            return;
        }
        let sum = self
            .polygons
            .iter()
            .fold(Vector::zeros(), |acc, p| acc + p.centre());
        let c = (1.0 / self.polygons.len() as f64) * sum;
        self.translate_all(-c);
    }

    pub fn draw(&self) -> Result<Frame, SceneError> {
        Ok(rasterize(&self.polygons, &self.raster)?)
    }

    /// One `"\t<i>. <name>"` line per polygon.
    pub fn list_shapes(&self) -> String {
        self.iter()
            .map(|(i, p)| format!("\t{i}. {}\n", p.name()))
            .collect()
    }

    /// `"<i>. "` followed by each polygon's `info()`.
    pub fn list_info(&self) -> String {
        self.iter()
            .map(|(i, p)| format!("{i}. {}\n", p.info()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Scene {
        let mut s = Scene::new();
        s.add_rectangle(2.0, 4.0).unwrap();
        s.add_pentagon(1.0).unwrap();
        s.add_isosceles(3.0, 3.0).unwrap();
        s
    }

    #[test]
    fn indices_are_one_based() {
        let s = sample();
        assert_eq!(s.len(), 3);
        assert_eq!(s.get(1).unwrap().name(), "Rectangle");
        assert_eq!(s.get(3).unwrap().name(), "Isosceles triangle");
        assert_eq!(
            s.get(0).unwrap_err(),
            SceneError::IndexOutOfRange { index: 0, len: 3 }
        );
        assert!(s.get(4).is_err());
        let names: Vec<usize> = s.iter().map(|(i, _)| i).collect();
        assert_eq!(names, vec![1, 2, 3]);
    }

    #[test]
    fn remove_shifts_later_polygons() {
        let mut s = sample();
        let removed = s.remove(2).unwrap();
        assert_eq!(removed.name(), "Pentagon");
        assert_eq!(s.get(2).unwrap().name(), "Isosceles triangle");
        assert!(s.remove(3).is_err());
    }

    #[test]
    fn invalid_parameters_never_enter_the_scene() {
        let mut s = Scene::new();
        assert!(matches!(s.add_ngon(2, 1.0), Err(SceneError::Shape(_))));
        assert!(matches!(s.add_rectangle(-1.0, 1.0), Err(SceneError::Shape(_))));
        assert!(s.is_empty());
    }

    #[test]
    fn per_polygon_transforms_address_one_polygon() {
        let mut s = sample();
        s.translate(2, Vector::new(1.0, 2.0)).unwrap();
        assert!((s.get(2).unwrap().centre() - Vector::new(1.0, 2.0)).norm() < 1e-12);
        assert!(s.get(1).unwrap().centre().norm() < 1e-12);

        s.rotate(1, 0.5).unwrap();
        assert_eq!(s.get(1).unwrap().orientation(), Some(0.5));
        s.rescale(1, 2.0, 1.0).unwrap();
        assert!((s.get(1).unwrap().area() - 16.0).abs() < 1e-9);
        assert!(s.translate(9, Vector::zeros()).is_err());
    }

    #[test]
    fn rotate_all_turns_the_scene_about_the_origin() {
        let mut s = Scene::new();
        s.add_rectangle(1.0, 1.0).unwrap();
        s.translate(1, Vector::new(2.0, 0.0)).unwrap();
        s.rotate_all(std::f64::consts::FRAC_PI_2);
        assert!((s.get(1).unwrap().centre() - Vector::new(0.0, 2.0)).norm() < 1e-12);
    }

    #[test]
    fn centre_all_moves_mean_of_centres_to_origin() {
        let mut s = sample();
        s.translate(1, Vector::new(4.0, 0.0)).unwrap();
        s.translate(3, Vector::new(-1.0, 6.0)).unwrap();
        s.centre_all();
        let sum = s.iter().fold(Vector::zeros(), |acc, (_, p)| acc + p.centre());
        assert!(sum.norm() < 1e-9);

        let mut empty = Scene::new();
        empty.centre_all();
        assert!(empty.is_empty());
    }

    #[test]
    fn listings() {
        let s = sample();
        assert_eq!(
            s.list_shapes(),
            "\t1. Rectangle\n\t2. Pentagon\n\t3. Isosceles triangle\n"
        );
        assert!(s.list_info().starts_with("1. Rectangle:\n\t(1,2) (-1,2)"));
    }

    #[test]
    fn draw_width_is_validated() {
        let mut s = Scene::new();
        assert_eq!(s.draw_width(), 79);
        assert!(s.set_draw_width(0).is_err());
        s.set_draw_width(41).unwrap();
        let frame = s.draw().unwrap();
        assert_eq!(frame.width(), 41);
        assert!(frame.is_empty());
        assert!(Scene::with_draw_width(0).is_err());
    }
}
