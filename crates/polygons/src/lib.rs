//! Interactive 2D polygons: geometry, transformations, and text rendering.
//!
//! Layout
//! - `geom`: `Vector` and `Matrix` value types.
//! - `shape`: the `Shape` trait, symmetric and general polygon families, and
//!   the `Polygon` enum the rest of the crate stores.
//! - `raster`: edge rasterization onto a character grid.
//! - `scene`: 1-based polygon registry used by the console.
//!
//! Data flows one way: `geom` → `shape` → `raster`. The scene only wires
//! them together.

pub mod geom;
pub mod raster;
pub mod scene;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Matrix, Vector};
pub use raster::{rasterize, render, Frame, RasterCfg, RasterError};
pub use scene::{Scene, SceneError};
pub use shape::{GeneralPoly, Polygon, Shape, ShapeError, SymmetricPoly};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{Matrix, Vector};
    pub use crate::raster::{rasterize, render, Frame, RasterCfg};
    pub use crate::scene::Scene;
    pub use crate::shape::{Polygon, Shape};
}
