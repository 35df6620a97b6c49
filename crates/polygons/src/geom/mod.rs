//! Linear algebra value types for the plane.
//!
//! Purpose
//! - `Vector`: vertex positions and displacements with the usual arithmetic.
//! - `Matrix`: 2×2 linear maps (rotations, axis scalings) applied to vertices.
//!
//! Both wrap `nalgebra` storage and are `Copy`. Component and element access
//! is 1-based; out-of-range indices are programming errors and panic.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
