//! Mathematical structs and functions.

use cgmath::{Matrix2, Point2, Vector2};
pub use transform::{global_to_local, local_to_global, LocalGeometry};
pub use util::*;

mod transform;
mod util;

/// A 2D point
pub type Point2d = Point2<f64>;

/// A 2D vector
pub type Vector2d = Vector2<f64>;

/// A 2x2 matrix
pub type Matrix2d = Matrix2<f64>;
