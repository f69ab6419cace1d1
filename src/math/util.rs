use super::{Matrix2d, Point2d, Vector2d};
use cgmath::prelude::*;

/// Builds the counter-clockwise rotation matrix for an angle in radians.
///
/// The angle does not need to be normalised.
pub fn rotation_matrix(theta: f64) -> Matrix2d {
    let (sin, cos) = theta.sin_cos();
    // Column major: the first column is the image of +X.
    Matrix2d::new(cos, sin, -sin, cos)
}

/// Projects a point onto a local coordinate system.
///
/// # Parameters
/// * `point` - The point to project
/// * `origin` - The origin of the coordinate system
/// * `x_axis` - The basis vector pointing in the positive x-axis.
/// * `y_axis` - The basis vector pointing in the positive y-axis.
pub fn project_local(
    point: Point2d,
    origin: Point2d,
    x_axis: Vector2d,
    y_axis: Vector2d,
) -> Point2d {
    let point = point - origin;
    Point2d::new(point.dot(x_axis), point.dot(y_axis))
}

/// Rotates a vector 90 degrees counter-clockwise.
pub fn rot90(vec: Vector2d) -> Vector2d {
    Vector2d::new(-vec.y, vec.x)
}
