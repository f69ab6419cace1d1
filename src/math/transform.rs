//! Transforms between a car's local frame and the global frame.
//!
//! In the local frame +X points in the direction of travel and +Y points to
//! the car's left. A local point `p` lands in the global frame at
//! `position + R(theta) * p * scale`.

use super::{project_local, rot90, rotation_matrix, Matrix2d, Point2d};
use crate::Pose;
use cgmath::prelude::*;

/// Geometry expressed in a car's local frame which can be placed in the global frame.
///
/// Implemented for single points as well as ordered sequences of points, so the
/// same call site works for either.
pub trait LocalGeometry {
    /// The global frame counterpart of `Self`.
    type Output;

    /// Places the geometry in the global frame at the given pose and scale.
    fn to_global(&self, pose: &Pose, scale: f64) -> Self::Output;
}

/// A pose and scale with the rotation matrix precomputed.
struct Placement {
    origin: Point2d,
    rotation: Matrix2d,
    scale: f64,
}

impl Placement {
    fn new(pose: &Pose, scale: f64) -> Self {
        Self {
            origin: pose.position(),
            rotation: rotation_matrix(pose.theta),
            scale,
        }
    }

    #[inline]
    fn apply(&self, point: Point2d) -> Point2d {
        self.origin + (self.rotation * point.to_vec()) * self.scale
    }
}

impl LocalGeometry for Point2d {
    type Output = Point2d;

    fn to_global(&self, pose: &Pose, scale: f64) -> Point2d {
        Placement::new(pose, scale).apply(*self)
    }
}

impl<const N: usize> LocalGeometry for [Point2d; N] {
    type Output = [Point2d; N];

    fn to_global(&self, pose: &Pose, scale: f64) -> [Point2d; N] {
        let placement = Placement::new(pose, scale);
        self.map(|point| placement.apply(point))
    }
}

impl LocalGeometry for [Point2d] {
    type Output = Vec<Point2d>;

    fn to_global(&self, pose: &Pose, scale: f64) -> Vec<Point2d> {
        let placement = Placement::new(pose, scale);
        self.iter().map(|point| placement.apply(*point)).collect()
    }
}

impl LocalGeometry for Vec<Point2d> {
    type Output = Vec<Point2d>;

    fn to_global(&self, pose: &Pose, scale: f64) -> Vec<Point2d> {
        self.as_slice().to_global(pose, scale)
    }
}

/// Transforms a point, or an ordered sequence of points, from the local frame
/// of a car at `pose` into the global frame.
///
/// # Parameters
/// * `pose` - The car pose in the global frame. Its speed is ignored.
/// * `points` - The geometry in the car's local frame.
/// * `scale` - Multiplies local distances before translating.
pub fn local_to_global<T: LocalGeometry + ?Sized>(
    pose: &Pose,
    points: &T,
    scale: f64,
) -> T::Output {
    points.to_global(pose, scale)
}

/// Maps a global frame point back into the local frame of a car at `pose`.
///
/// The inverse of [local_to_global] for a non-zero `scale`.
pub fn global_to_local(pose: &Pose, point: Point2d, scale: f64) -> Point2d {
    let x_axis = pose.direction();
    let local = project_local(point, pose.position(), x_axis, rot90(x_axis));
    Point2d::from_vec(local.to_vec() / scale)
}
