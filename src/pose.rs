use crate::math::{Point2d, Vector2d};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The state of a car at an instant, in the global frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    /// The x-coordinate of the car in m.
    pub x: f64,
    /// The y-coordinate of the car in m.
    pub y: f64,
    /// The heading in radians, measured counter-clockwise from the global +X axis.
    pub theta: f64,
    /// The forward speed in m/s.
    pub speed: f64,
}

impl Pose {
    /// Creates a new pose.
    pub const fn new(x: f64, y: f64, theta: f64, speed: f64) -> Self {
        Self { x, y, theta, speed }
    }

    /// The position of the car in the global frame.
    pub fn position(&self) -> Point2d {
        Point2d::new(self.x, self.y)
    }

    /// A unit vector in the global frame aligned with the car's heading.
    pub fn direction(&self) -> Vector2d {
        let (sin, cos) = self.theta.sin_cos();
        Vector2d::new(cos, sin)
    }

    /// The velocity of the car in m/s.
    pub fn velocity(&self) -> Vector2d {
        self.speed * self.direction()
    }

    /// Whether every component of the pose is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.theta.is_finite() && self.speed.is_finite()
    }
}

impl From<[f64; 4]> for Pose {
    fn from([x, y, theta, speed]: [f64; 4]) -> Self {
        Self::new(x, y, theta, speed)
    }
}

impl From<(f64, f64, f64, f64)> for Pose {
    fn from((x, y, theta, speed): (f64, f64, f64, f64)) -> Self {
        Self::new(x, y, theta, speed)
    }
}

#[cfg(test)]
mod test {
    use super::Pose;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::PI;

    #[test]
    fn velocity_follows_heading() {
        let pose = Pose::from([1.0, 2.0, 0.5 * PI, 3.0]);
        let vel = pose.velocity();
        assert_approx_eq!(vel.x, 0.0);
        assert_approx_eq!(vel.y, 3.0);
    }

    #[test]
    fn non_finite() {
        assert!(Pose::new(0.0, 0.0, 0.0, 0.0).is_finite());
        assert!(!Pose::from((f64::NAN, 0.0, 0.0, 0.0)).is_finite());
        assert!(!Pose::new(0.0, 0.0, f64::INFINITY, 0.0).is_finite());
    }
}
