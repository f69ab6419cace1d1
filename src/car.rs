use crate::math::Point2d;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The rectangular outline of a car in its own local frame, in m.
///
/// ```text
///     y ^
///       |
///    lb |_____________ lt
///       |             |   direction of travel
/// (0,0) |-------------|-------> x
///    rb |_____________| rt
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CarGeometry {
    /// Front left corner.
    pub lt: Point2d,
    /// Front right corner.
    pub rt: Point2d,
    /// Rear left corner.
    pub lb: Point2d,
    /// Rear right corner.
    pub rb: Point2d,
}

/// One side of the car outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Front,
    Rear,
    Left,
    Right,
}

impl Edge {
    /// All edges, in drawing order.
    pub const ALL: [Edge; 4] = [Edge::Rear, Edge::Front, Edge::Left, Edge::Right];
}

impl CarGeometry {
    /// Creates a car outline from its four corners.
    pub const fn new(lt: Point2d, rt: Point2d, lb: Point2d, rb: Point2d) -> Self {
        Self { lt, rt, lb, rb }
    }

    /// The corners in the order `lt`, `rt`, `lb`, `rb`.
    pub fn corners(&self) -> [Point2d; 4] {
        [self.lt, self.rt, self.lb, self.rb]
    }

    /// The start and end corners of an edge.
    pub fn edge(&self, edge: Edge) -> (Point2d, Point2d) {
        edge_of(&self.corners(), edge)
    }

    /// The distance from the rear edge to the front edge in m.
    pub fn length(&self) -> f64 {
        self.lt.x - self.lb.x
    }

    /// The distance from the right edge to the left edge in m.
    pub fn width(&self) -> f64 {
        self.lt.y - self.rt.y
    }
}

/// Picks an edge out of corners ordered `lt`, `rt`, `lb`, `rb`,
/// which may already have been moved into another frame.
pub(crate) fn edge_of(corners: &[Point2d; 4], edge: Edge) -> (Point2d, Point2d) {
    let [lt, rt, lb, rb] = *corners;
    match edge {
        Edge::Front => (rt, lt),
        Edge::Rear => (rb, lb),
        Edge::Left => (lt, lb),
        Edge::Right => (rt, rb),
    }
}

impl Default for CarGeometry {
    fn default() -> Self {
        Self {
            lt: Point2d::new(1.3, 0.5),
            rt: Point2d::new(1.3, -0.5),
            lb: Point2d::new(0.0, 0.5),
            rb: Point2d::new(0.0, -0.5),
        }
    }
}
