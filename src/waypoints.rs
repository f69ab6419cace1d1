use crate::math::Point2d;

/// A provider of an ordered sequence of global frame waypoints,
/// typically a path planner.
pub trait WaypointSource {
    /// The current waypoints, in order.
    fn waypoints(&self) -> &[Point2d];
}

impl WaypointSource for [Point2d] {
    fn waypoints(&self) -> &[Point2d] {
        self
    }
}

impl WaypointSource for Vec<Point2d> {
    fn waypoints(&self) -> &[Point2d] {
        self
    }
}

impl<const N: usize> WaypointSource for [Point2d; N] {
    fn waypoints(&self) -> &[Point2d] {
        self
    }
}

impl<T: WaypointSource + ?Sized> WaypointSource for &T {
    fn waypoints(&self) -> &[Point2d] {
        (**self).waypoints()
    }
}
