use crate::car::{edge_of, CarGeometry, Edge};
use crate::math::{local_to_global, LocalGeometry, Point2d};
use crate::style::{Color, LineStyle, Marker, MarkerStyle};
use crate::surface::PlotSurface;
use crate::waypoints::WaypointSource;
use crate::Pose;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default factor by which the car outline is enlarged when drawn.
pub const DEFAULT_CAR_SCALE: f64 = 10.0;

/// The attributes of a [Simulation] scene.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationAttributes {
    /// Factor applied to the car outline by [Simulation::draw].
    pub car_scale: f64,
    /// Width of the heading arrow.
    pub arrow_width: f64,
    /// Style of the front edge.
    pub front: LineStyle,
    /// Style of the rear edge.
    pub rear: LineStyle,
    /// Style of the left and right edges.
    pub sides: LineStyle,
    /// Style of the waypoint markers.
    pub waypoints: MarkerStyle,
}

impl Default for SimulationAttributes {
    fn default() -> Self {
        Self {
            car_scale: DEFAULT_CAR_SCALE,
            arrow_width: 1.0,
            front: LineStyle::solid(Color::Green),
            rear: LineStyle::solid(Color::Red),
            sides: LineStyle::solid(Color::Black),
            waypoints: MarkerStyle::new(Marker::Point, Color::Blue),
        }
    }
}

impl SimulationAttributes {
    /// The style used for an edge of the car outline.
    pub fn edge_style(&self, edge: Edge) -> &LineStyle {
        match edge {
            Edge::Front => &self.front,
            Edge::Rear => &self.rear,
            Edge::Left | Edge::Right => &self.sides,
        }
    }
}

/// A scene of a single car following a set of waypoints.
#[derive(Clone, Debug)]
pub struct Simulation {
    /// The planned waypoints in the global frame.
    waypoints: Vec<Point2d>,
    /// The outline of the car in its local frame.
    car: CarGeometry,
    /// The drawing attributes.
    attributes: SimulationAttributes,
}

impl Simulation {
    /// Creates a new scene, taking a snapshot of the planner's waypoints.
    pub fn new(wayplanner: &impl WaypointSource, attributes: &SimulationAttributes) -> Self {
        let waypoints = wayplanner.waypoints().to_vec();
        log::debug!(
            "created simulation with {} waypoints, car scale {}",
            waypoints.len(),
            attributes.car_scale
        );
        Self {
            waypoints,
            car: CarGeometry::default(),
            attributes: *attributes,
        }
    }

    /// Replaces the car outline.
    pub fn with_car(mut self, car: CarGeometry) -> Self {
        self.car = car;
        self
    }

    /// Replaces the waypoints, e.g. after the planner has re-planned.
    pub fn set_waypoints(&mut self, wayplanner: &impl WaypointSource) {
        self.waypoints = wayplanner.waypoints().to_vec();
        log::debug!("waypoints replaced, now {}", self.waypoints.len());
    }

    /// The waypoints in the global frame.
    pub fn waypoints(&self) -> &[Point2d] {
        &self.waypoints
    }

    /// The outline of the car in its local frame.
    pub fn car(&self) -> &CarGeometry {
        &self.car
    }

    /// The drawing attributes.
    pub fn attributes(&self) -> &SimulationAttributes {
        &self.attributes
    }

    /// Transforms local frame geometry of a car at `pose` into the global frame.
    pub fn local_to_global<T: LocalGeometry + ?Sized>(
        &self,
        pose: &Pose,
        points: &T,
        scale: f64,
    ) -> T::Output {
        local_to_global(pose, points, scale)
    }

    /// Draws the waypoints as markers. Nothing is drawn if there are none.
    pub fn draw_waypoints(&self, surface: &mut impl PlotSurface) {
        if self.waypoints.is_empty() {
            return;
        }
        surface.scatter(&self.waypoints, &self.attributes.waypoints);
    }

    /// Draws the car outline at `pose`, enlarged by `scale`, followed by an arrow
    /// from the car's position along its heading with a length equal to its speed.
    pub fn draw_vehicle(&self, surface: &mut impl PlotSurface, pose: &Pose, scale: f64) {
        if !pose.is_finite() {
            log::warn!("drawing vehicle at non-finite pose {:?}", pose);
        }
        log::trace!("drawing vehicle at {:?}, scale {}", pose, scale);

        let corners = self.car.corners().to_global(pose, scale);
        for edge in Edge::ALL {
            let (start, end) = edge_of(&corners, edge);
            surface.line(start, end, self.attributes.edge_style(edge));
        }
        surface.arrow(pose.position(), pose.velocity(), self.attributes.arrow_width);
    }

    /// Draws the waypoints and then the car at the configured scale.
    pub fn draw(&self, surface: &mut impl PlotSurface, pose: &Pose) {
        self.draw_waypoints(surface);
        self.draw_vehicle(surface, pose, self.attributes.car_scale);
    }

    /// Draws a line segment whose ends are given in the local frame of a car at `pose`.
    pub fn draw_local_segment(
        &self,
        surface: &mut impl PlotSurface,
        pose: &Pose,
        start: Point2d,
        end: Point2d,
        style: &LineStyle,
        scale: f64,
    ) {
        let [start, end] = [start, end].to_global(pose, scale);
        surface.line(start, end, style);
    }

    /// Draws markers at points given in the local frame of a car at `pose`.
    pub fn scatter_local(
        &self,
        surface: &mut impl PlotSurface,
        pose: &Pose,
        points: &[Point2d],
        style: &MarkerStyle,
        scale: f64,
    ) {
        surface.scatter(&points.to_global(pose, scale), style);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::surface::{Frame, Primitive};
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::PI;

    fn lines(frame: &Frame) -> Vec<(Point2d, Point2d, Color)> {
        frame
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Line { p1, p2, style } => Some((*p1, *p2, style.color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn vehicle_at_origin_is_scaled_outline() {
        let sim = Simulation::new(&Vec::<Point2d>::new(), &Default::default());
        let car = *sim.car();
        let mut frame = Frame::new();
        sim.draw_vehicle(&mut frame, &Pose::new(0.0, 0.0, 0.0, 0.0), 10.0);

        let s = |p: Point2d| Point2d::new(10.0 * p.x, 10.0 * p.y);
        assert_eq!(
            lines(&frame),
            vec![
                (s(car.rb), s(car.lb), Color::Red),
                (s(car.rt), s(car.lt), Color::Green),
                (s(car.lt), s(car.lb), Color::Black),
                (s(car.rt), s(car.rb), Color::Black),
            ]
        );
    }

    #[test]
    fn arrow_follows_heading_and_speed() {
        let sim = Simulation::new(&Vec::<Point2d>::new(), &Default::default());
        let mut frame = Frame::new();
        sim.draw_vehicle(&mut frame, &Pose::new(5.0, 6.0, 0.5 * PI, 3.0), 10.0);

        match frame.primitives().last() {
            Some(Primitive::Arrow {
                origin,
                delta,
                width,
            }) => {
                assert_eq!(*origin, Point2d::new(5.0, 6.0));
                assert_approx_eq!(delta.x, 0.0);
                assert_approx_eq!(delta.y, 3.0);
                assert_eq!(*width, 1.0);
            }
            other => panic!("expected an arrow, got {:?}", other),
        }
    }

    #[test]
    fn empty_waypoints_draw_nothing() {
        let sim = Simulation::new(&Vec::<Point2d>::new(), &Default::default());
        let mut frame = Frame::new();
        sim.draw_waypoints(&mut frame);
        assert!(frame.is_empty());
    }

    #[test]
    fn local_segment_is_transformed() {
        let sim = Simulation::new(&Vec::<Point2d>::new(), &Default::default());
        let mut frame = Frame::new();
        let pose = Pose::new(1.0, 1.0, PI, 0.0);
        sim.draw_local_segment(
            &mut frame,
            &pose,
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 0.0),
            &LineStyle::solid(Color::Blue),
            2.0,
        );
        let (p1, p2, _) = lines(&frame)[0];
        assert_eq!(p1, Point2d::new(1.0, 1.0));
        assert_approx_eq!(p2.x, -1.0);
        assert_approx_eq!(p2.y, 1.0);
    }

    #[test]
    fn edge_styles() {
        let attributes = SimulationAttributes::default();
        assert_eq!(attributes.edge_style(Edge::Front).color, Color::Green);
        assert_eq!(attributes.edge_style(Edge::Rear).color, Color::Red);
        assert_eq!(attributes.edge_style(Edge::Left), attributes.edge_style(Edge::Right));
    }

    #[test]
    fn non_finite_pose_is_still_drawn() {
        let sim = Simulation::new(&Vec::<Point2d>::new(), &Default::default());
        let mut frame = Frame::new();
        sim.draw_vehicle(&mut frame, &Pose::new(f64::NAN, 0.0, f64::INFINITY, 1.0), 10.0);

        assert_eq!(lines(&frame).len(), 4);
        assert!(matches!(
            frame.primitives().last(),
            Some(Primitive::Arrow { .. })
        ));
    }

    #[test]
    fn scatter_local_is_transformed() {
        let sim = Simulation::new(&Vec::<Point2d>::new(), &Default::default());
        let mut frame = Frame::new();
        let style = MarkerStyle::new(Marker::Cross, Color::Black);
        sim.scatter_local(
            &mut frame,
            &Pose::new(1.0, 2.0, 0.5 * PI, 0.0),
            &[Point2d::new(1.0, 0.0), Point2d::new(0.0, 1.0)],
            &style,
            2.0,
        );

        match &frame.primitives()[0] {
            Primitive::Scatter { points, style: drawn } => {
                assert_eq!(*drawn, style);
                assert_eq!(points.len(), 2);
                assert_approx_eq!(points[0].x, 1.0);
                assert_approx_eq!(points[0].y, 4.0);
                assert_approx_eq!(points[1].x, -1.0);
                assert_approx_eq!(points[1].y, 2.0);
            }
            other => panic!("expected a scatter, got {:?}", other),
        }
    }

    #[test]
    fn custom_car_outline() {
        let car = CarGeometry::new(
            Point2d::new(4.0, 1.0),
            Point2d::new(4.0, -1.0),
            Point2d::new(-1.0, 1.0),
            Point2d::new(-1.0, -1.0),
        );
        let sim = Simulation::new(&Vec::<Point2d>::new(), &Default::default()).with_car(car);
        assert_eq!(*sim.car(), car);

        let mut frame = Frame::new();
        sim.draw_vehicle(&mut frame, &Pose::new(0.0, 0.0, 0.0, 0.0), 1.0);
        assert_eq!(
            lines(&frame)[1],
            (Point2d::new(4.0, -1.0), Point2d::new(4.0, 1.0), Color::Green)
        );
        assert_eq!(
            lines(&frame)[0],
            (Point2d::new(-1.0, -1.0), Point2d::new(-1.0, 1.0), Color::Red)
        );
    }
}
