//! The plotting surface that scenes are drawn onto.

use crate::math::{Point2d, Vector2d};
use crate::style::{LineStyle, MarkerStyle};
use crate::util::Interval;
use serde_json::json;

/// A 2D plotting surface in global frame coordinates.
///
/// Rendering and display are up to the implementor; the renderer only
/// appends primitives.
pub trait PlotSurface {
    /// Draws a line segment from `p1` to `p2`.
    fn line(&mut self, p1: Point2d, p2: Point2d, style: &LineStyle);

    /// Draws a marker at each point.
    fn scatter(&mut self, points: &[Point2d], style: &MarkerStyle);

    /// Draws an arrow from `origin` to `origin + delta`.
    fn arrow(&mut self, origin: Point2d, delta: Vector2d, width: f64);
}

impl<T: PlotSurface + ?Sized> PlotSurface for &mut T {
    fn line(&mut self, p1: Point2d, p2: Point2d, style: &LineStyle) {
        (**self).line(p1, p2, style)
    }

    fn scatter(&mut self, points: &[Point2d], style: &MarkerStyle) {
        (**self).scatter(points, style)
    }

    fn arrow(&mut self, origin: Point2d, delta: Vector2d, width: f64) {
        (**self).arrow(origin, delta, width)
    }
}

/// A single drawing primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line {
        p1: Point2d,
        p2: Point2d,
        style: LineStyle,
    },
    Scatter {
        points: Vec<Point2d>,
        style: MarkerStyle,
    },
    Arrow {
        origin: Point2d,
        delta: Vector2d,
        width: f64,
    },
}

impl Primitive {
    /// The points which the primitive covers.
    fn extent(&self) -> Vec<Point2d> {
        match self {
            Primitive::Line { p1, p2, .. } => vec![*p1, *p2],
            Primitive::Scatter { points, .. } => points.clone(),
            Primitive::Arrow { origin, delta, .. } => vec![*origin, *origin + *delta],
        }
    }

    /// Converts the primitive to a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Primitive::Line { p1, p2, style } => json!({
                "type": "line",
                "p1": [p1.x, p1.y],
                "p2": [p2.x, p2.y],
                "color": style.color.name(),
                "width": style.width,
            }),
            Primitive::Scatter { points, style } => json!({
                "type": "scatter",
                "points": points.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
                "marker": style.marker.symbol().to_string(),
                "color": style.color.name(),
            }),
            Primitive::Arrow {
                origin,
                delta,
                width,
            } => json!({
                "type": "arrow",
                "origin": [origin.x, origin.y],
                "delta": [delta.x, delta.y],
                "width": width,
            }),
        }
    }
}

/// A surface which records the primitives drawn onto it, in order.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    primitives: Vec<Primitive>,
}

impl Frame {
    /// Creates an empty frame.
    pub fn new() -> Self {
        Default::default()
    }

    /// The primitives drawn so far.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Whether nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Removes and returns the recorded primitives, leaving the frame empty.
    pub fn take(&mut self) -> Vec<Primitive> {
        std::mem::take(&mut self.primitives)
    }

    /// The axis-aligned extents of everything drawn, as `[x, y]` intervals.
    ///
    /// Returns `None` if the frame covers no points.
    pub fn bounds(&self) -> Option<[Interval<f64>; 2]> {
        let mut points = self.primitives.iter().flat_map(Primitive::extent);
        let first = points.next()?;
        let init = [Interval::new(first.x, first.x), Interval::new(first.y, first.y)];
        Some(points.fold(init, |[xs, ys], p| [xs.include(p.x), ys.include(p.y)]))
    }

    /// Gets the frame as a JSON array of primitives.
    pub fn to_json(&self) -> serde_json::Value {
        json!(self
            .primitives
            .iter()
            .map(Primitive::to_json)
            .collect::<Vec<_>>())
    }

    /// Writes the frame as JSON.
    pub fn write_json(&self, writer: impl std::io::Write) -> serde_json::Result<()> {
        serde_json::to_writer(writer, &self.to_json())
    }
}

impl PlotSurface for Frame {
    fn line(&mut self, p1: Point2d, p2: Point2d, style: &LineStyle) {
        self.primitives.push(Primitive::Line {
            p1,
            p2,
            style: *style,
        });
    }

    fn scatter(&mut self, points: &[Point2d], style: &MarkerStyle) {
        self.primitives.push(Primitive::Scatter {
            points: points.to_vec(),
            style: *style,
        });
    }

    fn arrow(&mut self, origin: Point2d, delta: Vector2d, width: f64) {
        self.primitives.push(Primitive::Arrow {
            origin,
            delta,
            width,
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::style::{Color, Marker};

    fn sample_frame() -> Frame {
        let mut frame = Frame::new();
        frame.line(
            Point2d::new(0.0, 0.0),
            Point2d::new(2.0, 1.0),
            &LineStyle::solid(Color::Red),
        );
        frame.scatter(
            &[Point2d::new(-3.0, 4.0)],
            &MarkerStyle::new(Marker::Point, Color::Blue),
        );
        frame.arrow(Point2d::new(1.0, 1.0), Vector2d::new(0.0, -5.0), 1.0);
        frame
    }

    #[test]
    fn records_in_order() {
        let frame = sample_frame();
        let kinds: Vec<_> = frame
            .primitives()
            .iter()
            .map(|p| match p {
                Primitive::Line { .. } => "line",
                Primitive::Scatter { .. } => "scatter",
                Primitive::Arrow { .. } => "arrow",
            })
            .collect();
        assert_eq!(kinds, ["line", "scatter", "arrow"]);
    }

    #[test]
    fn bounds_cover_all_primitives() {
        let [xs, ys] = sample_frame().bounds().unwrap();
        assert_eq!(xs, Interval::new(-3.0, 2.0));
        assert_eq!(ys, Interval::new(-4.0, 4.0));
        assert!(Frame::new().bounds().is_none());
    }

    #[test]
    fn json_shape() {
        let json = sample_frame().to_json();
        assert_eq!(json[0]["type"], "line");
        assert_eq!(json[0]["p2"], json!([2.0, 1.0]));
        assert_eq!(json[0]["color"], "red");
        assert_eq!(json[1]["marker"], ".");
        assert_eq!(json[2]["delta"], json!([0.0, -5.0]));
    }

    #[test]
    fn take_empties_frame() {
        let mut frame = sample_frame();
        assert_eq!(frame.take().len(), 3);
        assert!(frame.is_empty());
    }
}
