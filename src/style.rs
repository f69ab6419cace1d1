//! Visual styles for drawing primitives.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A drawing colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    Red,
    Green,
    Blue,
    Black,
}

impl Color {
    /// The lowercase colour name.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Black => "black",
        }
    }
}

/// The style of a line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineStyle {
    pub color: Color,
    /// Line width in points.
    pub width: f64,
}

impl LineStyle {
    pub const fn solid(color: Color) -> Self {
        Self { color, width: 1.0 }
    }
}

/// The shape drawn for each point of a scatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Marker {
    Point,
    Circle,
    Cross,
}

impl Marker {
    /// The conventional single character symbol for the marker.
    pub fn symbol(&self) -> char {
        match self {
            Marker::Point => '.',
            Marker::Circle => 'o',
            Marker::Cross => 'x',
        }
    }
}

/// The style of a scatter of points.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarkerStyle {
    pub marker: Marker,
    pub color: Color,
}

impl MarkerStyle {
    pub const fn new(marker: Marker, color: Color) -> Self {
        Self { marker, color }
    }
}
