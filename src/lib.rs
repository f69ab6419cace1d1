pub use car::{CarGeometry, Edge};
pub use cgmath;
pub use pose::Pose;
pub use simulation::{Simulation, SimulationAttributes, DEFAULT_CAR_SCALE};
pub use style::{Color, LineStyle, Marker, MarkerStyle};
pub use surface::{Frame, PlotSurface, Primitive};
pub use util::Interval;
pub use waypoints::WaypointSource;

mod car;
pub mod math;
mod pose;
mod simulation;
pub mod style;
mod surface;
mod util;
mod waypoints;
