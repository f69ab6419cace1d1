use std::f64::consts::PI;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use navsim_viz::math::Point2d;
use navsim_viz::{Frame, Pose, Simulation, SimulationAttributes};
use rand_distr::Distribution;

/// Drives a car around a circular loop of waypoints and prints the drawn frames as JSON.
#[derive(Parser, Debug)]
struct Args {
    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 100)]
    frames: usize,

    /// Time step in s
    #[arg(long, default_value_t = 0.1)]
    dt: f64,

    /// Radius of the waypoint loop in m
    #[arg(short, long, default_value_t = 50.0)]
    radius: f64,

    /// Number of waypoints on the loop
    #[arg(short, long, default_value_t = 36)]
    waypoints: usize,

    /// Speed of the car in m/s
    #[arg(short, long, default_value_t = 5.0)]
    speed: f64,

    /// Standard deviation of the heading noise in radians
    #[arg(long, default_value_t = 0.0)]
    noise: f64,

    /// JSON file with drawing attributes
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every frame instead of only the last
    #[arg(long)]
    all: bool,
}

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}

fn load_attributes(path: Option<&PathBuf>) -> Result<SimulationAttributes> {
    let Some(path) = path else {
        return Ok(Default::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid attributes in {}", path.display()))
}

fn circle_waypoints(radius: f64, count: usize) -> Vec<Point2d> {
    (0..count)
        .map(|i| 2.0 * PI * i as f64 / count as f64)
        .map(|phi| Point2d::new(radius * phi.cos(), radius * phi.sin()))
        .collect()
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    anyhow::ensure!(args.radius > 0.0, "radius must be positive");

    let attributes = load_attributes(args.config.as_ref())?;
    let waypoints = circle_waypoints(args.radius, args.waypoints);
    let sim = Simulation::new(&waypoints, &attributes);

    let noise = rand_distr::Normal::new(0.0, args.noise).context("invalid heading noise")?;
    let mut rng = rand::thread_rng();

    let mut frames = vec![];
    let mut phi = 0.0_f64;
    for _ in 0..args.frames {
        let pose = Pose::new(
            args.radius * phi.cos(),
            args.radius * phi.sin(),
            phi + 0.5 * PI + noise.sample(&mut rng),
            args.speed,
        );
        let mut frame = Frame::new();
        sim.draw(&mut frame, &pose);
        frames.push(frame);
        phi += args.speed * args.dt / args.radius;
    }

    if let Some([xs, ys]) = frames.last().and_then(Frame::bounds) {
        log::info!(
            "simulated {} frames, last frame is {:.1} x {:.1} m centred on ({:.1}, {:.1})",
            frames.len(),
            xs.length(),
            ys.length(),
            xs.midpoint(),
            ys.midpoint()
        );
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.all {
        let json = serde_json::Value::Array(frames.iter().map(Frame::to_json).collect());
        serde_json::to_writer(&mut out, &json)?;
    } else if let Some(frame) = frames.last() {
        frame.write_json(&mut out)?;
    }
    writeln!(out)?;
    Ok(())
}
