extern crate spline_chain;

use std::io::stdout;

use nalgebra::{Point2, Vector2};
use spline_chain::{write_point_records, Orbit};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // slightly too fast for a circle, the trajectory is an ellipse
    let orbit = Orbit::new(1.0, Point2::new(10.0, 0.0), Vector2::new(0.0, 0.4))
        .with_time_step(0.5)
        .with_steps(400)
        .with_body_radius(0.5);

    match orbit.trajectory() {
        Ok(positions) => write_point_records(&mut stdout().lock(), &positions).unwrap(),
        Err(error) => log::error!("{}", error),
    }
}
