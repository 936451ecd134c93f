extern crate spline_chain;

use std::io::{stdout, Write};

use nalgebra::Point2;
use spline_chain::{write_point_records, CatmullRomChain, Parametrization};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let anchors = vec![
        Point2::new(10.0, -10.0),
        Point2::new(-2.5, -2.5),
        Point2::new(-10.0, 10.0),
        Point2::new(2.5, 2.5),
    ];

    // density of curve points between two inner anchors
    let number_of_points = 10;

    let chain = CatmullRomChain::new(anchors.clone()).with_parametrization(Parametrization::Chordal);
    let points = chain.interpolate(number_of_points).unwrap();
    assert_eq!(chain.number_of_segments() * number_of_points, points.len());

    let mut out = stdout().lock();
    write_point_records(&mut out, &points).unwrap();

    writeln!(out, "anchors").unwrap();
    write_point_records(&mut out, &anchors).unwrap();
}
