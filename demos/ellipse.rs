extern crate spline_chain;

use std::io::stdout;

use spline_chain::{write_point_records, AngleSpacing, EllipseSampler};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let biased = std::env::args().any(|arg| arg == "--biased");

    let mut sampler = EllipseSampler::new(10.0, 2.5, 500).unwrap();
    if biased {
        sampler = sampler.with_spacing(AngleSpacing::Biased { strength: 0.6 }).unwrap();
    }

    write_point_records(&mut stdout().lock(), &sampler.sample()).unwrap();
}
