//! Catmull-Rom spline chains and simple point generators producing ordered 2D point sequences.
//!
//! A chain takes an ordered sequence of anchors and interpolates a smooth curve between every
//! pair of inner anchors of each window of four. Knots are spaced by the distance between
//! anchors raised to the tension exponent of the chosen [Parametrization].
//!
//! # Example
//! ```
//! use nalgebra::Point2;
//! use spline_chain::{CatmullRomChain, Parametrization};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let anchors = vec![
//!     Point2::new(10.0, -10.0),
//!     Point2::new(-2.5, -2.5),
//!     Point2::new(-10.0, 10.0),
//!     Point2::new(2.5, 2.5),
//! ];
//! let chain = CatmullRomChain::new(anchors).with_parametrization(Parametrization::Chordal);
//! let points = chain.interpolate(10).unwrap();
//!
//! assert_eq!(10, points.len());
//! assert_approx_eq!(-2.5, points[0].x, 1e-9);
//! assert_approx_eq!(10.0, points[9].y, 1e-9);
//! ```

mod ellipse;
mod knot;
mod orbit;
mod record;
mod segment;
mod spline;

pub use ellipse::{AngleSpacing, EllipseSampler, OutputFrame};
pub use knot::{next_knot, Parametrization, SegmentKnots};
pub use orbit::Orbit;
pub use record::{write_point_records, PointRecord};
pub use segment::Segment;
pub use spline::CatmullRomChain;
