use std::{error::Error, fmt::Display};

use log::{debug, warn};
use nalgebra::Point2;

use crate::{knot::Parametrization, segment::Segment};

const SEGMENT_SIZE: usize = 4;

/// Chain of Catmull-Rom segments built over an ordered sequence of anchors. Each window of four
/// consecutive anchors contributes one segment running between its two inner anchors.
#[derive(Debug, Clone)]
pub struct CatmullRomChain {
    anchors: Vec<Point2<f64>>,
    parametrization: Parametrization,
}

impl CatmullRomChain {
    /// Creates chain with [Parametrization::default] (chordal). Fewer than 4 anchors is accepted
    /// and yields a chain without segments.
    pub fn new(anchors: Vec<Point2<f64>>) -> Self {
        CatmullRomChain { anchors, parametrization: Parametrization::default() }
    }

    pub fn with_parametrization(mut self, parametrization: Parametrization) -> Self {
        self.parametrization = parametrization;
        self
    }

    pub fn number_of_segments(&self) -> usize {
        self.anchors.len().saturating_sub(SEGMENT_SIZE - 1)
    }

    /// Builds every segment of the chain in anchor order.
    /// # Errors
    /// Error of the first degenerate segment is returned.
    pub fn segments(&self) -> Result<Vec<Segment>, Box<dyn Error>> {
        let mut segments = Vec::with_capacity(self.number_of_segments());

        for window in self.anchors.windows(SEGMENT_SIZE) {
            let anchors = [window[0], window[1], window[2], window[3]];
            segments.push(Segment::new(anchors, self.parametrization)?);
        }
        Ok(segments)
    }

    /// Interpolates the whole chain with `number_of_points` samples per segment. Result holds
    /// `number_of_segments() * number_of_points` points ordered along the anchors.
    /// # Errors
    /// Error is returned when `number_of_points` is 0, the total number of points overflows `usize`,
    /// or any segment is degenerate.
    pub fn interpolate(&self, number_of_points: usize) -> Result<Vec<Point2<f64>>, Box<dyn Error>> {
        if number_of_points == 0 {
            return Err(Box::new(ChainError("number of points per segment must be at least 1".to_string())));
        }
        if self.number_of_segments() == 0 {
            warn!(
                "{} anchors given, at least {} are needed for a segment, chain is empty",
                self.anchors.len(),
                SEGMENT_SIZE
            );
            return Ok(Vec::new());
        }

        let total = match self.number_of_segments().checked_mul(number_of_points) {
            Some(total) => total,
            None => {
                return Err(Box::new(ChainError(format!(
                    "{} segments with {} points each do not fit in memory",
                    self.number_of_segments(),
                    number_of_points
                ))))
            }
        };

        debug!(
            "interpolating {} segments, {} points each, alpha {}",
            self.number_of_segments(),
            number_of_points,
            self.parametrization.alpha()
        );

        let mut points = Vec::with_capacity(total);
        for segment in self.segments()? {
            points.extend(segment.sample(number_of_points)?);
        }
        Ok(points)
    }

    pub fn get_anchors(&self) -> &[Point2<f64>] {
        &self.anchors
    }

    pub fn get_parametrization(&self) -> Parametrization {
        self.parametrization
    }
}

#[derive(Debug)]
struct ChainError(String);

impl Display for ChainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in CatmullRomChain: {}", self.0)
    }
}

impl Error for ChainError {}
