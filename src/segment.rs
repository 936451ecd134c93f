use std::{error::Error, fmt::Display};

use nalgebra::Point2;

use crate::knot::{Parametrization, SegmentKnots};

/// Single Catmull-Rom segment spanned by four anchors. The curve runs from the second to the
/// third anchor, outer anchors only shape the tangents.
#[derive(Debug, Clone)]
pub struct Segment {
    anchors: [Point2<f64>; 4],
    knots: SegmentKnots,
}

impl Segment {
    /// Creates segment and computes its knots for given `parametrization`.
    /// # Errors
    /// Error is returned when any knot interval is not positive and finite, which happens when
    /// consecutive anchors coincide or a coordinate is not finite.
    /// ```
    /// use nalgebra::Point2;
    /// use spline_chain::{Parametrization, Segment};
    ///
    /// let p = Point2::new(1.0, 1.0);
    /// let segment = Segment::new([Point2::origin(), p, p, Point2::new(2.0, 0.0)], Parametrization::Centripetal);
    /// assert!(segment.is_err());
    /// ```
    pub fn new(anchors: [Point2<f64>; 4], parametrization: Parametrization) -> Result<Self, Box<dyn Error>> {
        let knots = SegmentKnots::new(&anchors, parametrization.alpha());

        if !knots.has_positive_intervals() {
            return Err(Box::new(SegmentError(format!(
                "degenerate knot intervals {:?}, consecutive anchors must be distinct",
                knots.get_values()
            ))));
        }

        Ok(Segment { anchors, knots })
    }

    /// Evaluates the segment at knot parameter `t`. Values between `t1` and `t2` lie on the
    /// interpolated part of the curve.
    pub fn evaluate(&self, t: f64) -> Point2<f64> {
        let [p0, p1, p2, p3] = &self.anchors;

        let a1 = self.blend(p0, p1, 0, 1, t);
        let a2 = self.blend(p1, p2, 1, 2, t);
        let a3 = self.blend(p2, p3, 2, 3, t);
        let b1 = self.blend(&a1, &a2, 0, 2, t);
        let b2 = self.blend(&a2, &a3, 1, 3, t);
        self.blend(&b1, &b2, 1, 2, t)
    }

    /// Samples `number_of_points` points at parameters linearly spaced over `[t1, t2]`,
    /// both ends included. First point is the second anchor, last is the third anchor.
    /// # Errors
    /// Error is returned when `number_of_points` is 0.
    pub fn sample(&self, number_of_points: usize) -> Result<Vec<Point2<f64>>, Box<dyn Error>> {
        if number_of_points == 0 {
            return Err(Box::new(SegmentError("number of points must be at least 1".to_string())));
        }

        let (t_start, t_end) = self.knots.get_domain();
        let last = number_of_points - 1;
        let step = if last > 0 { (t_end - t_start) / last as f64 } else { 0.0 };

        let points = (0..number_of_points)
            .map(|i| if i == last && last > 0 { t_end } else { t_start + step * i as f64 })
            .map(|t| self.evaluate(t))
            .collect();
        Ok(points)
    }

    pub fn get_anchors(&self) -> &[Point2<f64>; 4] {
        &self.anchors
    }

    pub fn get_knots(&self) -> &SegmentKnots {
        &self.knots
    }

    fn blend(&self, p: &Point2<f64>, q: &Point2<f64>, i: usize, j: usize, t: f64) -> Point2<f64> {
        let ti = self.knots.get(i);
        let tj = self.knots.get(j);
        let span = tj - ti;
        Point2::from(p.coords * ((tj - t) / span) + q.coords * ((t - ti) / span))
    }
}

#[derive(Debug)]
struct SegmentError(String);

impl Display for SegmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in Segment: {}", self.0)
    }
}

impl Error for SegmentError {}
