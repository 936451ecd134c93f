use nalgebra::Point2;

/// Parametrization of a Catmull-Rom segment, expressed through the tension exponent `alpha`
/// applied to the distance between consecutive anchors.
/// - [Parametrization::Uniform] - `alpha = 0`,
/// - [Parametrization::Centripetal] - `alpha = 0.5`,
/// - [Parametrization::Chordal] - `alpha = 1`,
/// - [Parametrization::Custom] - any other exponent, not range checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parametrization {
    Uniform,
    Centripetal,
    Chordal,
    Custom(f64),
}

impl Parametrization {
    pub fn alpha(&self) -> f64 {
        match self {
            Parametrization::Uniform => 0.0,
            Parametrization::Centripetal => 0.5,
            Parametrization::Chordal => 1.0,
            Parametrization::Custom(alpha) => *alpha,
        }
    }
}

impl Default for Parametrization {
    fn default() -> Self {
        Parametrization::Chordal
    }
}

/// Returns knot value following `ti`, advanced by the distance between `pi` and `pj` raised to `alpha`.
/// # Example
/// ```
/// use nalgebra::Point2;
/// use spline_chain::next_knot;
///
/// let tj = next_knot(1.0, &Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0), 1.0);
/// assert_eq!(6.0, tj);
/// ```
pub fn next_knot(ti: f64, pi: &Point2<f64>, pj: &Point2<f64>, alpha: f64) -> f64 {
    ti + nalgebra::distance(pi, pj).powf(alpha)
}

/// Segment local knot values `t0 < t1 < t2 < t3`, one per anchor. `t0` is always 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentKnots {
    values: [f64; 4],
}

impl SegmentKnots {
    pub fn new(anchors: &[Point2<f64>; 4], alpha: f64) -> Self {
        let t0 = 0.0;
        let t1 = next_knot(t0, &anchors[0], &anchors[1], alpha);
        let t2 = next_knot(t1, &anchors[1], &anchors[2], alpha);
        let t3 = next_knot(t2, &anchors[2], &anchors[3], alpha);
        SegmentKnots { values: [t0, t1, t2, t3] }
    }

    pub fn get(&self, index: usize) -> f64 {
        self.values[index]
    }

    pub fn get_values(&self) -> &[f64; 4] {
        &self.values
    }

    /// Parameter range over which the segment is sampled, `(t1, t2)`.
    pub fn get_domain(&self) -> (f64, f64) {
        (self.values[1], self.values[2])
    }

    /// Checks that every knot interval used as a blend denominator is positive and finite.
    pub(crate) fn has_positive_intervals(&self) -> bool {
        [(0, 1), (1, 2), (2, 3), (0, 2), (1, 3)]
            .iter()
            .map(|(i, j)| self.values[*j] - self.values[*i])
            .all(|interval| interval.is_finite() && interval > 0.0)
    }
}
