use std::{error::Error, f64::consts::PI, fmt::Display};

use log::debug;
use nalgebra::{Point2, Rotation2};

/// Distribution of sampling angles around the ellipse.
/// - `Uniform` - angles evenly spaced over `[0, 2π]`,
/// - `Biased` - angles warped by `u - strength/2 * sin(2u)`, which packs samples around the
/// vertices on the local x axis. `strength` must be in `[0, 1)` to keep angles increasing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleSpacing {
    Uniform,
    Biased { strength: f64 },
}

impl Default for AngleSpacing {
    fn default() -> Self {
        AngleSpacing::Uniform
    }
}

impl AngleSpacing {
    fn warp(&self, angle: f64) -> f64 {
        match self {
            AngleSpacing::Uniform => angle,
            AngleSpacing::Biased { strength } => angle - 0.5 * strength * (2.0 * angle).sin(),
        }
    }
}

/// Output coordinate frame: points are rotated by `rotation` radians and then scaled so that the
/// ellipse semi-axes map onto `target_width` and `target_height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputFrame {
    pub rotation: f64,
    pub target_width: f64,
    pub target_height: f64,
}

impl Default for OutputFrame {
    fn default() -> Self {
        OutputFrame { rotation: PI / 4.0, target_width: 20.0, target_height: 5.0 }
    }
}

/// Samples points on an origin centered ellipse with semi-axes `width` (local x) and `height`
/// (local y).
///
/// # Example
/// ```
/// use spline_chain::EllipseSampler;
///
/// let sampler = EllipseSampler::new(10.0, 2.5, 500).unwrap();
/// assert_eq!(500, sampler.sample().len());
/// ```
#[derive(Debug, Clone)]
pub struct EllipseSampler {
    width: f64,
    height: f64,
    amount: usize,
    spacing: AngleSpacing,
    frame: OutputFrame,
}

impl EllipseSampler {
    /// # Errors
    /// Error is returned when `width` or `height` is not positive and finite, or `amount` is 0.
    pub fn new(width: f64, height: f64, amount: usize) -> Result<Self, Box<dyn Error>> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(Box::new(EllipseError(format!(
                "semi-axes must be positive, got width {} and height {}",
                width, height
            ))));
        }
        if amount == 0 {
            return Err(Box::new(EllipseError("amount of points must be at least 1".to_string())));
        }

        Ok(EllipseSampler {
            width,
            height,
            amount,
            spacing: AngleSpacing::default(),
            frame: OutputFrame::default(),
        })
    }

    /// # Errors
    /// Error is returned for [AngleSpacing::Biased] with `strength` outside of `[0, 1)`.
    pub fn with_spacing(mut self, spacing: AngleSpacing) -> Result<Self, Box<dyn Error>> {
        if let AngleSpacing::Biased { strength } = spacing {
            if !(0.0..1.0).contains(&strength) {
                return Err(Box::new(EllipseError(format!(
                    "bias strength must be in [0, 1), got {}",
                    strength
                ))));
            }
        }
        self.spacing = spacing;
        Ok(self)
    }

    pub fn with_frame(mut self, frame: OutputFrame) -> Self {
        self.frame = frame;
        self
    }

    /// Sampling angles, starting at 0 and ending at 2π.
    pub fn angles(&self) -> Vec<f64> {
        let last = self.amount - 1;
        (0..self.amount)
            .map(|i| match last {
                0 => 0.0,
                _ if i == last => 2.0 * PI,
                _ => 2.0 * PI * i as f64 / last as f64,
            })
            .map(|angle| self.spacing.warp(angle))
            .collect()
    }

    /// Points on the ellipse in its own axis aligned frame.
    pub fn sample_local(&self) -> Vec<Point2<f64>> {
        self.angles()
            .into_iter()
            .map(|angle| {
                let (sin, cos) = angle.sin_cos();
                let radius = self.width * self.height
                    / ((self.height * cos).powi(2) + (self.width * sin).powi(2)).sqrt();
                Point2::new(radius * cos, radius * sin)
            })
            .collect()
    }

    /// Points on the ellipse mapped into the output frame.
    pub fn sample(&self) -> Vec<Point2<f64>> {
        let rotation = Rotation2::new(self.frame.rotation);
        let scale_x = self.frame.target_width / self.width;
        let scale_y = self.frame.target_height / self.height;

        debug!(
            "sampling {} ellipse points, semi-axes {}x{}, spacing {:?}",
            self.amount, self.width, self.height, self.spacing
        );

        self.sample_local()
            .into_iter()
            .map(|point| {
                let rotated = rotation * point;
                Point2::new(rotated.x * scale_x, rotated.y * scale_y)
            })
            .collect()
    }
}

#[derive(Debug)]
struct EllipseError(String);

impl Display for EllipseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in EllipseSampler: {}", self.0)
    }
}

impl Error for EllipseError {}

#[cfg(test)]
mod tests {
    use std::f64::consts::SQRT_2;

    use assert_approx_eq::assert_approx_eq;
    use super::*;

    #[test]
    fn test_local_points_lie_on_ellipse() {
        let eps = 1e-9;
        let sampler = EllipseSampler::new(4.0, 1.5, 37).unwrap();

        for point in sampler.sample_local() {
            assert_approx_eq!(1.0, (point.x / 4.0).powi(2) + (point.y / 1.5).powi(2), eps);
        }
    }

    #[test]
    fn test_angles_cover_full_turn() {
        let sampler = EllipseSampler::new(2.0, 1.0, 5).unwrap();
        let angles = sampler.angles();

        assert_eq!(vec![0.0, 0.5 * PI, PI, 1.5 * PI, 2.0 * PI], angles);
    }

    #[test]
    fn test_single_point() {
        let sampler = EllipseSampler::new(2.0, 1.0, 1).unwrap();
        let points = sampler.sample_local();

        assert_eq!(vec![0.0], sampler.angles());
        assert_eq!(vec![Point2::new(2.0, 0.0)], points);
    }

    #[test]
    fn test_default_frame() {
        let eps = 1e-9;
        let sampler = EllipseSampler::new(10.0, 2.5, 500).unwrap();
        let points = sampler.sample();

        assert_eq!(500, points.len());
        // (10, 0) rotated by 45 degrees, then scaled by 20 / 10 and 5 / 2.5
        assert_approx_eq!(10.0 / SQRT_2 * 2.0, points[0].x, eps);
        assert_approx_eq!(10.0 / SQRT_2 * 2.0, points[0].y, eps);
        assert_approx_eq!(points[0].x, points[499].x, eps);
        assert_approx_eq!(points[0].y, points[499].y, eps);
    }

    #[test]
    fn test_identity_frame() {
        let eps = 1e-12;
        let frame = OutputFrame { rotation: 0.0, target_width: 3.0, target_height: 1.0 };
        let sampler = EllipseSampler::new(3.0, 1.0, 9).unwrap().with_frame(frame);

        for (framed, local) in sampler.sample().iter().zip(sampler.sample_local().iter()) {
            assert_approx_eq!(local.x, framed.x, eps);
            assert_approx_eq!(local.y, framed.y, eps);
        }
    }

    #[test]
    fn test_biased_spacing() {
        let sampler = EllipseSampler::new(5.0, 1.0, 41)
            .unwrap()
            .with_spacing(AngleSpacing::Biased { strength: 0.8 })
            .unwrap();
        let angles = sampler.angles();

        assert_eq!(0.0, angles[0]);
        assert_approx_eq!(2.0 * PI, angles[40], 1e-12);
        assert!(angles.windows(2).all(|pair| pair[1] > pair[0]));

        // denser around the x axis vertex than around the y axis vertex
        let near_vertex = angles[1] - angles[0];
        let near_co_vertex = angles[11] - angles[10];
        assert!(near_vertex < near_co_vertex);
    }

    #[test]
    fn test_invalid_input() {
        assert!(EllipseSampler::new(0.0, 1.0, 10).is_err());
        assert!(EllipseSampler::new(1.0, -1.0, 10).is_err());
        assert!(EllipseSampler::new(f64::INFINITY, 1.0, 10).is_err());
        assert!(EllipseSampler::new(1.0, 1.0, 0).is_err());

        let sampler = EllipseSampler::new(1.0, 1.0, 10).unwrap();
        assert!(sampler.clone().with_spacing(AngleSpacing::Biased { strength: 1.0 }).is_err());
        assert!(sampler.with_spacing(AngleSpacing::Biased { strength: -0.1 }).is_err());
    }
}
