use std::{error::Error, fmt::Display};

use log::debug;
use nalgebra::{Point2, Vector2};

/// Point mass moving around a central attractor at the origin, integrated with explicit Euler.
/// Position and velocity of step `n + 1` are both computed from the state of step `n`.
#[derive(Debug, Clone)]
pub struct Orbit {
    gravitational_parameter: f64,
    position: Point2<f64>,
    velocity: Vector2<f64>,
    time_step: f64,
    steps: usize,
    body_radius: f64,
}

impl Orbit {
    /// Creates orbit with time step 0.01, 1000 steps and a point-like central body.
    pub fn new(gravitational_parameter: f64, position: Point2<f64>, velocity: Vector2<f64>) -> Self {
        Orbit {
            gravitational_parameter,
            position,
            velocity,
            time_step: 0.01,
            steps: 1000,
            body_radius: 0.0,
        }
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_body_radius(mut self, body_radius: f64) -> Self {
        self.body_radius = body_radius;
        self
    }

    /// Integrates the trajectory and returns `steps + 1` positions, the initial one first.
    /// # Errors
    /// Error is returned for non positive gravitational parameter or time step, zero or `usize::MAX` steps,
    /// an initial position inside the central body, or when the trajectory hits the body.
    pub fn trajectory(&self) -> Result<Vec<Point2<f64>>, Box<dyn Error>> {
        self.validate()?;

        debug!(
            "integrating {} steps of {} from {:?}",
            self.steps, self.time_step, self.position
        );

        let mut positions = Vec::with_capacity(self.steps + 1);
        let mut position = self.position;
        let mut velocity = self.velocity;
        positions.push(position);

        for step in 1..=self.steps {
            let acceleration = self.acceleration(&position);
            let previous = position;
            position += velocity * self.time_step;
            velocity += acceleration * self.time_step;

            if self.crosses_body(&previous, &position) {
                return Err(Box::new(OrbitError(format!(
                    "trajectory reached the central body at step {}",
                    step
                ))));
            }
            positions.push(position);
        }
        Ok(positions)
    }

    fn validate(&self) -> Result<(), Box<dyn Error>> {
        if !(self.gravitational_parameter.is_finite() && self.gravitational_parameter > 0.0) {
            return Err(Box::new(OrbitError("gravitational parameter must be positive".to_string())));
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(Box::new(OrbitError("time step must be positive".to_string())));
        }
        if self.steps == 0 || self.steps == usize::MAX {
            return Err(Box::new(OrbitError(format!(
                "number of steps must be between 1 and {}, got {}",
                usize::MAX - 1,
                self.steps
            ))));
        }
        if self.is_inside_body(&self.position) {
            return Err(Box::new(OrbitError("initial position is inside the central body".to_string())));
        }
        Ok(())
    }

    fn acceleration(&self, position: &Point2<f64>) -> Vector2<f64> {
        let distance = position.coords.norm();
        -position.coords * (self.gravitational_parameter / distance.powi(3))
    }

    /// Checks the straight step from `start` to `end` against the body, not only its endpoints.
    fn crosses_body(&self, start: &Point2<f64>, end: &Point2<f64>) -> bool {
        let direction = end - start;
        let length_squared = direction.norm_squared();
        let fraction = if length_squared > 0.0 {
            (-start.coords.dot(&direction) / length_squared).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.is_inside_body(&(start + direction * fraction))
    }

    fn is_inside_body(&self, position: &Point2<f64>) -> bool {
        let distance = position.coords.norm();
        distance == 0.0 || distance <= self.body_radius
    }
}

#[derive(Debug)]
struct OrbitError(String);

impl Display for OrbitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in Orbit: {}", self.0)
    }
}

impl Error for OrbitError {}
