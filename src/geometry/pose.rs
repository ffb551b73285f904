use crate::geometry::Vector2;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// A robot pose in the map frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose<F: Float> {
    pub x: F,
    pub y: F,
    /// Heading in radians, counter-clockwise from the map's +x axis.
    pub heading: F,
}

impl<F: Float> Pose<F> {
    pub fn new(x: F, y: F, heading: F) -> Self {
        Self { x, y, heading }
    }

    pub fn position(&self) -> Vector2<F> {
        Vector2::new(self.x, self.y)
    }

    /// Converts an angle relative to the robot heading into a map-frame angle.
    pub fn absolute_angle(&self, relative_angle: F) -> F {
        self.heading + relative_angle
    }
}

impl<F: Float + std::fmt::Display> std::fmt::Display for Pose<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x {}, y {}, heading {}", self.x, self.y, self.heading)
    }
}
