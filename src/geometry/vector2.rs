use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 2D vector, used both for points in the map frame and for displacements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vector2<F> {
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(F::zero(), F::zero())
    }

    /// Unit vector pointing along `angle` (radians, counter-clockwise from +x).
    pub fn from_angle(angle: F) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// 2D scalar cross product (`self.x * other.y - self.y * other.x`).
    pub fn cross(&self, other: &Self) -> F {
        self.x * other.y - self.y * other.x
    }

    pub fn dot(&self, other: &Self) -> F {
        self.x * other.x + self.y * other.y
    }

    pub fn norm_squared(&self) -> F {
        self.dot(self)
    }

    pub fn norm(&self) -> F {
        self.x.hypot(self.y)
    }

    pub fn euclidean_distance(&self, other: &Self) -> F {
        (*self - *other).norm()
    }

    /// Rotates the vector by +90 degrees: `(x, y) -> (-y, x)`.
    pub fn rotate90(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Cross product for 2D vectors (`v.x * w.y - v.y * w.x`).
pub fn cross<F: Float>(v: &Vector2<F>, w: &Vector2<F>) -> F {
    v.cross(w)
}

impl<F: Float> Add for Vector2<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<F: Float> Sub for Vector2<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<F: Float> Neg for Vector2<F> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<F: Float> Mul<F> for Vector2<F> {
    type Output = Self;

    fn mul(self, rhs: F) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<F: Float> Div<F> for Vector2<F> {
    type Output = Self;

    fn div(self, rhs: F) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}
