use crate::error::{MapError, MapResult};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// How the crossing count of a containment ray is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ParityConvention {
    /// An even number of crossings means the point is inside an obstacle.
    ///
    /// This is the correct reading for maps enclosed by an outer boundary
    /// wall: a free point always crosses the boundary once on its way out.
    #[default]
    EvenInside,
    /// An odd number of crossings means the point is inside an obstacle.
    OddInside,
}

impl ParityConvention {
    /// Returns true if `crossings` classifies the point as inside an obstacle.
    pub fn is_inside(&self, crossings: usize) -> bool {
        match self {
            ParityConvention::EvenInside => crossings % 2 == 0,
            ParityConvention::OddInside => crossings % 2 == 1,
        }
    }
}

/// Bounds and query parameters for a wall map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapConfig<F: Float> {
    /// Width of the sample-able world rectangle `[0, world_width)`.
    pub world_width: F,
    /// Height of the sample-able world rectangle `[0, world_height)`.
    pub world_height: F,
    /// Maximum cast distance. Must exceed the diagonal of the map.
    pub ray_length: F,
    /// Number of draws before free-point sampling gives up.
    pub max_sampling_attempts: usize,
    /// Which crossing-count parity marks a point as inside an obstacle.
    pub parity: ParityConvention,
}

impl<F: Float> MapConfig<F> {
    const DEFAULT_WORLD_WIDTH: f64 = 4.1;
    const DEFAULT_WORLD_HEIGHT: f64 = 3.05;
    // sqrt(4.25^2 + 3.20^2)
    const DEFAULT_RAY_LENGTH: f64 = 5.32;
    const DEFAULT_MAX_SAMPLING_ATTEMPTS: usize = 10_000;
    // Ray length relative to the world diagonal in `for_world`
    const RAY_LENGTH_MARGIN: f64 = 1.05;

    /// Creates a configuration for a `width` x `height` world with a ray
    /// length slightly longer than its diagonal.
    pub fn for_world(width: F, height: F) -> Self {
        let margin = F::from(Self::RAY_LENGTH_MARGIN).unwrap_or_else(F::one);
        Self {
            world_width: width,
            world_height: height,
            ray_length: width.hypot(height) * margin,
            ..Self::default()
        }
    }

    pub fn with_ray_length(mut self, ray_length: F) -> Self {
        self.ray_length = ray_length;
        self
    }

    pub fn with_max_sampling_attempts(mut self, attempts: usize) -> Self {
        self.max_sampling_attempts = attempts;
        self
    }

    pub fn with_parity(mut self, parity: ParityConvention) -> Self {
        self.parity = parity;
        self
    }

    /// Checks that the bounds and ray length are finite and positive and that
    /// at least one sampling attempt is allowed.
    pub fn validate(&self) -> MapResult<()> {
        let positive = |value: F| value.is_finite() && value > F::zero();

        if !positive(self.world_width) || !positive(self.world_height) {
            return Err(MapError::invalid_config(
                "world bounds must be finite and positive",
            ));
        }
        if !positive(self.ray_length) {
            return Err(MapError::invalid_config(
                "ray_length must be finite and positive",
            ));
        }
        if self.max_sampling_attempts == 0 {
            return Err(MapError::invalid_config(
                "max_sampling_attempts must be at least 1",
            ));
        }
        if self.ray_length <= self.world_width.hypot(self.world_height) {
            log::warn!("ray_length does not exceed the world diagonal; casts may stop inside the map");
        }
        Ok(())
    }
}

impl<F: Float> Default for MapConfig<F> {
    fn default() -> Self {
        let from = |value: f64| F::from(value).unwrap_or_else(F::one);
        Self {
            world_width: from(Self::DEFAULT_WORLD_WIDTH),
            world_height: from(Self::DEFAULT_WORLD_HEIGHT),
            ray_length: from(Self::DEFAULT_RAY_LENGTH),
            max_sampling_attempts: Self::DEFAULT_MAX_SAMPLING_ATTEMPTS,
            parity: ParityConvention::EvenInside,
        }
    }
}
