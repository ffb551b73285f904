use crate::error::MapResult;
use crate::geometry::Vector2;
use crate::map::WallMap;
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::sync::Arc;

/// Uniform distribution over an axis-aligned rectangle.
///
/// Each range is half-open: `[min, max)`.
#[derive(Clone, Debug)]
pub struct UniformDistribution<F: Float> {
    ranges: [(F, F); 2],
}

impl<F: Float> UniformDistribution<F> {
    pub fn new(ranges: [(F, F); 2]) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &[(F, F); 2] {
        &self.ranges
    }
}

impl<F: Float + SampleUniform> UniformDistribution<F> {
    /// Draws one point from the rectangle.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector2<F> {
        let [(x_min, x_max), (y_min, y_max)] = self.ranges;
        Vector2::new(rng.gen_range(x_min..x_max), rng.gen_range(y_min..y_max))
    }
}

/// Draws collision-free points from a shared map for planners.
///
/// The sampler owns its random generator, so a planner seeding a tree or
/// roadmap from a seeded generator gets the same points on every run.
pub struct FreeSpaceSampler<F: Float, R: Rng> {
    map: Arc<WallMap<F>>,
    rng: R,
}

impl<F: Float + SampleUniform, R: Rng> FreeSpaceSampler<F, R> {
    pub fn new(map: Arc<WallMap<F>>, rng: R) -> Self {
        Self { map, rng }
    }

    pub fn map(&self) -> &WallMap<F> {
        &self.map
    }

    /// Draws the next free point. See [`WallMap::sample_free_point`].
    pub fn sample(&mut self) -> MapResult<Vector2<F>> {
        self.map.sample_free_point(&mut self.rng)
    }

    /// Draws `count` free points, stopping at the first failure.
    pub fn sample_n(&mut self, count: usize) -> MapResult<Vec<Vector2<F>>> {
        (0..count).map(|_| self.sample()).collect()
    }
}
