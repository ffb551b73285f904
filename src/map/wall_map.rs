use crate::error::{MapError, MapResult};
use crate::geometry::{Segment, Vector2};
use crate::map::config::MapConfig;
use crate::planning::sampling::UniformDistribution;
use crate::planning::termination::{MaxAttemptsTermination, TerminationCondition};
use crate::planning::validity_checker::ValidityChecker;
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::{Rng, RngCore};

/// A static map made of wall segments.
///
/// The walls are fixed when the map is built. Every query borrows the map
/// immutably, so a single map can be shared between threads.
#[derive(Clone, Debug)]
pub struct WallMap<F: Float> {
    walls: Vec<Segment<F>>,
    config: MapConfig<F>,
    bounds: UniformDistribution<F>,
}

impl<F: Float> WallMap<F> {
    /// Creates a new map from already constructed walls.
    ///
    /// Parameters:
    /// - `walls`: The wall segments.
    /// - `config`: World bounds and query parameters.
    ///
    /// Returns `MapError::InvalidConfig` if the configuration is unusable.
    pub fn new(walls: Vec<Segment<F>>, config: MapConfig<F>) -> MapResult<Self> {
        config.validate()?;
        let bounds = UniformDistribution::new([
            (F::zero(), config.world_width),
            (F::zero(), config.world_height),
        ]);
        Ok(Self {
            walls,
            config,
            bounds,
        })
    }

    pub fn walls(&self) -> &[Segment<F>] {
        &self.walls
    }

    pub fn config(&self) -> &MapConfig<F> {
        &self.config
    }

    pub fn world_width(&self) -> F {
        self.config.world_width
    }

    pub fn world_height(&self) -> F {
        self.config.world_height
    }

    pub fn ray_length(&self) -> F {
        self.config.ray_length
    }

    /// Counts the walls strictly crossed by a ray of `ray_length` cast from
    /// `point` along `angle`.
    pub fn crossing_count(&self, point: Vector2<F>, angle: F) -> usize {
        let ray = match Segment::from_origin(point, angle, self.config.ray_length) {
            Ok(ray) => ray,
            Err(_) => return 0,
        };
        self.walls
            .iter()
            .filter(|wall| wall.strictly_crosses(&ray))
            .count()
    }

    /// Classifies `point` using a containment ray cast along `angle`.
    ///
    /// The result is exact for the given angle. Points lying on a wall, or rays
    /// grazing a wall vertex, may classify differently for other angles.
    pub fn is_inside_obstacle_at(&self, point: Vector2<F>, angle: F) -> bool {
        self.config
            .parity
            .is_inside(self.crossing_count(point, angle))
    }

    /// Returns true if the segment from `start` to `end` strictly crosses any
    /// wall.
    ///
    /// A zero-length segment cannot cross anything and returns false.
    pub fn crosses_wall(&self, start: Vector2<F>, end: Vector2<F>) -> bool {
        let segment = match Segment::new(start, end) {
            Ok(segment) => segment,
            Err(err) => {
                log::trace!("crosses_wall on invalid query segment: {err}");
                return false;
            }
        };
        self.walls.iter().any(|wall| wall.strictly_crosses(&segment))
    }
}

impl<F: Float + SampleUniform> WallMap<F> {
    /// Returns true if `point` lies inside an obstacle.
    ///
    /// The containment ray is cast in a direction drawn uniformly from
    /// `[0, 2π)` using `rng`.
    pub fn is_inside_obstacle<R: Rng + ?Sized>(&self, point: Vector2<F>, rng: &mut R) -> bool {
        let two_pi = F::from(2.0 * std::f64::consts::PI).unwrap_or_else(F::zero);
        let angle = if two_pi > F::zero() {
            rng.gen_range(F::zero()..two_pi)
        } else {
            F::zero()
        };
        self.is_inside_obstacle_at(point, angle)
    }

    /// Samples a point of the world rectangle that is not inside an obstacle.
    ///
    /// Gives up after `max_sampling_attempts` draws with
    /// `MapError::SamplingExhausted`.
    pub fn sample_free_point<R: Rng + ?Sized>(&self, rng: &mut R) -> MapResult<Vector2<F>> {
        let mut termination = MaxAttemptsTermination::new(self.config.max_sampling_attempts);
        self.sample_free_point_until(rng, &mut termination)
    }

    /// Samples a free point, drawing until one is accepted or `termination`
    /// is met.
    ///
    /// The termination condition is evaluated before every draw.
    pub fn sample_free_point_until<R: Rng + ?Sized, T: TerminationCondition>(
        &self,
        rng: &mut R,
        termination: &mut T,
    ) -> MapResult<Vector2<F>> {
        let mut attempts = 0;
        while !termination.evaluate() {
            attempts += 1;
            let sample = self.bounds.sample(rng);
            if !self.is_inside_obstacle(sample, rng) {
                return Ok(sample);
            }
            log::trace!("rejected sample ({:?}, {:?})", sample.x.to_f64(), sample.y.to_f64());
        }

        log::warn!("free-point sampling exhausted after {attempts} attempts");
        Err(MapError::SamplingExhausted { attempts })
    }
}

impl<F: Float + SampleUniform> ValidityChecker<F> for WallMap<F> {
    fn is_state_valid(&self, state: &Vector2<F>, rng: &mut dyn RngCore) -> bool {
        !self.is_inside_obstacle(*state, rng)
    }

    fn is_edge_valid(&self, a: &Vector2<F>, b: &Vector2<F>) -> bool {
        !self.crosses_wall(*a, *b)
    }
}

impl<F: Float + std::fmt::Display> std::fmt::Display for WallMap<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for wall in &self.walls {
            writeln!(f, "{wall}")?;
        }
        Ok(())
    }
}
