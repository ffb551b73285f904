use crate::geometry::Vector2;
use num_traits::Float;
use rand::RngCore;

/// Collision queries a planner asks of its environment.
///
/// The trait is object safe so planners can hold a `&dyn ValidityChecker<F>`.
pub trait ValidityChecker<F: Float> {
    /// Checks whether a state lies in free space.
    ///
    /// Parameters:
    /// - `state`: The state to check.
    /// - `rng`: Random source for checks that are not deterministic.
    ///
    /// Returns:
    /// Whether the state is valid.
    fn is_state_valid(&self, state: &Vector2<F>, rng: &mut dyn RngCore) -> bool;

    /// Checks whether the straight move from `a` to `b` crosses no wall.
    fn is_edge_valid(&self, a: &Vector2<F>, b: &Vector2<F>) -> bool;
}
